//! Error handling for brute-forge

use thiserror::Error;

/// Main error type for brute-forge
///
/// The search itself has no error path: "found" and "exhausted" are both
/// valid outcomes. Errors only arise from configuration and CLI input.
#[derive(Error, Debug, Clone)]
pub enum BruteForgeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl BruteForgeError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// User-friendly message with a hint for the CLI
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration error: {}\n💡 Check the alphabet and length settings", message)
            }
            Self::Parse { message, content } => match content {
                Some(content) => {
                    format!("❌ Parse error: {}\n💡 Offending input: {}", message, content)
                }
                None => format!("❌ Parse error: {}", message),
            },
            Self::Cli { message } => {
                format!("❌ Command error: {}\n💡 Use --help for usage information", message)
            }
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, BruteForgeError>;
