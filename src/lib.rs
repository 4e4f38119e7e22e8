//! Brute Forge - exhaustive password recovery over bounded alphabet spaces
//!
//! A small library and CLI that enumerates every string over a fixed alphabet
//! up to a maximum length and returns the first one whose digest matches a
//! caller-supplied target. Three interchangeable traversal strategies cover
//! the same space in the same order with different machinery.

pub mod error;
pub mod oracle;
pub mod search;
pub mod types;

// Re-export commonly used types
pub use error::{BruteForgeError, Result};
pub use oracle::{digests_equal, DigestOracle, Md5Oracle, Sha256Oracle};
pub use search::Strategy;
pub use types::{Alphabet, SearchConfig, SearchOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
