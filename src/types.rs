//! Core types for brute-forge

use crate::error::{BruteForgeError, Result};
use std::str::FromStr;

/// Ordered, fixed character set for candidate generation
///
/// The order of the characters defines the enumeration order and is preserved
/// exactly; every traversal strategy visits candidates lexicographically with
/// respect to this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from an ordered character sequence
    ///
    /// Rejects an empty set and duplicate characters; duplicates would make
    /// the enumeration visit the same candidate more than once.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Result<Self> {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.is_empty() {
            return Err(BruteForgeError::config("alphabet must not be empty"));
        }
        for (i, c) in chars.iter().enumerate() {
            if chars[..i].contains(c) {
                return Err(BruteForgeError::config(format!(
                    "duplicate character '{}' in alphabet",
                    c
                )));
            }
        }
        Ok(Self { chars })
    }

    /// Lowercase letters a-z
    pub fn lowercase() -> Self {
        Self {
            chars: ('a'..='z').collect(),
        }
    }

    /// The classic demo alphabet a-g
    pub fn demo() -> Self {
        Self {
            chars: ('a'..='g').collect(),
        }
    }

    /// Characters in enumeration order
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: construction rejects empty alphabets
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl FromStr for Alphabet {
    type Err = BruteForgeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.chars())
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Search space configuration
///
/// Passed explicitly to every search call; there is no ambient or global
/// configuration, so searches with different parameters never interfere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub alphabet: Alphabet,
    /// Maximum candidate length in characters, inclusive
    pub max_len: usize,
}

impl SearchConfig {
    pub fn new(alphabet: Alphabet, max_len: usize) -> Self {
        Self { alphabet, max_len }
    }

    /// Total number of candidates: sum over lengths 0..=max_len of |alphabet|^len
    ///
    /// Saturates at u64::MAX for spaces too large to count, which are also
    /// too large to search.
    pub fn space_size(&self) -> u64 {
        let base = self.alphabet.len() as u64;
        let mut total: u64 = 0;
        let mut layer: u64 = 1;
        for _ in 0..=self.max_len {
            total = total.saturating_add(layer);
            layer = layer.saturating_mul(base);
        }
        total
    }
}

impl Default for SearchConfig {
    /// Alphabet a-g, maximum length 5
    fn default() -> Self {
        Self {
            alphabet: Alphabet::demo(),
            max_len: 5,
        }
    }
}

/// Result of one exhaustive search call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// First candidate whose digest matched, or None if the space is exhausted
    pub candidate: Option<String>,
    /// Number of digest evaluations performed
    pub digests_computed: u64,
}

impl SearchOutcome {
    pub fn found(candidate: String, digests_computed: u64) -> Self {
        Self {
            candidate: Some(candidate),
            digests_computed,
        }
    }

    pub fn exhausted(digests_computed: u64) -> Self {
        Self {
            candidate: None,
            digests_computed,
        }
    }

    pub fn is_found(&self) -> bool {
        self.candidate.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_preserves_order() {
        let alphabet = Alphabet::new("gfe".chars()).unwrap();
        assert_eq!(alphabet.chars(), &['g', 'f', 'e']);
    }

    #[test]
    fn test_alphabet_rejects_empty() {
        assert!(Alphabet::new("".chars()).is_err());
    }

    #[test]
    fn test_alphabet_rejects_duplicates() {
        let err = Alphabet::new("abca".chars()).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_alphabet_from_str() {
        let alphabet: Alphabet = "abcdefg".parse().unwrap();
        assert_eq!(alphabet.len(), 7);
        assert_eq!(alphabet.to_string(), "abcdefg");
    }

    #[test]
    fn test_space_size_demo() {
        // 1 + 7 + 49 + 343 + 2401 + 16807
        assert_eq!(SearchConfig::default().space_size(), 19_608);
    }

    #[test]
    fn test_space_size_zero_length() {
        let config = SearchConfig::new(Alphabet::lowercase(), 0);
        assert_eq!(config.space_size(), 1);
    }

    #[test]
    fn test_space_size_saturates() {
        let config = SearchConfig::new(Alphabet::lowercase(), 1_000);
        assert_eq!(config.space_size(), u64::MAX);
    }
}
