//! Digest oracles - the one-way functions the search runs against
//!
//! The search engine never computes digests itself; it asks an oracle. Any
//! deterministic fixed-width function works, cryptographic or not: search
//! correctness only relies on distinct short strings mapping to distinct
//! digests with overwhelming probability. A genuine collision would make the
//! search return a colliding candidate instead of the original plaintext,
//! which is an accepted risk.

mod md5;
mod sha256;

pub use md5::Md5Oracle;
pub use sha256::Sha256Oracle;

use crate::error::{BruteForgeError, Result};

/// A deterministic one-way function with fixed output width
pub trait DigestOracle {
    /// Short name for logs and CLI selection
    fn name(&self) -> &'static str;

    /// Digest of the given text; same input always yields the same output
    fn digest(&self, text: &str) -> Vec<u8>;
}

/// Look up an oracle by name for CLI selection
pub fn from_name(name: &str) -> Result<Box<dyn DigestOracle>> {
    match name {
        "md5" => Ok(Box::new(Md5Oracle)),
        "sha256" => Ok(Box::new(Sha256Oracle)),
        other => Err(BruteForgeError::config(format!(
            "unknown digest '{}' (expected md5 or sha256)",
            other
        ))),
    }
}

/// Element-wise digest equality
///
/// Digests of unequal length are never equal. Not constant-time: the target
/// digest is the publicly known search input, not a secret to protect from a
/// timing side-channel.
pub fn digests_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    for i in 0..a.len() {
        if a[i] != b[i] {
            return false;
        }
    }
    true
}
