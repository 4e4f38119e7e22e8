//! SHA-256 oracle

use super::DigestOracle;
use sha2::{Digest, Sha256};

/// SHA-256 digest oracle (32-byte output)
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Oracle;

impl DigestOracle for Sha256Oracle {
    fn name(&self) -> &'static str {
        "sha256"
    }

    fn digest(&self, text: &str) -> Vec<u8> {
        Sha256::digest(text.as_bytes()).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        assert_eq!(
            hex::encode(Sha256Oracle.digest("abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_output_width() {
        assert_eq!(Sha256Oracle.digest("anything").len(), 32);
    }
}
