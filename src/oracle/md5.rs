//! MD5 oracle - the default digest for the demo harness

use super::DigestOracle;
use md5::{Digest, Md5};

/// MD5 digest oracle (16-byte output)
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Oracle;

impl DigestOracle for Md5Oracle {
    fn name(&self) -> &'static str {
        "md5"
    }

    fn digest(&self, text: &str) -> Vec<u8> {
        Md5::digest(text.as_bytes()).to_vec()
    }
}
