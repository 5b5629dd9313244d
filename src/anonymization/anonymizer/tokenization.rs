//! Tokenization masking strategy

use super::Masker;
use sha2::{Digest, Sha256};

/// Number of hex characters of the digest embedded in a token
pub const TOKEN_DIGEST_LEN: usize = 12;

/// Tokenization strategy - replaces PII with `<PII_{digest}>`
///
/// The digest is an unsalted SHA-256 of the value, so repeated occurrences of
/// the same value map to the same token across requests.
pub struct TokenMask;

impl TokenMask {
    /// Create a new tokenization strategy
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokenMask {
    fn default() -> Self {
        Self::new()
    }
}

/// Hex-encoded SHA-256 of a value
pub fn hash_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}

impl Masker for TokenMask {
    fn mask(&self, value: &str) -> String {
        let digest = hash_value(value);
        format!("<PII_{}>", &digest[..TOKEN_DIGEST_LEN])
    }
}
