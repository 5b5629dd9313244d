//! Masking strategy module
//!
//! Provides the three masking modes applied to detected PII values. Every
//! length here is measured in characters, never bytes.

pub mod redaction;
pub mod tokenization;

use crate::domain::ValidationError;
use redaction::{FullMask, PartialMask};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tokenization::TokenMask;

/// Character used to hide masked content unless configured otherwise
pub const DEFAULT_MASK_CHAR: char = '*';

/// Trait for masking strategy implementations
pub trait Masker: Send + Sync {
    /// Produce the replacement for a matched value
    fn mask(&self, value: &str) -> String;
}

/// Masking mode requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskMode {
    /// Every character replaced by the mask character
    Full,
    /// First and last two characters kept, the rest masked
    #[default]
    Partial,
    /// Deterministic `<PII_xxxxxxxxxxxx>` fingerprint
    Token,
}

impl MaskMode {
    /// Wire name of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Partial => "partial",
            Self::Token => "token",
        }
    }

    /// Build the strategy implementing this mode
    pub fn masker(self, mask_char: char) -> Box<dyn Masker> {
        match self {
            Self::Full => Box::new(FullMask::new(mask_char)),
            Self::Partial => Box::new(PartialMask::new(mask_char)),
            Self::Token => Box::new(TokenMask::new()),
        }
    }
}

impl fmt::Display for MaskMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaskMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Self::Full),
            "partial" => Ok(Self::Partial),
            "token" => Ok(Self::Token),
            other => Err(ValidationError::InvalidMode(other.to_string())),
        }
    }
}

/// Mask a single value with the default mask character
pub fn mask_value(value: &str, mode: MaskMode) -> String {
    mode.masker(DEFAULT_MASK_CHAR).mask(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("full", MaskMode::Full)]
    #[test_case("partial", MaskMode::Partial)]
    #[test_case("token", MaskMode::Token)]
    fn test_parse_mode(input: &str, expected: MaskMode) {
        assert_eq!(input.parse::<MaskMode>(), Ok(expected));
        assert_eq!(expected.to_string(), input);
    }

    #[test_case("FULL" ; "uppercase")]
    #[test_case("redact" ; "unknown word")]
    #[test_case("" ; "empty")]
    fn test_parse_invalid_mode(input: &str) {
        assert_eq!(
            input.parse::<MaskMode>(),
            Err(ValidationError::InvalidMode(input.to_string()))
        );
    }

    #[test]
    fn test_default_mode_is_partial() {
        assert_eq!(MaskMode::default(), MaskMode::Partial);
    }

    #[test_case("010-1234-5678")]
    #[test_case("test@example.com")]
    #[test_case("서울시 강남구 테헤란로 123")]
    fn test_length_preserving_modes(value: &str) {
        let len = value.chars().count();
        assert_eq!(mask_value(value, MaskMode::Full).chars().count(), len);

        let partial = mask_value(value, MaskMode::Partial);
        assert_eq!(partial.chars().count(), len);
        let head: String = value.chars().take(2).collect();
        let tail: String = value.chars().skip(len - 2).collect();
        assert!(partial.starts_with(&head));
        assert!(partial.ends_with(&tail));
    }

    #[test]
    fn test_token_mode_is_deterministic_and_distinct() {
        let a = mask_value("900101-1234567", MaskMode::Token);
        let b = mask_value("900101-1234567", MaskMode::Token);
        let c = mask_value("900101-1234568", MaskMode::Token);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
