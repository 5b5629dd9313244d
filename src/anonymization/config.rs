//! Anonymization configuration

use crate::anonymization::anonymizer::{MaskMode, DEFAULT_MASK_CHAR};
use crate::domain::{RedactorError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How matches from different patterns that share characters are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Keep a non-overlapping subset: longest span, then earliest start,
    /// then earliest registry entry
    #[default]
    LongestWins,
    /// Report every match; redaction skips entities that start inside an
    /// earlier replacement
    KeepAll,
}

/// Detection and masking settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizationConfig {
    /// Path to a custom pattern library TOML file (built-ins when unset)
    #[serde(default)]
    pub pattern_library: Option<PathBuf>,

    /// Overlap resolution between detectors
    #[serde(default)]
    pub overlap: OverlapPolicy,

    /// Mode used when a redact request does not name one
    #[serde(default)]
    pub default_mode: MaskMode,

    /// Character used by full and partial masking
    #[serde(default = "default_mask_char")]
    pub mask_char: char,
}

fn default_mask_char() -> char {
    DEFAULT_MASK_CHAR
}

impl Default for AnonymizationConfig {
    fn default() -> Self {
        Self {
            pattern_library: None,
            overlap: OverlapPolicy::default(),
            default_mode: MaskMode::default(),
            mask_char: DEFAULT_MASK_CHAR,
        }
    }
}

impl AnonymizationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if let Some(ref path) = self.pattern_library {
            if !path.exists() {
                return Err(format!("Pattern library file not found: {}", path.display()));
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                return Err(format!(
                    "Pattern library must be a TOML file: {}",
                    path.display()
                ));
            }
        }

        if self.mask_char.is_whitespace() || self.mask_char.is_control() {
            return Err(format!(
                "Invalid mask_char {:?}: must be a visible character",
                self.mask_char
            ));
        }

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("PII_REDACTOR_ANONYMIZATION_PATTERN_LIBRARY") {
            self.pattern_library = Some(PathBuf::from(val));
        }

        if let Ok(val) = std::env::var("PII_REDACTOR_ANONYMIZATION_OVERLAP") {
            self.overlap = match val.to_lowercase().as_str() {
                "longest_wins" => OverlapPolicy::LongestWins,
                "keep_all" => OverlapPolicy::KeepAll,
                _ => {
                    return Err(RedactorError::Configuration(format!(
                        "Invalid PII_REDACTOR_ANONYMIZATION_OVERLAP: {val}"
                    )))
                }
            };
        }

        if let Ok(val) = std::env::var("PII_REDACTOR_ANONYMIZATION_DEFAULT_MODE") {
            self.default_mode = val.to_lowercase().parse().map_err(|_| {
                RedactorError::Configuration(format!(
                    "Invalid PII_REDACTOR_ANONYMIZATION_DEFAULT_MODE: {val}"
                ))
            })?;
        }

        if let Ok(val) = std::env::var("PII_REDACTOR_ANONYMIZATION_MASK_CHAR") {
            let mut chars = val.chars();
            self.mask_char = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => {
                    return Err(RedactorError::Configuration(format!(
                        "PII_REDACTOR_ANONYMIZATION_MASK_CHAR must be a single character: {val}"
                    )))
                }
            };
        }

        Ok(())
    }
}
