//! Domain error types
//!
//! This module defines the error hierarchy for the redactor.
//! Request validation errors are kept separate from operational errors so the
//! transport layers can map them to client-facing responses.

use thiserror::Error;

/// Main redactor error type
///
/// This is the primary error type used throughout the library.
#[derive(Debug, Error)]
pub enum RedactorError {
    /// Configuration-related errors (config file, pattern library)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// HTTP server errors (bind, serve)
    #[error("Server error: {0}")]
    Server(String),
}

/// Request validation errors
///
/// Raised at the boundary before any detection runs. The display strings are
/// part of the HTTP contract and are returned verbatim in the `message` field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Text is missing or blank after trimming
    #[error("text is required")]
    EmptyInput,

    /// Mode is not one of full, partial, token
    #[error("mode must be one of full|partial|token")]
    InvalidMode(String),
}

impl RedactorError {
    /// Returns true if this error was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(self, RedactorError::Validation(_))
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for RedactorError {
    fn from(err: std::io::Error) -> Self {
        RedactorError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for RedactorError {
    fn from(err: serde_json::Error) -> Self {
        RedactorError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for RedactorError {
    fn from(err: toml::de::Error) -> Self {
        RedactorError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from regex compile errors
impl From<regex::Error> for RedactorError {
    fn from(err: regex::Error) -> Self {
        RedactorError::Configuration(format!("Invalid regex: {err}"))
    }
}
