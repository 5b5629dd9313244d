//! Domain error types and the crate-wide result alias.
//!
//! All fallible library operations return [`Result<T>`], whose error is
//! [`RedactorError`]. Input problems are reported as [`ValidationError`] and
//! converted with `?`:
//!
//! ```rust
//! use pii_redactor::domain::{Result, ValidationError};
//!
//! fn require_text(text: &str) -> Result<&str> {
//!     if text.trim().is_empty() {
//!         return Err(ValidationError::EmptyInput.into());
//!     }
//!     Ok(text)
//! }
//! # assert!(require_text("  ").is_err());
//! ```

pub mod errors;
pub mod result;

pub use errors::{RedactorError, ValidationError};
pub use result::Result;
