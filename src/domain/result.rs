//! Result type alias for the redactor

use super::errors::RedactorError;

/// Result type alias using `RedactorError` as the error type
///
/// # Examples
///
/// ```
/// use pii_redactor::domain::result::Result;
/// use pii_redactor::domain::errors::{RedactorError, ValidationError};
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ValidationError::EmptyInput.into())
/// }
/// ```
pub type Result<T> = std::result::Result<T, RedactorError>;
