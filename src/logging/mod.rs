//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human-readable or JSON console output (on stderr)
//! - Configurable log levels, overridable with `RUST_LOG`
//! - Local JSON file logging with rotation
//!
//! Log events never carry scanned text or matched values; only categories,
//! offsets, counts and timings.
//!
//! # Example
//!
//! ```no_run
//! use pii_redactor::logging::init_logging;
//! use pii_redactor::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the completion of a scan
///
/// # Example
///
/// ```no_run
/// use pii_redactor::log_scan_complete;
/// use std::time::Duration;
///
/// log_scan_complete!(3, Duration::from_micros(250));
/// ```
#[macro_export]
macro_rules! log_scan_complete {
    ($count:expr, $duration:expr) => {
        tracing::info!(
            count = $count,
            duration_us = $duration.as_micros() as u64,
            "Scan completed"
        );
    };
}

/// Log the completion of a redaction
///
/// # Example
///
/// ```no_run
/// use pii_redactor::log_redaction_complete;
/// use pii_redactor::anonymization::MaskMode;
/// use std::time::Duration;
///
/// log_redaction_complete!(2, MaskMode::Token, Duration::from_micros(400));
/// ```
#[macro_export]
macro_rules! log_redaction_complete {
    ($count:expr, $mode:expr, $duration:expr) => {
        tracing::info!(
            count = $count,
            mode = %$mode,
            duration_us = $duration.as_micros() as u64,
            "Redaction completed"
        );
    };
}

/// Log a rejected request
///
/// # Example
///
/// ```no_run
/// use pii_redactor::log_request_rejected;
/// use pii_redactor::domain::ValidationError;
///
/// log_request_rejected!("/scan", &ValidationError::EmptyInput);
/// ```
#[macro_export]
macro_rules! log_request_rejected {
    ($operation:expr, $error:expr) => {
        tracing::warn!(
            operation = $operation,
            reason = %$error,
            "Request rejected"
        );
    };
}
