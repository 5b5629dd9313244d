//! Anonymization module
//!
//! This module provides PII detection and masking for free-form text.
//!
//! # Architecture
//!
//! The pipeline consists of:
//! - **Patterns**: an ordered, immutable registry of compiled regexes
//! - **Detection**: every enabled pattern is run and the matches are merged
//!   into one list ordered by position
//! - **Masking**: full, partial or token replacement of each matched value
//! - **Redaction**: the original text is rebuilt with every match replaced
//!
//! # Usage
//!
//! ```rust
//! use pii_redactor::anonymization::{AnonymizationEngine, AnonymizationConfig, ScanRequest};
//!
//! let engine = AnonymizationEngine::new(AnonymizationConfig::default())?;
//! let report = engine.scan(&ScanRequest::new("900101-1234567"))?;
//! assert_eq!(report.count, 1);
//! # Ok::<(), pii_redactor::domain::RedactorError>(())
//! ```

pub mod anonymizer;
pub mod config;
pub mod detector;
pub mod engine;
pub mod models;
pub mod offsets;
pub mod redactor;
pub mod report;
pub mod request;

// Re-export main types
pub use anonymizer::{mask_value, MaskMode, Masker};
pub use config::{AnonymizationConfig, OverlapPolicy};
pub use detector::CategoryFilter;
pub use engine::AnonymizationEngine;
pub use models::{PiiCategory, PiiEntity, RedactionStats};
pub use redactor::redact;
pub use report::{RedactReport, ScanReport};
pub use request::{RedactRequest, ScanRequest};
