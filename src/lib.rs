// PII Redactor - Korean PII detection and masking service
// Copyright (c) 2025 PII Redactor Contributors
// Licensed under the MIT License

//! # PII Redactor
//!
//! Detects Korean personal data in free-form text and masks it. Five
//! categories are recognised: resident registration numbers, mobile phone
//! numbers, email addresses, bank account numbers and street addresses.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Scanning** text with an immutable, ordered pattern registry
//! - **Masking** each detection in `full`, `partial` or `token` mode
//! - **Serving** both operations over a small HTTP/JSON API
//!
//! ## Architecture
//!
//! - [`anonymization`] - Pattern registry, detection, masking and the engine
//! - [`server`] - axum HTTP adapter
//! - [`cli`] - Command-line interface and argument parsing
//! - [`domain`] - Error types and the result alias
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use pii_redactor::anonymization::{AnonymizationConfig, AnonymizationEngine, ScanRequest};
//!
//! # fn main() -> pii_redactor::domain::Result<()> {
//! let engine = AnonymizationEngine::new(AnonymizationConfig::default())?;
//!
//! let report = engine.scan(&ScanRequest::new("900101-1234567"))?;
//! assert_eq!(report.count, 1);
//! assert_eq!(report.entities[0].start, 0);
//! assert_eq!(report.entities[0].end, 14);
//! # Ok(())
//! # }
//! ```
//!
//! ## Offsets
//!
//! Entity `start`/`end` are character offsets (Unicode scalar values) into
//! the trimmed input text, not byte offsets.

pub mod anonymization;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod server;
