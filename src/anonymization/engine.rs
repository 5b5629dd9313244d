//! Main anonymization engine
//!
//! This module provides the [`AnonymizationEngine`], the boundary between the
//! transport layers and the detection core. It validates requests, runs the
//! detector and hands the ordered entity list to the redactor.
//!
//! # Examples
//!
//! ```
//! use pii_redactor::anonymization::{AnonymizationEngine, AnonymizationConfig};
//! use pii_redactor::anonymization::request::RedactRequest;
//!
//! # fn example() -> pii_redactor::domain::Result<()> {
//! let engine = AnonymizationEngine::new(AnonymizationConfig::default())?;
//!
//! let request = RedactRequest::new("연락처 010-1234-5678").with_mode("partial");
//! let report = engine.redact(&request)?;
//! assert_eq!(report.redacted_text, "연락처 01*********78");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::anonymization::{
    anonymizer::MaskMode,
    config::AnonymizationConfig,
    detector::{patterns::PatternRegistry, regex::RegexDetector, CategoryFilter, PiiDetector},
    redactor::apply_redaction,
    report::{RedactReport, ScanReport},
    request::{RedactRequest, ScanRequest},
};
use crate::domain::{RedactorError, Result, ValidationError};
use crate::{log_redaction_complete, log_scan_complete};
use std::sync::Arc;
use std::time::Instant;

/// Main anonymization engine
///
/// # Thread Safety
///
/// The engine holds only read-only state (configuration and the compiled
/// pattern registry) and can be shared across tasks behind an `Arc`.
pub struct AnonymizationEngine {
    config: AnonymizationConfig,
    detector: Arc<dyn PiiDetector>,
}

impl AnonymizationEngine {
    /// Create a new anonymization engine
    ///
    /// Compiles the built-in pattern library, or the custom one named by
    /// `config.pattern_library`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if validation fails or the pattern
    /// library cannot be loaded.
    pub fn new(config: AnonymizationConfig) -> Result<Self> {
        config.validate().map_err(|e| {
            RedactorError::Configuration(format!("Invalid anonymization configuration: {e}"))
        })?;

        let registry = match config.pattern_library {
            Some(ref path) => PatternRegistry::from_file(path)?,
            None => PatternRegistry::default_patterns()?,
        };

        tracing::info!(
            patterns = registry.all_patterns().len(),
            custom_library = config.pattern_library.is_some(),
            overlap = ?config.overlap,
            "Anonymization engine initialized"
        );

        let detector = RegexDetector::with_registry(Arc::new(registry))
            .with_overlap_policy(config.overlap);

        Ok(Self::with_detector(config, Arc::new(detector)))
    }

    /// Create an engine around an existing detector
    pub fn with_detector(config: AnonymizationConfig, detector: Arc<dyn PiiDetector>) -> Self {
        Self { config, detector }
    }

    /// Engine configuration
    pub fn config(&self) -> &AnonymizationConfig {
        &self.config
    }

    /// Scan a request and report every entity found
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyInput`] if the text is missing or blank.
    pub fn scan(&self, request: &ScanRequest) -> Result<ScanReport> {
        let text = validate_text(request.text.as_deref())?;
        let filter = CategoryFilter::from_names(request.include_types.as_deref());

        let start = Instant::now();
        let entities = self.detector.detect(text, &filter);
        log_scan_complete!(entities.len(), start.elapsed());

        Ok(ScanReport::new(entities))
    }

    /// Scan a request and mask every entity found
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyInput`] if the text is missing or blank, then
    /// [`ValidationError::InvalidMode`] if the mode is not recognised.
    pub fn redact(&self, request: &RedactRequest) -> Result<RedactReport> {
        let text = validate_text(request.text.as_deref())?;
        let mode = self.resolve_mode(request.mode.as_deref())?;
        let filter = CategoryFilter::from_names(request.include_types.as_deref());

        let start = Instant::now();
        let entities = self.detector.detect(text, &filter);
        let masker = mode.masker(self.config.mask_char);
        let (redacted_text, stats) = apply_redaction(text, &entities, masker.as_ref());
        log_redaction_complete!(entities.len(), mode, start.elapsed());

        Ok(RedactReport {
            count: entities.len(),
            stats,
            redacted_text: redacted_text.into_owned(),
            entities,
            mode,
        })
    }

    fn resolve_mode(&self, mode: Option<&str>) -> std::result::Result<MaskMode, ValidationError> {
        match mode {
            Some(name) => name.parse(),
            None => Ok(self.config.default_mode),
        }
    }
}

/// Trim the request text, rejecting missing or blank input
///
/// Offsets in the response refer to the trimmed text.
fn validate_text(text: Option<&str>) -> std::result::Result<&str, ValidationError> {
    match text.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed),
        _ => Err(ValidationError::EmptyInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::models::PiiCategory;

    fn engine() -> AnonymizationEngine {
        AnonymizationEngine::new(AnonymizationConfig::default()).unwrap()
    }

    #[test]
    fn test_engine_creation() {
        assert!(AnonymizationEngine::new(AnonymizationConfig::default()).is_ok());
    }

    #[test]
    fn test_scan_rejects_blank_text() {
        let err = engine().scan(&ScanRequest::new("   \n")).unwrap_err();
        assert!(matches!(
            err,
            RedactorError::Validation(ValidationError::EmptyInput)
        ));
        assert!(engine().scan(&ScanRequest::default()).is_err());
    }

    #[test]
    fn test_redact_checks_text_before_mode() {
        let request = RedactRequest::default().with_mode("bogus");
        let err = engine().redact(&request).unwrap_err();
        assert!(matches!(
            err,
            RedactorError::Validation(ValidationError::EmptyInput)
        ));
    }

    #[test]
    fn test_redact_rejects_invalid_mode() {
        let request = RedactRequest::new("hello").with_mode("bogus");
        let err = engine().redact(&request).unwrap_err();
        assert_eq!(err.to_string(), "mode must be one of full|partial|token");
    }

    #[test]
    fn test_redact_uses_configured_default_mode() {
        let config = AnonymizationConfig {
            default_mode: MaskMode::Full,
            ..Default::default()
        };
        let engine = AnonymizationEngine::new(config).unwrap();
        let report = engine.redact(&RedactRequest::new("010-1234-5678")).unwrap();
        assert_eq!(report.mode, MaskMode::Full);
        assert_eq!(report.redacted_text, "*************");
    }

    #[test]
    fn test_offsets_refer_to_trimmed_text() {
        let report = engine().scan(&ScanRequest::new("  900101-1234567  ")).unwrap();
        assert_eq!(report.count, 1);
        assert_eq!(report.entities[0].start, 0);
        assert_eq!(report.entities[0].end, 14);
    }

    #[test]
    fn test_custom_mask_char() {
        let config = AnonymizationConfig {
            mask_char: '#',
            ..Default::default()
        };
        let engine = AnonymizationEngine::new(config).unwrap();
        let report = engine
            .redact(&RedactRequest::new("010-1234-5678").with_mode("partial"))
            .unwrap();
        assert_eq!(report.redacted_text, "01#########78");
        assert_eq!(report.stats.get(&PiiCategory::Phone), Some(&1));
    }
}
