//! Scan and redaction reports
//!
//! These are the response bodies of the scan and redact operations.

use crate::anonymization::anonymizer::MaskMode;
use crate::anonymization::models::{PiiCategory, PiiEntity, RedactionStats};
use serde::{Deserialize, Serialize};

/// Result of a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Number of entities found
    pub count: usize,
    /// Entities ordered by position
    pub entities: Vec<PiiEntity>,
}

impl ScanReport {
    /// Create a report from an ordered entity list
    pub fn new(entities: Vec<PiiEntity>) -> Self {
        Self {
            count: entities.len(),
            entities,
        }
    }

    /// Check if any PII was detected
    pub fn has_detections(&self) -> bool {
        !self.entities.is_empty()
    }

    /// Entities of one category
    pub fn entities_of(&self, category: PiiCategory) -> impl Iterator<Item = &PiiEntity> {
        self.entities.iter().filter(move |e| e.category == category)
    }
}

/// Result of a redaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactReport {
    /// Number of entities found
    pub count: usize,
    /// Masked occurrences per category
    pub stats: RedactionStats,
    /// Text with every entity masked
    pub redacted_text: String,
    /// Entities ordered by position, with their original values
    pub entities: Vec<PiiEntity>,
    /// Mode that was applied
    pub mode: MaskMode,
}

impl RedactReport {
    /// Total number of masked occurrences
    pub fn total_masked(&self) -> usize {
        self.stats.values().sum()
    }
}
