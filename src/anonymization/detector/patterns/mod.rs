//! Pattern library for PII detection

use crate::anonymization::models::PiiCategory;
use crate::domain::{RedactorError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// Pattern definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Descriptive name, used in logs and error messages
    pub name: String,
    /// PII category label (`rrn`, `phone`, `email`, `account`, `address`)
    pub category: String,
    /// Regex patterns for this category
    pub patterns: Vec<String>,
}

/// Compiled pattern with metadata
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Name of the definition this pattern came from
    pub name: String,
    /// Compiled regex
    pub regex: Regex,
    /// PII category
    pub category: PiiCategory,
    /// Position in the registry; lower wins ties between identical spans
    pub priority: usize,
}

/// Pattern library container
///
/// An array of tables keeps declaration order, which is the tie-break order.
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    #[serde(default)]
    patterns: Vec<PatternDefinition>,
}

/// Ordered, immutable registry of compiled detectors
///
/// Built once at startup and shared read-only (behind an `Arc`) by every
/// request.
#[derive(Debug)]
pub struct PatternRegistry {
    patterns: Vec<CompiledPattern>,
}

impl PatternRegistry {
    /// Create a new pattern registry from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            RedactorError::Configuration(format!(
                "Failed to read pattern library {}: {e}",
                path.as_ref().display()
            ))
        })?;

        Self::from_toml(&content)
    }

    /// Create a pattern registry from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary = toml::from_str(content).map_err(|e| {
            RedactorError::Configuration(format!("Failed to parse pattern library TOML: {e}"))
        })?;

        let mut patterns = Vec::new();

        for def in library.patterns {
            let category: PiiCategory = def.category.parse().map_err(|_| {
                RedactorError::Configuration(format!(
                    "Invalid category in pattern '{}': {}",
                    def.name, def.category
                ))
            })?;

            for pattern_str in &def.patterns {
                let regex = Regex::new(pattern_str).map_err(|e| {
                    RedactorError::Configuration(format!(
                        "Invalid regex in pattern '{}': {pattern_str}: {e}",
                        def.name
                    ))
                })?;

                patterns.push(CompiledPattern {
                    name: def.name.clone(),
                    regex,
                    category,
                    priority: patterns.len(),
                });
            }
        }

        if patterns.is_empty() {
            return Err(RedactorError::Configuration(
                "Pattern library defines no patterns".to_string(),
            ));
        }

        tracing::debug!(patterns = patterns.len(), "Pattern registry compiled");

        Ok(Self { patterns })
    }

    /// Create a default pattern registry with built-in patterns
    pub fn default_patterns() -> Result<Self> {
        let default_toml = include_str!("../../../../patterns/pii_patterns.toml");
        Self::from_toml(default_toml)
    }

    /// Get all patterns in registry order
    pub fn all_patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Get patterns for a specific category, in registry order
    pub fn patterns_for_category(
        &self,
        category: PiiCategory,
    ) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.iter().filter(move |p| p.category == category)
    }

    /// Categories that have at least one pattern
    pub fn categories(&self) -> Vec<PiiCategory> {
        let mut categories: Vec<PiiCategory> = Vec::new();
        for pattern in &self.patterns {
            if !categories.contains(&pattern.category) {
                categories.push(pattern.category);
            }
        }
        categories
    }
}
