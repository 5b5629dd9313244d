//! PII detection module
//!
//! Provides a trait-based detection interface and the regex implementation
//! that turns pattern matches into an ordered entity list.

pub mod patterns;
pub mod regex;

use crate::anonymization::models::{parse_categories, PiiCategory, PiiEntity};
use std::collections::HashSet;

/// Trait for PII detection implementations
pub trait PiiDetector: Send + Sync {
    /// Detect PII in `text`, scanning only the categories `filter` allows
    ///
    /// Entities come back ordered by `(start, end)`. Detection never fails;
    /// text without matches yields an empty list.
    fn detect(&self, text: &str, filter: &CategoryFilter) -> Vec<PiiEntity>;
}

/// Restricts which categories a scan runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Scan every registered category
    #[default]
    All,
    /// Scan only these categories (possibly none)
    Only(HashSet<PiiCategory>),
}

impl CategoryFilter {
    /// Build a filter from caller-supplied category names
    ///
    /// `None` or an empty list scans everything. Otherwise only the
    /// recognised names are kept; a list of unknown names scans nothing.
    pub fn from_names<S: AsRef<str>>(names: Option<&[S]>) -> Self {
        match names {
            None => Self::All,
            Some([]) => Self::All,
            Some(names) => Self::Only(parse_categories(names).into_iter().collect()),
        }
    }

    /// Build a filter from typed categories
    pub fn only(categories: impl IntoIterator<Item = PiiCategory>) -> Self {
        Self::Only(categories.into_iter().collect())
    }

    /// True if `category` should be scanned
    pub fn allows(&self, category: PiiCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(set) => set.contains(&category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_empty_list_scans_everything() {
        assert_eq!(CategoryFilter::from_names::<String>(None), CategoryFilter::All);
        let empty: Vec<String> = Vec::new();
        assert_eq!(CategoryFilter::from_names(Some(&empty[..])), CategoryFilter::All);
    }

    #[test]
    fn test_known_names_restrict_scan() {
        let names = vec!["email".to_string()];
        let filter = CategoryFilter::from_names(Some(&names[..]));
        assert!(filter.allows(PiiCategory::Email));
        assert!(!filter.allows(PiiCategory::Phone));
    }

    #[test]
    fn test_unknown_names_are_ignored() {
        let filter = CategoryFilter::from_names(Some(&["passport", "phone"][..]));
        assert_eq!(filter, CategoryFilter::only([PiiCategory::Phone]));

        let filter = CategoryFilter::from_names(Some(&["passport"][..]));
        assert!(PiiCategory::ALL.iter().all(|c| !filter.allows(*c)));
    }
}
