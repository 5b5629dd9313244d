//! PII entity data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Kind of sensitive data a detector targets
///
/// Declaration order is also the ordering used for stats output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PiiCategory {
    /// Resident registration number (`900101-1234567`)
    Rrn,
    /// Mobile phone number (`010-1234-5678`)
    Phone,
    /// Email address
    Email,
    /// Bank account number
    Account,
    /// Street address built from Korean administrative units
    Address,
}

impl PiiCategory {
    /// Every category, in registry declaration order
    pub const ALL: [PiiCategory; 5] = [
        Self::Rrn,
        Self::Phone,
        Self::Email,
        Self::Account,
        Self::Address,
    ];

    /// Wire name used in requests, responses and pattern libraries
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rrn => "rrn",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Account => "account",
            Self::Address => "address",
        }
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown PII category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for PiiCategory {
    type Err = UnknownCategory;

    /// Parses an exact lowercase wire name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rrn" => Ok(Self::Rrn),
            "phone" => Ok(Self::Phone),
            "email" => Ok(Self::Email),
            "account" => Ok(Self::Account),
            "address" => Ok(Self::Address),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// Detected PII entity
///
/// Offsets are character indices into the scanned text, `start` inclusive
/// and `end` exclusive. `value` is exactly the characters in that range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiiEntity {
    /// Category of PII
    #[serde(rename = "type")]
    pub category: PiiCategory,
    /// Start position in characters
    pub start: usize,
    /// End position in characters (exclusive)
    pub end: usize,
    /// Matched text
    pub value: String,
}

impl PiiEntity {
    /// Create a new PII entity
    pub fn new(category: PiiCategory, start: usize, end: usize, value: impl Into<String>) -> Self {
        Self {
            category,
            start,
            end,
            value: value.into(),
        }
    }

    /// Length of the span in characters
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True for a zero-width span
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if the two spans share at least one character
    pub fn overlaps(&self, other: &PiiEntity) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Per-category count of masked occurrences for one redaction
pub type RedactionStats = BTreeMap<PiiCategory, usize>;

/// Parse category names, silently dropping the ones that are not recognised
pub fn parse_categories<I, S>(names: I) -> Vec<PiiCategory>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter_map(|name| name.as_ref().parse().ok())
        .collect()
}
