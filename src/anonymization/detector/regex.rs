//! Regex-based PII detector

use super::{patterns::PatternRegistry, CategoryFilter, PiiDetector};
use crate::anonymization::config::OverlapPolicy;
use crate::anonymization::models::PiiEntity;
use crate::anonymization::offsets::CharOffsets;
use crate::domain::Result;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A match together with the registry position of the pattern that found it
#[derive(Debug, Clone)]
struct Candidate {
    entity: PiiEntity,
    priority: usize,
}

/// Regex-based PII detector
///
/// Runs every enabled pattern of the shared registry over the text and merges
/// the matches into one list ordered by position.
pub struct RegexDetector {
    pattern_registry: Arc<PatternRegistry>,
    overlap: OverlapPolicy,
}

impl RegexDetector {
    /// Create a new regex detector with default patterns
    pub fn new() -> Result<Self> {
        let registry = PatternRegistry::default_patterns()?;
        Ok(Self::with_registry(Arc::new(registry)))
    }

    /// Create a new regex detector over a shared pattern registry
    pub fn with_registry(registry: Arc<PatternRegistry>) -> Self {
        Self {
            pattern_registry: registry,
            overlap: OverlapPolicy::default(),
        }
    }

    /// Set how matches that share characters are handled
    pub fn with_overlap_policy(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = overlap;
        self
    }

    /// Find all entities in `text`, ordered by `(start, end)`
    pub fn find(&self, text: &str, filter: &CategoryFilter) -> Vec<PiiEntity> {
        if text.is_empty() {
            return Vec::new();
        }

        let offsets = CharOffsets::new(text);
        let mut candidates = Vec::new();

        for pattern in self.pattern_registry.all_patterns() {
            if !filter.allows(pattern.category) {
                continue;
            }

            for matched in pattern.regex.find_iter(text) {
                if matched.is_empty() {
                    continue;
                }
                candidates.push(Candidate {
                    entity: PiiEntity::new(
                        pattern.category,
                        offsets.to_char(matched.start()),
                        offsets.to_char(matched.end()),
                        matched.as_str(),
                    ),
                    priority: pattern.priority,
                });
            }
        }

        if self.overlap == OverlapPolicy::LongestWins {
            candidates = resolve_overlaps(candidates);
        }

        candidates.sort_by_key(|c| (c.entity.start, c.entity.end, c.priority));
        candidates.into_iter().map(|c| c.entity).collect()
    }
}

/// Keep a non-overlapping subset of the candidates
///
/// Longer spans are accepted first; among equal lengths the earlier start
/// wins, and among identical spans the earlier registry position wins.
///
/// Accepted spans are disjoint, so the accepted span with the greatest start
/// before a candidate's end is the only one that can overlap it.
fn resolve_overlaps(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by_key(|c| (Reverse(c.entity.len()), c.entity.start, c.priority));

    // start -> (end, index into kept)
    let mut spans: BTreeMap<usize, (usize, usize)> = BTreeMap::new();
    let mut kept: Vec<Candidate> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let blocking = spans
            .range(..candidate.entity.end)
            .next_back()
            .filter(|&(_, &(end, _))| end > candidate.entity.start)
            .map(|(_, &(_, idx))| idx);

        if let Some(idx) = blocking {
            let winner = &kept[idx];
            tracing::trace!(
                dropped = %candidate.entity.category,
                kept = %winner.entity.category,
                start = candidate.entity.start,
                end = candidate.entity.end,
                "Dropping overlapping match"
            );
            continue;
        }
        spans.insert(candidate.entity.start, (candidate.entity.end, kept.len()));
        kept.push(candidate);
    }
    kept
}

impl PiiDetector for RegexDetector {
    fn detect(&self, text: &str, filter: &CategoryFilter) -> Vec<PiiEntity> {
        self.find(text, filter)
    }
}
