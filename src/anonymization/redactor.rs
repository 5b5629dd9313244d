//! Offset-based text reconstruction
//!
//! The redactor walks an ordered entity list once, copying the untouched text
//! between entities and substituting the masked replacement for each entity.

use crate::anonymization::anonymizer::{MaskMode, Masker, DEFAULT_MASK_CHAR};
use crate::anonymization::models::{PiiEntity, RedactionStats};
use crate::anonymization::offsets::CharOffsets;
use std::borrow::Cow;

/// Redact `text` using the default mask character
///
/// See [`apply_redaction`].
pub fn redact<'a>(
    text: &'a str,
    entities: &[PiiEntity],
    mode: MaskMode,
) -> (Cow<'a, str>, RedactionStats) {
    let masker = mode.masker(DEFAULT_MASK_CHAR);
    apply_redaction(text, entities, masker.as_ref())
}

/// Rebuild `text` with every entity replaced by its mask
///
/// Entities must be sorted by `start` and carry character offsets into
/// `text`. An entity starting before the end of the previous one is skipped
/// and not counted; offsets past the end of the text are clamped.
///
/// Returns the text unchanged (borrowed) when there is nothing to mask.
pub fn apply_redaction<'a>(
    text: &'a str,
    entities: &[PiiEntity],
    masker: &dyn Masker,
) -> (Cow<'a, str>, RedactionStats) {
    let mut stats = RedactionStats::new();
    if entities.is_empty() {
        return (Cow::Borrowed(text), stats);
    }

    let offsets = CharOffsets::new(text);
    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;

    for entity in entities {
        if entity.start < cursor || entity.is_empty() {
            tracing::debug!(
                category = %entity.category,
                start = entity.start,
                end = entity.end,
                cursor,
                "Skipping entity that overlaps an earlier replacement"
            );
            continue;
        }

        output.push_str(&text[offsets.to_byte(cursor)..offsets.to_byte(entity.start)]);
        output.push_str(&masker.mask(&entity.value));
        *stats.entry(entity.category).or_insert(0) += 1;
        cursor = entity.end;
    }

    output.push_str(&text[offsets.to_byte(cursor)..]);
    (Cow::Owned(output), stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::anonymizer::mask_value;
    use crate::anonymization::models::PiiCategory;

    #[test]
    fn test_no_entities_returns_input() {
        let (text, stats) = redact("hello world", &[], MaskMode::Token);
        assert!(matches!(text, Cow::Borrowed(_)));
        assert_eq!(text, "hello world");
        assert!(stats.is_empty());
    }

    #[test]
    fn test_partial_phone_in_korean_text() {
        let entities = vec![PiiEntity::new(PiiCategory::Phone, 4, 17, "010-1234-5678")];
        let (text, stats) = redact("연락처 010-1234-5678", &entities, MaskMode::Partial);
        assert_eq!(text, "연락처 01*********78");
        assert_eq!(stats.get(&PiiCategory::Phone), Some(&1));
        assert_eq!(stats.len(), 1);
    }

    #[test]
    fn test_untouched_text_is_preserved() {
        let text = "a 010-1234-5678 b test@example.com c";
        let entities = vec![
            PiiEntity::new(PiiCategory::Phone, 2, 15, "010-1234-5678"),
            PiiEntity::new(PiiCategory::Email, 18, 34, "test@example.com"),
        ];
        let (redacted, stats) = redact(text, &entities, MaskMode::Full);
        assert_eq!(redacted, "a ************* b **************** c");
        assert_eq!(stats.values().sum::<usize>(), 2);
    }

    #[test]
    fn test_token_mode_changes_length() {
        let text = "x 900101-1234567 y";
        let entities = vec![PiiEntity::new(PiiCategory::Rrn, 2, 16, "900101-1234567")];
        let (redacted, _) = redact(text, &entities, MaskMode::Token);
        let token = mask_value("900101-1234567", MaskMode::Token);
        assert_eq!(redacted, format!("x {token} y"));

        let expected_len = text.chars().count() - 14 + token.chars().count();
        assert_eq!(redacted.chars().count(), expected_len);
    }

    #[test]
    fn test_same_category_counted_per_occurrence() {
        let text = "a@b.co c@d.co";
        let entities = vec![
            PiiEntity::new(PiiCategory::Email, 0, 6, "a@b.co"),
            PiiEntity::new(PiiCategory::Email, 7, 13, "c@d.co"),
        ];
        let (_, stats) = redact(text, &entities, MaskMode::Full);
        assert_eq!(stats.get(&PiiCategory::Email), Some(&2));
    }

    #[test]
    fn test_overlapping_entity_is_skipped() {
        let text = "010-1234-5678";
        let entities = vec![
            PiiEntity::new(PiiCategory::Phone, 0, 13, "010-1234-5678"),
            PiiEntity::new(PiiCategory::Account, 0, 13, "010-1234-5678"),
        ];
        let (redacted, stats) = redact(text, &entities, MaskMode::Full);
        assert_eq!(redacted, "*************");
        assert_eq!(stats.get(&PiiCategory::Phone), Some(&1));
        assert_eq!(stats.get(&PiiCategory::Account), None);
    }

    #[test]
    fn test_entity_at_end_of_text() {
        let entities = vec![PiiEntity::new(PiiCategory::Email, 3, 9, "a@b.co")];
        let (redacted, _) = redact("메일 a@b.co", &entities, MaskMode::Partial);
        assert_eq!(redacted, "메일 a@**co");
    }
}
