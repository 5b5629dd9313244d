//! Byte/character offset translation
//!
//! The regex engine reports byte offsets while entities carry character
//! offsets. A [`CharOffsets`] table is built once per scanned text and used
//! in both directions.

/// Byte position of every character boundary in a text
#[derive(Debug, Clone)]
pub struct CharOffsets {
    /// `boundaries[i]` is the byte offset of character `i`; the final entry
    /// is the byte length of the text.
    boundaries: Vec<usize>,
}

impl CharOffsets {
    /// Build the boundary table for `text`
    pub fn new(text: &str) -> Self {
        let mut boundaries: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
        boundaries.push(text.len());
        Self { boundaries }
    }

    /// Number of characters in the text
    pub fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Character index of a byte offset
    ///
    /// Offsets inside a multi-byte character round up to the next boundary.
    pub fn to_char(&self, byte: usize) -> usize {
        match self.boundaries.binary_search(&byte) {
            Ok(idx) | Err(idx) => idx.min(self.char_len()),
        }
    }

    /// Byte offset of a character index, clamped to the end of the text
    pub fn to_byte(&self, char_idx: usize) -> usize {
        self.boundaries[char_idx.min(self.char_len())]
    }
}
