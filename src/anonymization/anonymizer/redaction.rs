//! In-place masking strategies

use super::Masker;

/// Number of characters kept visible at each end in partial mode
const PARTIAL_KEEP: usize = 2;

/// Full masking - every character replaced by the mask character
pub struct FullMask {
    mask_char: char,
}

impl FullMask {
    /// Create a new full masking strategy
    pub fn new(mask_char: char) -> Self {
        Self { mask_char }
    }
}

impl Masker for FullMask {
    fn mask(&self, value: &str) -> String {
        std::iter::repeat(self.mask_char)
            .take(value.chars().count())
            .collect()
    }
}

/// Partial masking - keeps the first and last two characters readable
///
/// Values of four characters or fewer are fully masked.
pub struct PartialMask {
    mask_char: char,
    keep: usize,
}

impl PartialMask {
    /// Create a new partial masking strategy
    pub fn new(mask_char: char) -> Self {
        Self {
            mask_char,
            keep: PARTIAL_KEEP,
        }
    }
}

impl Masker for PartialMask {
    fn mask(&self, value: &str) -> String {
        let len = value.chars().count();
        if len <= self.keep * 2 {
            return FullMask::new(self.mask_char).mask(value);
        }

        value
            .chars()
            .enumerate()
            .map(|(idx, ch)| {
                if idx < self.keep || idx >= len - self.keep {
                    ch
                } else {
                    self.mask_char
                }
            })
            .collect()
    }
}
