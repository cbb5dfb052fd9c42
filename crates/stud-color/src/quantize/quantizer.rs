//! Nearest-palette-color quantization with usage accounting.

use std::collections::HashMap;

use super::error::QuantizeError;
use crate::color::Color;
use crate::palette::{BrickPalette, PaletteEntry};

/// Maps arbitrary source colors onto their nearest palette entry and counts
/// how often each entry is actually used.
///
/// The quantizer works in two phases:
///
/// 1. [`build_filter`](Quantizer::build_filter) runs once over the distinct
///    colors of a source image -- O(distinct colors x palette size), not once
///    per pixel -- and memoizes each color's nearest entry.
/// 2. [`quantize`](Quantizer::quantize) and
///    [`mark_used`](Quantizer::mark_used) are O(1) lookups into that filter.
///
/// Alpha is not part of the matching metric: every color is forced opaque
/// before keying and matching, so a translucent and an opaque variant of the
/// same RGB share one filter slot.
///
/// Usage counters track rendered studs, not filter entries: an entry mapped
/// by the filter but never passed to `mark_used` reports a count of zero
/// rather than being absent. Build a fresh quantizer per image run.
///
/// # Example
///
/// ```
/// use stud_color::{BrickPalette, Color, Quantizer};
///
/// let mut quantizer = Quantizer::new(BrickPalette::classic());
/// let reddish = Color::from_rgb8(250, 10, 10);
/// quantizer.build_filter([reddish]);
///
/// let entry = quantizer.mark_used(&reddish).unwrap();
/// assert_eq!(entry.name(), "bright red");
/// ```
#[derive(Debug)]
pub struct Quantizer {
    palette: BrickPalette,
    /// Source color (opaque) -> palette index
    filter: HashMap<Color, usize>,
    /// Palette index -> studs rendered with that entry
    uses: HashMap<usize, u64>,
}

impl Quantizer {
    /// Create a quantizer over the given palette with an empty filter.
    pub fn new(palette: BrickPalette) -> Self {
        Self {
            palette,
            filter: HashMap::new(),
            uses: HashMap::new(),
        }
    }

    /// The palette being matched against.
    #[inline]
    pub fn palette(&self) -> &BrickPalette {
        &self.palette
    }

    /// Number of distinct source colors mapped so far.
    #[inline]
    pub fn filter_len(&self) -> usize {
        self.filter.len()
    }

    /// Precompute the nearest palette entry for every color in `colors`.
    ///
    /// Already-mapped colors are skipped, so incremental calls are cheap and
    /// repeated runs over the same set produce the identical mapping. Every
    /// entry that becomes a match target gets its usage counter initialized
    /// to zero.
    pub fn build_filter<I>(&mut self, colors: I)
    where
        I: IntoIterator<Item = Color>,
    {
        for color in colors {
            let key = color.opaque();
            if self.filter.contains_key(&key) {
                continue;
            }
            let (idx, _) = self.palette.find_nearest(&key);
            self.filter.insert(key, idx);
            self.uses.entry(idx).or_insert(0);
        }
    }

    /// Look up the palette entry matched to `color`, without counting a use.
    ///
    /// # Errors
    ///
    /// [`QuantizeError::NotFound`] when the color (after forcing alpha
    /// opaque) was never passed through
    /// [`build_filter`](Quantizer::build_filter).
    pub fn quantize(&self, color: &Color) -> Result<&PaletteEntry, QuantizeError> {
        let key = color.opaque();
        self.filter
            .get(&key)
            .map(|&idx| self.palette.entry(idx))
            .ok_or(QuantizeError::NotFound { color: key })
    }

    /// Look up the palette entry matched to `color` and count one rendered
    /// stud against it.
    ///
    /// Call this once per stud actually drawn -- after transparency
    /// filtering, so skipped studs never inflate the counts.
    pub fn mark_used(&mut self, color: &Color) -> Result<&PaletteEntry, QuantizeError> {
        let key = color.opaque();
        let idx = *self
            .filter
            .get(&key)
            .ok_or(QuantizeError::NotFound { color: key })?;
        *self.uses.entry(idx).or_insert(0) += 1;
        Ok(self.palette.entry(idx))
    }

    /// Usage counts for every palette entry the filter maps to, ordered by
    /// descending count with ties in palette declaration order.
    ///
    /// Entries that were mapped but never used report zero; palette entries
    /// no source color mapped to are not listed.
    pub fn usage_counts(&self) -> Vec<(&PaletteEntry, u64)> {
        let mut counts: Vec<(usize, u64)> = self.uses.iter().map(|(&i, &n)| (i, n)).collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        counts
            .into_iter()
            .map(|(i, n)| (self.palette.entry(i), n))
            .collect()
    }
}
