//! Palette type with named entries and nearest-color matching.

use std::collections::HashSet;

use super::catalog::CLASSIC_CATALOG;
use super::error::PaletteError;
use crate::color::Color;

/// One palette entry: an immutable reference color with display metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    id: u16,
    name: String,
    color: Color,
}

impl PaletteEntry {
    /// Create a palette entry from a catalog id, display name, and color.
    pub fn new(id: u16, name: impl Into<String>, color: Color) -> Self {
        Self {
            id,
            name: name.into(),
            color,
        }
    }

    /// Numeric catalog id, used in usage reports.
    #[inline]
    pub fn id(&self) -> u16 {
        self.id
    }

    /// Human-readable display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The reference color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }
}

/// A fixed, ordered set of named reference colors.
///
/// Entries are immutable once constructed and keep their insertion order.
/// Matching via [`find_nearest`](BrickPalette::find_nearest) is an
/// exhaustive scan, so order only matters for tie-breaking: the first entry
/// achieving the minimum distance wins, deterministically.
///
/// # Example
///
/// ```
/// use stud_color::{BrickPalette, Color};
///
/// let palette = BrickPalette::classic();
/// let (idx, dist) = palette.find_nearest(&Color::from_rgb8(250, 5, 5));
/// assert_eq!(palette.entry(idx).name(), "bright red");
/// assert!(dist > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct BrickPalette {
    entries: Vec<PaletteEntry>,
}

impl BrickPalette {
    /// Create a palette from a list of entries.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Empty`] for an empty list and
    /// [`PaletteError::DuplicateColor`] when two entries share the same
    /// RGBA color (duplicates would make tie-breaking meaningless).
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, entry) in entries.iter().enumerate() {
            if !seen.insert(entry.color().rgba8()) {
                return Err(PaletteError::DuplicateColor { index });
            }
        }

        Ok(Self { entries })
    }

    /// Create a palette from `(id, name, hex)` triples.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidColor`] if a hex string fails to
    /// parse, plus the validation errors of [`BrickPalette::new`].
    ///
    /// # Example
    ///
    /// ```
    /// use stud_color::BrickPalette;
    ///
    /// let palette = BrickPalette::from_hex(&[
    ///     (26, "black", "#000000"),
    ///     (1, "white", "#ffffff"),
    /// ])
    /// .unwrap();
    /// assert_eq!(palette.len(), 2);
    /// ```
    pub fn from_hex(colors: &[(u16, &str, &str)]) -> Result<Self, PaletteError> {
        let entries = colors
            .iter()
            .map(|&(id, name, hex)| Ok(PaletteEntry::new(id, name, Color::from_hex(hex)?)))
            .collect::<Result<Vec<_>, PaletteError>>()?;
        Self::new(entries)
    }

    /// The built-in 44-color brick catalog.
    ///
    /// The table is static reference data validated by tests, so this
    /// constructor is infallible.
    pub fn classic() -> Self {
        let entries = CLASSIC_CATALOG
            .iter()
            .map(|&(id, name, [r, g, b])| PaletteEntry::new(id, name, Color::from_rgb8(r, g, b)))
            .collect();
        Self { entries }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the palette has no entries. Always `false` for palettes built
    /// through [`BrickPalette::new`], which rejects empty input.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in declaration order.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// The entry at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds; indices come from
    /// [`find_nearest`](BrickPalette::find_nearest) and are always valid.
    #[inline]
    pub fn entry(&self, idx: usize) -> &PaletteEntry {
        &self.entries[idx]
    }

    /// Look up an entry by catalog id.
    pub fn by_id(&self, id: u16) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Look up an entry by display name, ASCII case-insensitive.
    pub fn by_name(&self, name: &str) -> Option<&PaletteEntry> {
        self.entries
            .iter()
            .find(|e| e.name().eq_ignore_ascii_case(name))
    }

    /// Find the palette entry nearest to `color` by [`Color::diff`].
    ///
    /// Returns `(index, distance)`. The scan keeps the first entry achieving
    /// the minimum distance, so ties resolve to the earliest entry in
    /// declaration order. Alpha never participates: the distance metric only
    /// sees hue, saturation, and lightness.
    ///
    /// Linear scan; fine for the few dozen entries a brick catalog has.
    pub fn find_nearest(&self, color: &Color) -> (usize, f32) {
        let mut best_idx = 0;
        let mut best_dist = f32::MAX;

        for (i, entry) in self.entries.iter().enumerate() {
            let dist = color.diff(&entry.color());
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }
}
