//! Error types for palette construction.

use thiserror::Error;

use crate::color::ColorError;

/// Error type for palette validation.
///
/// Returned when a palette is built from invalid reference data. The
/// built-in catalog never produces these; they guard custom palettes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PaletteError {
    /// No entries provided
    #[error("palette cannot be empty")]
    Empty,

    /// Two entries share the same RGBA color
    #[error("duplicate palette color at index {index}")]
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
    },

    /// An entry color failed to parse or validate
    #[error("invalid palette color: {0}")]
    InvalidColor(#[from] ColorError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(PaletteError::Empty.to_string(), "palette cannot be empty");
        assert_eq!(
            PaletteError::DuplicateColor { index: 7 }.to_string(),
            "duplicate palette color at index 7"
        );
    }
}
