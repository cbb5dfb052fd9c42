//! Error types for color construction and mutation.

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseHexError {
    /// Hex string has invalid length (must be 6 or 8 digits after stripping '#')
    #[error("hex color must have 6 or 8 digits, got {len}")]
    InvalidLength {
        /// Number of digits found after stripping the optional '#'
        len: usize,
    },

    /// Invalid hexadecimal character encountered
    #[error("invalid hex digit: {0}")]
    InvalidDigit(#[from] ParseIntError),
}

/// Error type for [`Color`](super::Color) construction and mutation.
///
/// All failures are local and synchronous: a component outside its range
/// aborts the operation that supplied it, it is never silently clamped.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// A normalized component or amount falls outside `0.0..=1.0`
    #[error("{component} must be between 0 and 1, got {value}")]
    OutOfRange {
        /// Which component was rejected ("red", "hue", "amount", ...)
        component: &'static str,
        /// The rejected value
        value: f32,
    },

    /// A hex string is not 6 or 8 hex digits after stripping an optional '#'
    #[error("invalid hex color: {0}")]
    InvalidFormat(#[from] ParseHexError),
}
