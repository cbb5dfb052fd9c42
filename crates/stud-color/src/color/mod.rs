//! Color model: the [`Color`] value type and its pure conversions.
//!
//! The central invariant lives here: every stored component is quantized to
//! the nearest 1/255 step on write, so a [`Color`] never holds a value that
//! 8-bit output cannot represent. See [`convert`] for the raw transforms.

#[allow(clippy::module_inception)]
mod color;
pub mod convert;
mod error;

pub use color::Color;
pub use error::{ColorError, ParseHexError};
