//! Fixed reference palettes for quantization.

mod catalog;
mod error;
#[allow(clippy::module_inception)]
mod palette;

pub use error::PaletteError;
pub use palette::{BrickPalette, PaletteEntry};
