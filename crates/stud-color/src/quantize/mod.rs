//! Palette quantization: memoized nearest-color filtering and per-entry
//! usage accounting.

mod error;
mod quantizer;

pub use error::QuantizeError;
pub use quantizer::Quantizer;
