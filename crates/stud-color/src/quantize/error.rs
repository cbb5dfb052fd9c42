//! Error types for quantization.

use thiserror::Error;

use crate::color::Color;

/// Error type for [`Quantizer`](super::Quantizer) lookups.
///
/// `NotFound` signals a caller-ordering bug, not a recoverable runtime
/// condition: the filter was not built, or was built over an incomplete
/// source color set.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuantizeError {
    /// Quantization requested for a color absent from the precomputed filter
    #[error("no palette match prepared for {color}; build the filter over the full source color set first")]
    NotFound {
        /// The unmapped color (alpha already forced opaque)
        color: Color,
    },
}
