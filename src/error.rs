use std::path::PathBuf;

use stud_color::{ColorError, QuantizeError};
use thiserror::Error;

/// Error type for the mosaic conversion pipeline.
#[derive(Debug, Error)]
pub enum MosaicError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("Degenerate stud geometry (radius too small)")]
    StudGeometry,

    #[error("Target width {requested} studs exceeds source width {actual}px; upscaling is not supported")]
    UpscaleNotSupported { requested: u32, actual: u32 },

    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    #[error("Quantize error: {0}")]
    Quantize(#[from] QuantizeError),

    #[error("Config error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upscale_message() {
        let error = MosaicError::UpscaleNotSupported {
            requested: 128,
            actual: 64,
        };
        assert_eq!(
            error.to_string(),
            "Target width 128 studs exceeds source width 64px; upscaling is not supported"
        );
    }

    #[test]
    fn test_color_error_converts() {
        let color_error = stud_color::Color::from_rgb(2.0, 0.0, 0.0).unwrap_err();
        let error: MosaicError = color_error.into();
        assert!(matches!(error, MosaicError::Color(_)));
    }

    #[test]
    fn test_config_message() {
        let error = MosaicError::Config("transparent_margin must be between 0 and 1".to_string());
        assert_eq!(
            error.to_string(),
            "Config error: transparent_margin must be between 0 and 1"
        );
    }
}
