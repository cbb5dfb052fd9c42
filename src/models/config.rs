use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use stud_color::Color;

use crate::error::MosaicError;

/// Options for one mosaic conversion run.
///
/// A fresh value is constructed per invocation: defaults come from
/// [`Default`], a YAML file (`--config`) can override them, and CLI flags
/// override both. Nothing here is shared between runs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MosaicOptions {
    /// Mosaic width in studs. The source image is downscaled to this many
    /// columns, preserving aspect ratio.
    pub width_studs: u32,

    /// Stud radius in output pixels; each grid cell is `2 * stud_radius`
    /// pixels square.
    pub stud_radius: u32,

    /// Alpha threshold: pixels at or above it render fully opaque, pixels
    /// below it are treated as empty.
    pub transparent_margin: f32,

    /// Render studs for below-margin pixels anyway, using `transparent_fill`.
    pub keep_transparent_studs: bool,

    /// Fill color (hex) for kept below-margin studs. Defaults to fully
    /// transparent, which still skips them.
    pub transparent_fill: Option<String>,

    /// Canvas background color (hex). `None` leaves the canvas transparent.
    pub background: Option<String>,

    /// Quantize every stud to the built-in brick palette and track usage.
    pub palette_only: bool,

    /// Manual color replacements (hex -> hex), matched after the
    /// transparency threshold forces studs opaque. Ignored when
    /// `palette_only` is set.
    pub replace: HashMap<String, String>,

    /// Re-compress the output PNG with oxipng.
    pub optimize: bool,
}

impl Default for MosaicOptions {
    fn default() -> Self {
        Self {
            width_studs: 64,
            stud_radius: 48,
            transparent_margin: 0.5,
            keep_transparent_studs: false,
            transparent_fill: None,
            background: None,
            palette_only: false,
            replace: HashMap::new(),
            optimize: false,
        }
    }
}

impl MosaicOptions {
    /// Load options from a YAML file. Missing fields keep their defaults.
    pub fn load_yaml(path: &Path) -> Result<Self, MosaicError> {
        let content = std::fs::read_to_string(path).map_err(|source| MosaicError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content)
            .map_err(|e| MosaicError::Config(format!("{}: {e}", path.display())))
    }

    /// Validate ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), MosaicError> {
        if self.width_studs == 0 {
            return Err(MosaicError::Config(
                "width_studs must be at least 1".to_string(),
            ));
        }
        if self.stud_radius == 0 {
            return Err(MosaicError::Config(
                "stud_radius must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.transparent_margin) {
            return Err(MosaicError::Config(
                "transparent_margin must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The parsed background color, if one is configured.
    pub fn background_color(&self) -> Result<Option<Color>, MosaicError> {
        self.background
            .as_deref()
            .map(|hex| Color::from_hex(hex).map_err(MosaicError::from))
            .transpose()
    }

    /// The parsed fill for kept transparent studs (default: transparent).
    pub fn transparent_fill_color(&self) -> Result<Color, MosaicError> {
        match self.transparent_fill.as_deref() {
            Some(hex) => Ok(Color::from_hex(hex)?),
            None => Ok(Color::TRANSPARENT),
        }
    }

    /// The parsed replacement map.
    pub fn replacements(&self) -> Result<HashMap<Color, Color>, MosaicError> {
        self.replace
            .iter()
            .map(|(from, to)| Ok((Color::from_hex(from)?, Color::from_hex(to)?)))
            .collect()
    }
}
