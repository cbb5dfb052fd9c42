//! Stud sprite rendering.
//!
//! One stud is a `2r x 2r` RGBA sprite: a base disc in the fill color, a
//! black shadow disc pushed down-right, and a raised top disc in a darker
//! shade of the fill. Sprites are cached per fill color -- a mosaic uses at
//! most one sprite per distinct stud color, however many studs it stamps.

use std::collections::HashMap;

use stud_color::Color;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::error::MosaicError;

/// How far the shadow darkens the fill for the raised top disc.
const TOP_DISC_SHADE: f32 = 0.3;

fn fill_circle(
    pixmap: &mut Pixmap,
    cx: f32,
    cy: f32,
    radius: f32,
    color: &Color,
) -> Result<(), MosaicError> {
    let path = PathBuilder::from_circle(cx, cy, radius).ok_or(MosaicError::StudGeometry)?;

    let [r, g, b, a] = color.rgba8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;

    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    Ok(())
}

/// Render a single stud sprite for the given fill color.
pub fn render_stud(fill: &Color, radius: u32) -> Result<Pixmap, MosaicError> {
    let diameter = radius * 2;
    let mut pixmap =
        Pixmap::new(diameter, diameter).ok_or(MosaicError::PixmapAllocation)?;

    let d = diameter as f32;
    let center = radius as f32;

    // Base disc fills the whole cell.
    fill_circle(&mut pixmap, center, center, center, fill)?;

    // Shadow disc, offset toward the lower right.
    let inset = d / 6.0;
    let offset = d / 15.0;
    fill_circle(
        &mut pixmap,
        center + offset,
        center + offset,
        d / 2.0 - inset,
        &Color::BLACK,
    )?;

    // Raised top disc in a darker shade of the fill.
    let inset = d / 5.0;
    let top = fill.darken(TOP_DISC_SHADE)?;
    fill_circle(&mut pixmap, center, center, d / 2.0 - inset, &top)?;

    Ok(pixmap)
}

/// Per-color sprite cache for one rendering run.
pub struct StudCache {
    radius: u32,
    sprites: HashMap<Color, Pixmap>,
}

impl StudCache {
    /// Create an empty cache for studs of the given radius.
    pub fn new(radius: u32) -> Self {
        Self {
            radius,
            sprites: HashMap::new(),
        }
    }

    /// Get the sprite for a fill color, rendering it on first use.
    pub fn sprite(&mut self, fill: &Color) -> Result<&Pixmap, MosaicError> {
        if !self.sprites.contains_key(fill) {
            let sprite = render_stud(fill, self.radius)?;
            self.sprites.insert(*fill, sprite);
        }
        Ok(&self.sprites[fill])
    }

    /// Number of distinct sprites rendered so far.
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// True when no sprite has been rendered yet.
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
