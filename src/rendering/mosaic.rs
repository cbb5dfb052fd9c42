//! The mosaic pipeline: decode, downscale, map pixels to colors, quantize,
//! stamp studs.
//!
//! The core color work (matching, usage accounting) lives in `stud-color`;
//! this module is the rendering loop that drives it, one stud per resized
//! source pixel.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use stud_color::{BrickPalette, Color, PaletteEntry, Quantizer};
use tiny_skia::{FilterQuality, Pixmap, PixmapPaint, Transform};

use super::stud::StudCache;
use crate::error::MosaicError;
use crate::models::MosaicOptions;

/// A finished mosaic: the rendered canvas plus palette usage accounting
/// (present only when the run quantized against the brick palette).
pub struct Mosaic {
    /// The rendered canvas, `grid_width * 2r` by `grid_height * 2r` pixels.
    pub pixmap: Pixmap,
    /// Per-palette-entry stud counts, descending, when `palette_only` ran.
    pub usage: Option<Vec<(PaletteEntry, u64)>>,
    /// Mosaic width in studs.
    pub grid_width: u32,
    /// Mosaic height in studs.
    pub grid_height: u32,
    /// Distinct colors observed in the resized source.
    pub distinct_colors: usize,
}

/// The resized source image as a grid of colors.
struct PixelMap {
    /// Row-major, one color per stud cell.
    colors: Vec<Color>,
    width: u32,
    height: u32,
    /// Distinct colors in first-seen order.
    distinct: Vec<Color>,
}

/// Convert a PNG file into a stud mosaic.
pub fn convert_file(input: &Path, options: &MosaicOptions) -> Result<Mosaic, MosaicError> {
    let data = std::fs::read(input).map_err(|source| MosaicError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let source = Pixmap::decode_png(&data).map_err(|e| MosaicError::PngDecode(e.to_string()))?;
    tracing::info!(
        width = source.width(),
        height = source.height(),
        "Image loaded"
    );
    convert_pixmap(&source, options)
}

/// Convert an already-decoded image into a stud mosaic.
pub fn convert_pixmap(source: &Pixmap, options: &MosaicOptions) -> Result<Mosaic, MosaicError> {
    options.validate()?;

    let scaled = downscale(source, options.width_studs)?;
    let map = build_pixel_map(&scaled);
    tracing::info!(
        studs_x = map.width,
        studs_y = map.height,
        distinct = map.distinct.len(),
        "Map generated"
    );

    render_mosaic(&map, options)
}

/// Downscale to `width_studs` columns, preserving aspect ratio.
fn downscale(source: &Pixmap, width_studs: u32) -> Result<Pixmap, MosaicError> {
    if width_studs > source.width() {
        return Err(MosaicError::UpscaleNotSupported {
            requested: width_studs,
            actual: source.width(),
        });
    }
    if width_studs == source.width() {
        return Ok(source.clone());
    }

    let sx = width_studs as f32 / source.width() as f32;
    let height = ((source.height() as f32 * sx).round() as u32).max(1);
    let sy = height as f32 / source.height() as f32;

    let mut target = Pixmap::new(width_studs, height).ok_or(MosaicError::PixmapAllocation)?;
    let paint = PixmapPaint {
        quality: FilterQuality::Bilinear,
        ..PixmapPaint::default()
    };
    target.draw_pixmap(
        0,
        0,
        source.as_ref(),
        &paint,
        Transform::from_scale(sx, sy),
        None,
    );
    Ok(target)
}

/// Read every pixel into a [`Color`], collecting distinct colors in
/// first-seen order.
fn build_pixel_map(pixmap: &Pixmap) -> PixelMap {
    let mut colors = Vec::with_capacity((pixmap.width() * pixmap.height()) as usize);
    let mut distinct = Vec::new();
    let mut seen = HashSet::new();

    for px in pixmap.pixels() {
        let c = px.demultiply();
        let color = Color::from_rgba8(c.red(), c.green(), c.blue(), c.alpha());
        if seen.insert(color) {
            distinct.push(color);
        }
        colors.push(color);
    }

    PixelMap {
        colors,
        width: pixmap.width(),
        height: pixmap.height(),
        distinct,
    }
}

/// Stamp one stud per cell onto the output canvas.
///
/// Per-stud order matters: the transparency margin is applied first, then
/// manual replacements, then palette quantization. Studs dropped by the
/// margin never reach the quantizer's usage counters, even though their
/// colors were assigned a match during filter construction.
fn render_mosaic(map: &PixelMap, options: &MosaicOptions) -> Result<Mosaic, MosaicError> {
    let diameter = options.stud_radius * 2;
    let mut canvas = Pixmap::new(map.width * diameter, map.height * diameter)
        .ok_or(MosaicError::PixmapAllocation)?;

    if let Some(bg) = options.background_color()? {
        let [r, g, b, a] = bg.rgba8();
        canvas.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    let replacements: HashMap<Color, Color> = if options.palette_only {
        HashMap::new()
    } else {
        options.replacements()?
    };
    let transparent_fill = options.transparent_fill_color()?;

    let mut quantizer = if options.palette_only {
        let mut q = Quantizer::new(BrickPalette::classic());
        q.build_filter(map.distinct.iter().copied());
        tracing::info!(
            distinct = map.distinct.len(),
            palette = q.palette().len(),
            "Palette filter built"
        );
        Some(q)
    } else {
        None
    };

    let mut cache = StudCache::new(options.stud_radius);
    let paint = PixmapPaint::default();

    for y in 0..map.height {
        for x in 0..map.width {
            let color = map.colors[(y * map.width + x) as usize];

            let mut fill = if color.alpha() >= options.transparent_margin {
                color.opaque()
            } else {
                color.transparent()
            };

            if fill.is_transparent() {
                if !options.keep_transparent_studs {
                    continue;
                }
                // Kept empty studs use the configured fill verbatim and stay
                // outside palette accounting.
                fill = transparent_fill;
                if fill.is_transparent() {
                    continue;
                }
            } else {
                if let Some(replacement) = replacements.get(&fill) {
                    fill = *replacement;
                }
                if let Some(q) = quantizer.as_mut() {
                    fill = q.mark_used(&fill)?.color();
                }
            }

            let sprite = cache.sprite(&fill)?;
            canvas.draw_pixmap(
                (x * diameter) as i32,
                (y * diameter) as i32,
                sprite.as_ref(),
                &paint,
                Transform::identity(),
                None,
            );
        }
    }
    tracing::info!(sprites = cache.len(), "Image generated");

    let usage = quantizer.map(|q| {
        q.usage_counts()
            .into_iter()
            .map(|(entry, uses)| (entry.clone(), uses))
            .collect()
    });

    Ok(Mosaic {
        pixmap: canvas,
        usage,
        grid_width: map.width,
        grid_height: map.height,
        distinct_colors: map.distinct.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_skia::ColorU8;

    fn pixmap_from_rgba(width: u32, height: u32, pixels: &[[u8; 4]]) -> Pixmap {
        let mut pixmap = Pixmap::new(width, height).unwrap();
        for (slot, &[r, g, b, a]) in pixmap.pixels_mut().iter_mut().zip(pixels) {
            *slot = ColorU8::from_rgba(r, g, b, a).premultiply();
        }
        pixmap
    }

    fn small_options() -> MosaicOptions {
        MosaicOptions {
            width_studs: 2,
            stud_radius: 4,
            ..Default::default()
        }
    }

    #[test]
    fn test_upscale_rejected() {
        let source = pixmap_from_rgba(2, 2, &[[255, 0, 0, 255]; 4]);
        let options = MosaicOptions {
            width_studs: 4,
            ..small_options()
        };
        assert!(matches!(
            convert_pixmap(&source, &options),
            Err(MosaicError::UpscaleNotSupported {
                requested: 4,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_output_dimensions() {
        let source = pixmap_from_rgba(2, 2, &[[10, 20, 30, 255]; 4]);
        let mosaic = convert_pixmap(&source, &small_options()).unwrap();
        assert_eq!(mosaic.grid_width, 2);
        assert_eq!(mosaic.grid_height, 2);
        assert_eq!(mosaic.pixmap.width(), 16);
        assert_eq!(mosaic.pixmap.height(), 16);
        assert_eq!(mosaic.distinct_colors, 1);
        assert!(mosaic.usage.is_none(), "no accounting without palette_only");
    }

    #[test]
    fn test_distinct_colors_first_seen_order() {
        let source = pixmap_from_rgba(
            2,
            1,
            &[[255, 0, 0, 255], [0, 0, 255, 255]],
        );
        let map = build_pixel_map(&source);
        assert_eq!(map.distinct.len(), 2);
        assert_eq!(map.distinct[0].rgb8(), [255, 0, 0]);
        assert_eq!(map.distinct[1].rgb8(), [0, 0, 255]);
    }

    #[test]
    fn test_palette_usage_counts_studs() {
        // Three red-ish studs, one black stud, one fully transparent pixel.
        let source = pixmap_from_rgba(
            5,
            1,
            &[
                [250, 5, 5, 255],
                [250, 5, 5, 255],
                [250, 5, 5, 255],
                [5, 5, 5, 255],
                [0, 0, 0, 0],
            ],
        );
        let options = MosaicOptions {
            width_studs: 5,
            stud_radius: 2,
            palette_only: true,
            ..Default::default()
        };
        let mosaic = convert_pixmap(&source, &options).unwrap();

        let usage = mosaic.usage.unwrap();
        assert_eq!(usage[0].0.name(), "bright red");
        assert_eq!(usage[0].1, 3);

        let black = usage.iter().find(|(e, _)| e.name() == "black").unwrap();
        assert_eq!(
            black.1, 1,
            "the transparent pixel shares black's filter slot but never renders"
        );
    }

    #[test]
    fn test_translucent_pixel_at_margin_is_opaque() {
        // 128/255 is just above the default 0.5 margin.
        let source = pixmap_from_rgba(1, 1, &[[250, 5, 5, 128]]);
        let options = MosaicOptions {
            width_studs: 1,
            stud_radius: 2,
            palette_only: true,
            ..Default::default()
        };
        let mosaic = convert_pixmap(&source, &options).unwrap();
        let usage = mosaic.usage.unwrap();
        assert_eq!(usage[0].0.name(), "bright red");
        assert_eq!(usage[0].1, 1);
    }

    #[test]
    fn test_below_margin_pixel_leaves_cell_empty() {
        let source = pixmap_from_rgba(1, 1, &[[250, 5, 5, 60]]);
        let options = MosaicOptions {
            width_studs: 1,
            stud_radius: 2,
            ..Default::default()
        };
        let mosaic = convert_pixmap(&source, &options).unwrap();

        // Transparent canvas, nothing stamped: every pixel stays clear.
        assert!(mosaic
            .pixmap
            .pixels()
            .iter()
            .all(|px| px.alpha() == 0));
    }

    #[test]
    fn test_background_fills_empty_cells() {
        let source = pixmap_from_rgba(1, 1, &[[0, 0, 0, 0]]);
        let options = MosaicOptions {
            width_studs: 1,
            stud_radius: 2,
            background: Some("#478cc6".to_string()),
            ..Default::default()
        };
        let mosaic = convert_pixmap(&source, &options).unwrap();

        let px = mosaic.pixmap.pixels()[0].demultiply();
        assert_eq!([px.red(), px.green(), px.blue()], [0x47, 0x8c, 0xc6]);
    }

    #[test]
    fn test_replacement_map_applies_exact_colors() {
        let source = pixmap_from_rgba(2, 1, &[[255, 0, 0, 255], [0, 255, 0, 255]]);
        let mut options = MosaicOptions {
            width_studs: 2,
            stud_radius: 4,
            ..Default::default()
        };
        options
            .replace
            .insert("#ff0000".to_string(), "#0000ff".to_string());

        let mosaic = convert_pixmap(&source, &options).unwrap();

        // Center of the first stud carries the replacement color, darkened
        // for the top disc.
        let expected = Color::from_rgb8(0, 0, 255).darken(0.3).unwrap().rgb8();
        let center = mosaic.pixmap.pixels()
            [(4 * mosaic.pixmap.width() + 4) as usize]
            .demultiply();
        assert_eq!([center.red(), center.green(), center.blue()], expected);
    }

    #[test]
    fn test_downscale_halves_width() {
        let pixels: Vec<[u8; 4]> = (0..16).map(|_| [100, 150, 200, 255]).collect();
        let source = pixmap_from_rgba(4, 4, &pixels);
        let scaled = downscale(&source, 2).unwrap();
        assert_eq!(scaled.width(), 2);
        assert_eq!(scaled.height(), 2);
    }
}
