//! Rendering: stud sprites, the mosaic pipeline, and PNG output.

pub mod mosaic;
pub mod stud;

pub use mosaic::{convert_file, convert_pixmap, Mosaic};
pub use stud::{render_stud, StudCache};

use std::io::Cursor;

use tiny_skia::Pixmap;

use crate::error::MosaicError;

/// Encode a pixmap as an RGBA8 PNG.
///
/// Fast settings; [`optimize_png`] re-compresses optimally when asked.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, MosaicError> {
    // tiny-skia stores premultiplied alpha; PNG wants straight alpha.
    let mut data = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, pixmap.width(), pixmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        let mut writer = encoder
            .write_header()
            .map_err(|e| MosaicError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&data)
            .map_err(|e| MosaicError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Re-compress a PNG with oxipng (zopfli + adaptive filter selection).
///
/// Stud canvases get large; this routinely shrinks them severalfold. Falls
/// back to the input bytes if optimization fails.
pub fn optimize_png(png_bytes: Vec<u8>) -> Vec<u8> {
    oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            ..Default::default()
        },
    )
    .unwrap_or(png_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png_round_trip() {
        let mut pixmap = Pixmap::new(2, 2).unwrap();
        pixmap.fill(tiny_skia::Color::from_rgba8(255, 102, 0, 255));

        let bytes = encode_png(&pixmap).unwrap();
        let decoded = Pixmap::decode_png(&bytes).unwrap();

        assert_eq!(decoded.width(), 2);
        assert_eq!(decoded.height(), 2);
        let px = decoded.pixels()[0].demultiply();
        assert_eq!(
            [px.red(), px.green(), px.blue(), px.alpha()],
            [255, 102, 0, 255]
        );
    }

    #[test]
    fn test_encode_png_preserves_transparency() {
        let pixmap = Pixmap::new(1, 1).unwrap();
        let bytes = encode_png(&pixmap).unwrap();
        let decoded = Pixmap::decode_png(&bytes).unwrap();
        assert_eq!(decoded.pixels()[0].alpha(), 0);
    }
}
