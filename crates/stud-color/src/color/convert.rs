//! Pure conversions between the representations used by [`Color`].
//!
//! Everything here is stateless: normalized components are `f32` in
//! `0.0..=1.0`, 8-bit components are `u8`. Input ranges are a caller
//! contract; [`Color`](super::Color) validates before calling in.
//!
//! [`snap_to_8bit`] implements the crate-wide invariant that every stored
//! component is exactly representable in 8-bit output: `round(x * 255) / 255`.
//! [`unit_to_byte`] uses the same rounding rule, so snapping and byte
//! conversion always agree and round-trips through 8-bit form are exact.

use super::error::ParseHexError;

/// Scale an 8-bit component to the normalized `0.0..=1.0` range.
#[inline]
pub fn byte_to_unit(c: u8) -> f32 {
    c as f32 / 255.0
}

/// Scale a normalized component to 8-bit, rounding to the nearest integer.
#[inline]
pub fn unit_to_byte(c: f32) -> u8 {
    (c * 255.0).round() as u8
}

/// Round a normalized component to the nearest 1/255 step.
///
/// This is the quantization applied on every [`Color`](super::Color) write.
#[inline]
pub fn snap_to_8bit(c: f32) -> f32 {
    (c * 255.0).round() / 255.0
}

/// Convert normalized RGB to normalized HSL.
///
/// The standard cylindrical transform. An achromatic input (`r == g == b`)
/// yields `h = 0, s = 0`. Hue is wrapped into `0.0..1.0` by adding 1 when
/// the sextant arithmetic goes negative, so 0 and 1 both mean red.
pub fn rgb_to_hsl(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);
    let delta = cmax - cmin;

    let l = (cmax + cmin) / 2.0;

    if delta == 0.0 {
        return (0.0, 0.0, l);
    }

    let s = if l < 0.5 {
        delta / (cmax + cmin)
    } else {
        delta / (2.0 - cmax - cmin)
    };

    // Hue from whichever channel is maximal
    let mut h = if cmax == r {
        (g - b) / delta
    } else if cmax == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    h /= 6.0;
    if h < 0.0 {
        h += 1.0;
    }

    (h, s, l)
}

/// Convert normalized HSL to normalized RGB.
///
/// Inverse of [`rgb_to_hsl`]: chroma `c = (1 - |2l - 1|) * s`, intermediate
/// `x = c * (1 - |((h * 6) mod 2) - 1|)`, offset `m = l - c / 2`, with the
/// `(c, x, 0)` permutation selected by the 60-degree hue sextant.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (rp, gp, bp) = if h < 1.0 / 6.0 {
        (c, x, 0.0)
    } else if h < 2.0 / 6.0 {
        (x, c, 0.0)
    } else if h < 3.0 / 6.0 {
        (0.0, c, x)
    } else if h < 4.0 / 6.0 {
        (0.0, x, c)
    } else if h < 5.0 / 6.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (rp + m, gp + m, bp + m)
}

/// Format normalized RGB as a lowercase `#rrggbb` hex string.
pub fn rgb_to_hex(r: f32, g: f32, b: f32) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        unit_to_byte(r),
        unit_to_byte(g),
        unit_to_byte(b)
    )
}

/// Format normalized RGBA as a lowercase `#rrggbbaa` hex string.
pub fn rgba_to_hex(r: f32, g: f32, b: f32, a: f32) -> String {
    format!(
        "#{:02x}{:02x}{:02x}{:02x}",
        unit_to_byte(r),
        unit_to_byte(g),
        unit_to_byte(b),
        unit_to_byte(a)
    )
}

/// Parse a hex color string into normalized `[r, g, b, a]`.
///
/// Accepts exactly 6 (`rrggbb`) or 8 (`rrggbbaa`) hex digits after trimming
/// whitespace and an optional leading `#`. Parsing is case-insensitive.
/// When no alpha digits are present the alpha channel defaults to fully
/// opaque.
pub fn hex_to_rgba(hex: &str) -> Result<[f32; 4], ParseHexError> {
    let s = hex.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    if s.len() != 6 && s.len() != 8 {
        return Err(ParseHexError::InvalidLength { len: s.len() });
    }

    let r = u8::from_str_radix(&s[0..2], 16)?;
    let g = u8::from_str_radix(&s[2..4], 16)?;
    let b = u8::from_str_radix(&s[4..6], 16)?;
    let a = if s.len() == 8 {
        u8::from_str_radix(&s[6..8], 16)?
    } else {
        255
    };

    Ok([
        byte_to_unit(r),
        byte_to_unit(g),
        byte_to_unit(b),
        byte_to_unit(a),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_unit_round_trip() {
        for v in 0..=255u8 {
            assert_eq!(unit_to_byte(byte_to_unit(v)), v, "round trip for {v}");
        }
    }

    #[test]
    fn test_snap_matches_byte_conversion() {
        // Snapping and byte conversion use the same rounding rule, so a
        // snapped value converts to the byte it was snapped onto.
        for v in [0.0f32, 0.1, 0.25, 0.4999, 0.5, 0.7331, 0.99, 1.0] {
            let snapped = snap_to_8bit(v);
            assert_eq!(unit_to_byte(snapped), unit_to_byte(v));
            assert_eq!(snap_to_8bit(snapped), snapped, "snapping is idempotent");
        }
    }

    #[test]
    fn test_rgb_to_hsl_primaries() {
        let (h, s, l) = rgb_to_hsl(1.0, 0.0, 0.0);
        assert_eq!((h, s, l), (0.0, 1.0, 0.5), "red");

        let (h, s, l) = rgb_to_hsl(0.0, 1.0, 0.0);
        assert!((h - 1.0 / 3.0).abs() < 1e-6, "green hue, got {h}");
        assert_eq!((s, l), (1.0, 0.5));

        let (h, s, l) = rgb_to_hsl(0.0, 0.0, 1.0);
        assert!((h - 2.0 / 3.0).abs() < 1e-6, "blue hue, got {h}");
        assert_eq!((s, l), (1.0, 0.5));
    }

    #[test]
    fn test_rgb_to_hsl_achromatic() {
        for v in [0.0f32, 0.25, 0.5, 0.75, 1.0] {
            let (h, s, l) = rgb_to_hsl(v, v, v);
            assert_eq!(h, 0.0, "gray hue is zero");
            assert_eq!(s, 0.0, "gray saturation is zero");
            assert_eq!(l, v, "gray lightness equals the value");
        }
    }

    #[test]
    fn test_rgb_to_hsl_negative_hue_wraps() {
        // Red maximal with blue > green puts the raw hue sextant below zero;
        // the transform wraps it up into the magenta range instead.
        let (h, _, _) = rgb_to_hsl(1.0, 0.0, 0.5);
        assert!((h - 11.0 / 12.0).abs() < 1e-6, "wrapped hue, got {h}");
    }

    #[test]
    fn test_hsl_to_rgb_sextants() {
        let cases = [
            (0.0, (1.0, 0.0, 0.0)),        // red
            (1.0 / 6.0, (1.0, 1.0, 0.0)),  // yellow
            (2.0 / 6.0, (0.0, 1.0, 0.0)),  // green
            (3.0 / 6.0, (0.0, 1.0, 1.0)),  // cyan
            (4.0 / 6.0, (0.0, 0.0, 1.0)),  // blue
            (5.0 / 6.0, (1.0, 0.0, 1.0)),  // magenta
        ];
        for (h, (er, eg, eb)) in cases {
            let (r, g, b) = hsl_to_rgb(h, 1.0, 0.5);
            assert!(
                (r - er).abs() < 1e-5 && (g - eg).abs() < 1e-5 && (b - eb).abs() < 1e-5,
                "hue {h} expected ({er},{eg},{eb}), got ({r},{g},{b})"
            );
        }
    }

    #[test]
    fn test_hsl_to_rgb_hue_one_is_red() {
        let (r, g, b) = hsl_to_rgb(1.0, 1.0, 0.5);
        assert!((r - 1.0).abs() < 1e-5 && g.abs() < 1e-5 && b.abs() < 1e-5);
    }

    #[test]
    fn test_hsl_to_rgb_zero_saturation_is_gray() {
        for l in [0.0f32, 0.3, 0.5, 1.0] {
            let (r, g, b) = hsl_to_rgb(0.42, 0.0, l);
            assert_eq!((r, g, b), (l, l, l));
        }
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(rgb_to_hex(1.0, 0.0, 0.0), "#ff0000");
        assert_eq!(rgb_to_hex(0.0, 0.0, 0.0), "#000000");
        assert_eq!(rgba_to_hex(1.0, 1.0, 1.0, 0.0), "#ffffff00");
        assert_eq!(
            rgba_to_hex(
                byte_to_unit(0xd9),
                byte_to_unit(0xbb),
                byte_to_unit(0x7b),
                1.0
            ),
            "#d9bb7bff"
        );
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(
            hex_to_rgba("#ff0000").unwrap(),
            [1.0, 0.0, 0.0, 1.0],
            "6 digits, alpha defaults opaque"
        );
        assert_eq!(hex_to_rgba("00ff00").unwrap(), [0.0, 1.0, 0.0, 1.0], "no hash");
        assert_eq!(
            hex_to_rgba("#0000FF80").unwrap(),
            [0.0, 0.0, 1.0, byte_to_unit(0x80)],
            "8 digits carry alpha, case-insensitive"
        );
        assert_eq!(hex_to_rgba("  #ffffff  ").unwrap(), [1.0; 4], "whitespace trimmed");
    }

    #[test]
    fn test_hex_parsing_errors() {
        assert!(matches!(
            hex_to_rgba("#fff"),
            Err(ParseHexError::InvalidLength { len: 3 })
        ));
        assert!(matches!(
            hex_to_rgba(""),
            Err(ParseHexError::InvalidLength { len: 0 })
        ));
        assert!(matches!(
            hex_to_rgba("#ff00zz"),
            Err(ParseHexError::InvalidDigit(_))
        ));
    }
}
