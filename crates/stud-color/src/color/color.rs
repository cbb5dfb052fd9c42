//! The `Color` value type.
//!
//! A color is four normalized `f32` components `(r, g, b, a)`, each snapped
//! to the nearest 1/255 step on every write. Because nothing unrepresentable
//! in 8-bit output is ever stored, reads and writes are idempotent and
//! round-trips through 8-bit integer form are exact.
//!
//! RGB is the canonical representation. HSL views are derived on demand and
//! never cached, so consecutive single-component HSL writes each start from
//! the color's current RGB state and no drift accumulates beyond the 1/255
//! quantization itself.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::convert;
use super::error::ColorError;

/// An RGBA color, 8-bit exact, with derived HSL views.
///
/// `Color` is a plain `Copy` value: assignment is a deep copy and mutating
/// one binding never affects another. Equality and hashing compare the full
/// post-quantization RGBA tuple, so alpha participates in both.
///
/// # Example
///
/// ```
/// use stud_color::Color;
///
/// let brick_red: Color = "#ff0000".parse().unwrap();
/// assert_eq!(brick_red.rgb8(), [255, 0, 0]);
/// assert_eq!(brick_red.to_hex(), "#ff0000");
///
/// let shaded = brick_red.darken(0.3).unwrap();
/// assert!(shaded.l() < brick_red.l());
/// assert_eq!(shaded.h(), brick_red.h());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Color {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

impl Color {
    /// Opaque black, the default color.
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    fn check(component: &'static str, value: f32) -> Result<f32, ColorError> {
        if (0.0..=1.0).contains(&value) {
            Ok(value)
        } else {
            Err(ColorError::OutOfRange { component, value })
        }
    }

    /// Create an opaque color from normalized RGB components.
    ///
    /// Fails with [`ColorError::OutOfRange`] if any component is outside
    /// `0.0..=1.0`.
    pub fn from_rgb(r: f32, g: f32, b: f32) -> Result<Self, ColorError> {
        Self::from_rgba(r, g, b, 1.0)
    }

    /// Create a color from normalized RGBA components.
    pub fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Result<Self, ColorError> {
        Ok(Self {
            r: convert::snap_to_8bit(Self::check("red", r)?),
            g: convert::snap_to_8bit(Self::check("green", g)?),
            b: convert::snap_to_8bit(Self::check("blue", b)?),
            a: convert::snap_to_8bit(Self::check("alpha", a)?),
        })
    }

    /// Create an opaque color from normalized HSL components.
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Result<Self, ColorError> {
        Self::from_hsla(h, s, l, 1.0)
    }

    /// Create a color from normalized HSL components plus alpha.
    ///
    /// The components are validated, converted to RGB, and snapped; HSL is
    /// not stored.
    pub fn from_hsla(h: f32, s: f32, l: f32, a: f32) -> Result<Self, ColorError> {
        let h = Self::check("hue", h)?;
        let s = Self::check("saturation", s)?;
        let l = Self::check("lightness", l)?;
        let a = Self::check("alpha", a)?;

        let (r, g, b) = convert::hsl_to_rgb(h, s, l);
        Ok(Self {
            r: convert::snap_to_8bit(r),
            g: convert::snap_to_8bit(g),
            b: convert::snap_to_8bit(b),
            a: convert::snap_to_8bit(a),
        })
    }

    /// Create an opaque color from 8-bit RGB components. Infallible.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create a color from 8-bit RGBA components. Infallible.
    ///
    /// `v / 255` already lies on the 1/255 lattice, so no further snapping
    /// is needed.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: convert::byte_to_unit(r),
            g: convert::byte_to_unit(g),
            b: convert::byte_to_unit(b),
            a: convert::byte_to_unit(a),
        }
    }

    /// Create an opaque color from 8-bit HSL components. Infallible.
    #[inline]
    pub fn from_hsl8(h: u8, s: u8, l: u8) -> Self {
        Self::from_hsla8(h, s, l, 255)
    }

    /// Create a color from 8-bit HSL components plus alpha. Infallible.
    pub fn from_hsla8(h: u8, s: u8, l: u8, a: u8) -> Self {
        let (r, g, b) = convert::hsl_to_rgb(
            convert::byte_to_unit(h),
            convert::byte_to_unit(s),
            convert::byte_to_unit(l),
        );
        Self {
            r: convert::snap_to_8bit(r),
            g: convert::snap_to_8bit(g),
            b: convert::snap_to_8bit(b),
            a: convert::byte_to_unit(a),
        }
    }

    /// Parse a color from a hex string (`#rrggbb` or `#rrggbbaa`, the hash
    /// optional). Alpha defaults to fully opaque when absent.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let [r, g, b, a] = convert::hex_to_rgba(hex)?;
        Ok(Self { r, g, b, a })
    }

    // Accessors

    /// Red component, normalized.
    #[inline]
    pub fn r(&self) -> f32 {
        self.r
    }

    /// Green component, normalized.
    #[inline]
    pub fn g(&self) -> f32 {
        self.g
    }

    /// Blue component, normalized.
    #[inline]
    pub fn b(&self) -> f32 {
        self.b
    }

    /// Alpha component, normalized. 1.0 is fully opaque.
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.a
    }

    /// Hue, derived from the current RGB state.
    #[inline]
    pub fn h(&self) -> f32 {
        self.hsl()[0]
    }

    /// Saturation, derived from the current RGB state.
    #[inline]
    pub fn s(&self) -> f32 {
        self.hsl()[1]
    }

    /// Lightness, derived from the current RGB state.
    #[inline]
    pub fn l(&self) -> f32 {
        self.hsl()[2]
    }

    /// Normalized RGB components.
    #[inline]
    pub fn rgb(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Normalized RGBA components.
    #[inline]
    pub fn rgba(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// 8-bit RGB components.
    #[inline]
    pub fn rgb8(&self) -> [u8; 3] {
        [
            convert::unit_to_byte(self.r),
            convert::unit_to_byte(self.g),
            convert::unit_to_byte(self.b),
        ]
    }

    /// 8-bit RGBA components.
    #[inline]
    pub fn rgba8(&self) -> [u8; 4] {
        [
            convert::unit_to_byte(self.r),
            convert::unit_to_byte(self.g),
            convert::unit_to_byte(self.b),
            convert::unit_to_byte(self.a),
        ]
    }

    /// Normalized HSL components, computed on demand.
    #[inline]
    pub fn hsl(&self) -> [f32; 3] {
        let (h, s, l) = convert::rgb_to_hsl(self.r, self.g, self.b);
        [h, s, l]
    }

    /// Normalized HSL components plus alpha.
    #[inline]
    pub fn hsla(&self) -> [f32; 4] {
        let [h, s, l] = self.hsl();
        [h, s, l, self.a]
    }

    /// 8-bit HSL components.
    #[inline]
    pub fn hsl8(&self) -> [u8; 3] {
        let [h, s, l] = self.hsl();
        [
            convert::unit_to_byte(h),
            convert::unit_to_byte(s),
            convert::unit_to_byte(l),
        ]
    }

    /// 8-bit HSL components plus alpha.
    #[inline]
    pub fn hsla8(&self) -> [u8; 4] {
        let [h, s, l] = self.hsl8();
        [h, s, l, convert::unit_to_byte(self.a)]
    }

    /// Lowercase `#rrggbb` hex form (alpha omitted).
    pub fn to_hex(&self) -> String {
        convert::rgb_to_hex(self.r, self.g, self.b)
    }

    /// Lowercase `#rrggbbaa` hex form including alpha.
    pub fn to_hex_alpha(&self) -> String {
        convert::rgba_to_hex(self.r, self.g, self.b, self.a)
    }

    /// True when the color is fully transparent.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }

    /// The same color with alpha forced to fully opaque.
    #[inline]
    pub fn opaque(mut self) -> Self {
        self.a = 1.0;
        self
    }

    /// The same color with alpha forced to fully transparent.
    #[inline]
    pub fn transparent(mut self) -> Self {
        self.a = 0.0;
        self
    }

    // Mutators

    /// Set the red component. Fails with [`ColorError::OutOfRange`] outside
    /// `0.0..=1.0`.
    pub fn set_r(&mut self, value: f32) -> Result<(), ColorError> {
        self.r = convert::snap_to_8bit(Self::check("red", value)?);
        Ok(())
    }

    /// Set the green component.
    pub fn set_g(&mut self, value: f32) -> Result<(), ColorError> {
        self.g = convert::snap_to_8bit(Self::check("green", value)?);
        Ok(())
    }

    /// Set the blue component.
    pub fn set_b(&mut self, value: f32) -> Result<(), ColorError> {
        self.b = convert::snap_to_8bit(Self::check("blue", value)?);
        Ok(())
    }

    /// Set the alpha component.
    pub fn set_alpha(&mut self, value: f32) -> Result<(), ColorError> {
        self.a = convert::snap_to_8bit(Self::check("alpha", value)?);
        Ok(())
    }

    /// Set the hue, recomputing RGB from the current derived HSL state with
    /// the hue replaced.
    pub fn set_h(&mut self, value: f32) -> Result<(), ColorError> {
        let value = Self::check("hue", value)?;
        let [_, s, l] = self.hsl();
        self.write_hsl(value, s, l);
        Ok(())
    }

    /// Set the saturation, recomputing RGB from the current derived HSL
    /// state with the saturation replaced.
    pub fn set_s(&mut self, value: f32) -> Result<(), ColorError> {
        let value = Self::check("saturation", value)?;
        let [h, _, l] = self.hsl();
        self.write_hsl(h, value, l);
        Ok(())
    }

    /// Set the lightness, recomputing RGB from the current derived HSL state
    /// with the lightness replaced.
    pub fn set_l(&mut self, value: f32) -> Result<(), ColorError> {
        let value = Self::check("lightness", value)?;
        let [h, s, _] = self.hsl();
        self.write_hsl(h, s, value);
        Ok(())
    }

    /// Overwrite RGB from HSL components. Alpha is untouched. The inputs are
    /// either validated user values or values derived from the current state,
    /// so only snapping is applied here.
    fn write_hsl(&mut self, h: f32, s: f32, l: f32) {
        let (r, g, b) = convert::hsl_to_rgb(h, s, l);
        self.r = convert::snap_to_8bit(r);
        self.g = convert::snap_to_8bit(g);
        self.b = convert::snap_to_8bit(b);
    }

    /// Scale lightness toward 0 by `amount` in `0.0..=1.0`, leaving hue,
    /// saturation, and alpha unchanged. Returns the shaded color, so calls
    /// chain.
    pub fn darken(mut self, amount: f32) -> Result<Self, ColorError> {
        let amount = Self::check("amount", amount)?;
        let [h, s, l] = self.hsl();
        self.write_hsl(h, s, (l - l * amount).max(0.0));
        Ok(self)
    }

    /// Scale lightness toward 1 by `amount` in `0.0..=1.0`, leaving hue,
    /// saturation, and alpha unchanged.
    pub fn lighten(mut self, amount: f32) -> Result<Self, ColorError> {
        let amount = Self::check("amount", amount)?;
        let [h, s, l] = self.hsl();
        self.write_hsl(h, s, (l + (1.0 - l) * amount).min(1.0));
        Ok(self)
    }

    /// Perceptual distance to another color, computed in HSL space.
    ///
    /// `sqrt(2*(h1-h2)^2 + (s1-s2)^2 + (l1-l2)^2)` -- the hue term is
    /// weighted double so palette matching stays within the right hue family
    /// even when two candidates have similar overall magnitude. Alpha does
    /// not participate.
    ///
    /// Hue does NOT wrap here: 0.99 and 0.01 measure as far apart even
    /// though both are near-red. Matching behavior depends on this, keep it
    /// when touching the metric.
    pub fn diff(&self, other: &Color) -> f32 {
        let [h1, s1, l1] = self.hsl();
        let [h2, s2, l2] = other.hsl();

        (2.0 * (h1 - h2) * (h1 - h2) + (s1 - s2) * (s1 - s2) + (l1 - l2) * (l1 - l2)).sqrt()
    }
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl PartialEq for Color {
    /// Exact post-quantization RGBA equality. Every stored component lies on
    /// the 1/255 lattice, so comparing the 8-bit tuples is equivalent to
    /// comparing the normalized components bit for bit.
    fn eq(&self, other: &Self) -> bool {
        self.rgba8() == other.rgba8()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rgba8().hash(state);
    }
}

impl fmt::Display for Color {
    /// The hex form: `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 1.0 {
            write!(f, "{}", self.to_hex())
        } else {
            write!(f, "{}", self.to_hex_alpha())
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_opaque_black() {
        let color = Color::default();
        assert_eq!(color.rgba8(), [0, 0, 0, 255]);
        assert_eq!(color, Color::BLACK);
    }

    #[test]
    fn test_from_rgb_validates_range() {
        assert!(Color::from_rgb(0.0, 0.5, 1.0).is_ok());
        assert!(matches!(
            Color::from_rgb(1.1, 0.0, 0.0),
            Err(ColorError::OutOfRange {
                component: "red",
                ..
            })
        ));
        assert!(matches!(
            Color::from_rgba(0.0, 0.0, 0.0, -0.01),
            Err(ColorError::OutOfRange {
                component: "alpha",
                ..
            })
        ));
    }

    #[test]
    fn test_from_hsl_validates_range() {
        assert!(Color::from_hsl(0.5, 0.5, 0.5).is_ok());
        assert!(matches!(
            Color::from_hsl(2.0, 0.5, 0.5),
            Err(ColorError::OutOfRange {
                component: "hue",
                ..
            })
        ));
    }

    #[test]
    fn test_construction_snaps_to_lattice() {
        let color = Color::from_rgb(0.5, 0.5, 0.5).unwrap();
        // 0.5 is not on the 1/255 lattice; it snaps to 128/255.
        assert_eq!(color.r(), 128.0 / 255.0);
        assert_eq!(color.rgb8(), [128, 128, 128]);
    }

    #[test]
    fn test_from_hex_alpha_default() {
        let opaque = Color::from_hex("#469bc3").unwrap();
        assert_eq!(opaque.rgba8(), [0x46, 0x9b, 0xc3, 255]);

        let translucent = Color::from_hex("#469bc380").unwrap();
        assert_eq!(translucent.rgba8(), [0x46, 0x9b, 0xc3, 0x80]);
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(matches!(
            Color::from_hex("#12345"),
            Err(ColorError::InvalidFormat(_))
        ));
        assert!("zzzzzz".parse::<Color>().is_err());
    }

    #[test]
    fn test_component_setters_snap_and_validate() {
        let mut color = Color::BLACK;
        color.set_r(0.731).unwrap();
        assert_eq!(color.r(), convert::snap_to_8bit(0.731));

        assert!(color.set_g(1.5).is_err());
        assert_eq!(color.g(), 0.0, "failed write leaves the color untouched");
    }

    #[test]
    fn test_hsl_setter_recomputes_rgb() {
        // Start from red, rotate hue a third of the way around: green.
        let mut color = Color::from_rgb8(255, 0, 0);
        color.set_h(1.0 / 3.0).unwrap();
        assert_eq!(color.rgb8(), [0, 255, 0]);

        // Drop lightness to zero: black, regardless of hue.
        color.set_l(0.0).unwrap();
        assert_eq!(color.rgb8(), [0, 0, 0]);
    }

    #[test]
    fn test_alpha_preserved_by_hsl_setters() {
        let mut color = Color::from_rgba8(200, 100, 50, 128);
        color.set_s(0.2).unwrap();
        assert_eq!(color.rgba8()[3], 128);
    }

    #[test]
    fn test_copy_semantics() {
        let original = Color::from_rgb8(10, 20, 30);
        let mut copy = original;
        copy.set_r(1.0).unwrap();
        assert_eq!(original.rgb8(), [10, 20, 30], "copies never alias");
        assert_ne!(original, copy);
    }

    #[test]
    fn test_equality_includes_alpha() {
        let opaque = Color::from_rgb8(50, 50, 50);
        let translucent = Color::from_rgba8(50, 50, 50, 100);
        assert_ne!(opaque, translucent);
        assert_eq!(translucent.opaque(), opaque);
    }

    #[test]
    fn test_darken_lighten_chain() {
        let color = Color::from_rgb8(100, 150, 200)
            .darken(0.2)
            .unwrap()
            .lighten(0.1)
            .unwrap();
        assert_eq!(color.alpha(), 1.0);
    }

    #[test]
    fn test_darken_amount_out_of_range() {
        assert!(matches!(
            Color::from_rgb8(10, 10, 10).darken(1.01),
            Err(ColorError::OutOfRange {
                component: "amount",
                ..
            })
        ));
        assert!(Color::from_rgb8(10, 10, 10).lighten(-0.5).is_err());
    }

    #[test]
    fn test_display_is_hex() {
        assert_eq!(Color::from_rgb8(255, 102, 0).to_string(), "#ff6600");
        assert_eq!(
            Color::from_rgba8(255, 102, 0, 128).to_string(),
            "#ff660080"
        );
    }
}
