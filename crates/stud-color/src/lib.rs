//! stud-color: 8-bit-exact color model and fixed-palette quantization.
//!
//! This library is the core of a stud-mosaic converter: it models colors in
//! a way that survives 8-bit output losslessly, measures perceptual distance
//! between them, and quantizes arbitrary colors onto a fixed catalog of
//! brick colors.
//!
//! # Quick Start
//!
//! ```
//! use stud_color::{BrickPalette, Color, Quantizer};
//!
//! let mut quantizer = Quantizer::new(BrickPalette::classic());
//!
//! let pixel = Color::from_rgb8(250, 10, 10);
//! quantizer.build_filter([pixel]);
//!
//! let entry = quantizer.quantize(&pixel).unwrap();
//! assert_eq!(entry.name(), "bright red");
//! assert_eq!(entry.color().to_hex(), "#ff0000");
//! ```
//!
//! # The 8-bit Lattice Invariant
//!
//! [`Color`] stores four normalized `f32` components, but every write snaps
//! each component to the nearest 1/255 step. The consequence: a `Color`
//! never holds a value that 8-bit output cannot represent, so reading and
//! re-writing components is idempotent, equality is exact rather than
//! epsilon-based, and colors can key hash maps. The quantizer's memoized
//! filter depends on this -- two pixels that decode to the same 8-bit RGBA
//! are the *same* key, not merely close.
//!
//! # Distance Metric
//!
//! Palette matching measures distance in HSL space, not raw RGB:
//!
//! ```text
//! d = sqrt(2*(h1-h2)^2 + (s1-s2)^2 + (l1-l2)^2)
//! ```
//!
//! The doubled hue term keeps matches inside the right hue family -- a dark
//! blue source pixel must land on a blue brick, not a dark green one whose
//! RGB magnitude happens to be similar. The hue axis does not wrap at the
//! 0/1 seam: two near-reds straddling the seam measure as far apart.
//! Matching output depends on this behavior; see [`Color::diff`] before
//! changing it.
//!
//! # Pipeline Position
//!
//! ```text
//! 8-bit RGBA pixel
//!     |
//!     v
//! Color            (snap to 1/255 lattice)
//!     |
//!     v
//! Quantizer        (memoized nearest-entry filter, built once over the
//!     |             image's distinct colors)
//!     v
//! PaletteEntry     (catalog id + name + reference Color, usage counted
//!                   per rendered stud)
//! ```
//!
//! Image decoding, resizing, and stud rendering live in the consuming
//! application; this crate is pure computation with no I/O.

pub mod color;
pub mod palette;
pub mod quantize;


pub use color::convert;
pub use color::{Color, ColorError, ParseHexError};
pub use palette::{BrickPalette, PaletteEntry, PaletteError};
pub use quantize::{QuantizeError, Quantizer};
