//! Palette usage report.
//!
//! One line per mapped palette entry, highest usage first, tab-separated:
//! catalog id, hex code, stud count, display name.

use std::io::{self, Write};

use stud_color::PaletteEntry;

/// Write the usage report for one conversion run.
///
/// `usage` is expected in the order [`Quantizer::usage_counts`] produces:
/// descending count, ties in palette order.
///
/// [`Quantizer::usage_counts`]: stud_color::Quantizer::usage_counts
pub fn write_usage_report<W: Write>(
    mut writer: W,
    usage: &[(PaletteEntry, u64)],
) -> io::Result<()> {
    for (entry, uses) in usage {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            entry.id(),
            entry.color().to_hex(),
            uses,
            entry.name()
        )?;
    }
    Ok(())
}
