use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brixel::models::MosaicOptions;
use brixel::rendering;
use brixel::report;
use stud_color::BrickPalette;

#[derive(Parser)]
#[command(name = "brixel")]
#[command(about = "Brixel - turn raster images into toy-brick stud mosaics")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a PNG image into a stud mosaic
    Convert {
        /// Input PNG file
        input: PathBuf,

        /// Output PNG file (defaults to <input stem>_studs.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Mosaic width in studs
        #[arg(short, long)]
        width: Option<u32>,

        /// Stud radius in output pixels
        #[arg(long)]
        stud_radius: Option<u32>,

        /// Quantize every stud to the built-in brick palette
        #[arg(short, long)]
        palette: bool,

        /// Alpha threshold below which a pixel is treated as empty
        #[arg(long)]
        transparent_margin: Option<f32>,

        /// Render studs for below-margin pixels using the configured fill
        #[arg(long)]
        keep_transparent: bool,

        /// Canvas background as hex RGB(A) (default: transparent)
        #[arg(long)]
        background: Option<String>,

        /// Write a palette usage report to this file (requires --palette)
        #[arg(long)]
        report: Option<PathBuf>,

        /// YAML file with defaults for these flags
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Re-compress the output PNG with oxipng
        #[arg(long)]
        optimize: bool,
    },
    /// Print the built-in brick palette
    Palette,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert {
            input,
            output,
            width,
            stud_radius,
            palette,
            transparent_margin,
            keep_transparent,
            background,
            report,
            config,
            optimize,
        }) => run_convert(
            &input,
            output,
            width,
            stud_radius,
            palette,
            transparent_margin,
            keep_transparent,
            background,
            report,
            config,
            optimize,
        ),
        Some(Commands::Palette) => {
            run_palette_command();
            Ok(())
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Convert an image to a stud mosaic PNG (plus optional usage report)
#[allow(clippy::too_many_arguments)]
fn run_convert(
    input: &Path,
    output: Option<PathBuf>,
    width: Option<u32>,
    stud_radius: Option<u32>,
    palette: bool,
    transparent_margin: Option<f32>,
    keep_transparent: bool,
    background: Option<String>,
    report_path: Option<PathBuf>,
    config: Option<PathBuf>,
    optimize: bool,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brixel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    // Config file defaults, then CLI flags on top
    let mut options = match config {
        Some(path) => MosaicOptions::load_yaml(&path)?,
        None => MosaicOptions::default(),
    };
    if let Some(width) = width {
        options.width_studs = width;
    }
    if let Some(radius) = stud_radius {
        options.stud_radius = radius;
    }
    if let Some(margin) = transparent_margin {
        options.transparent_margin = margin;
    }
    if background.is_some() {
        options.background = background;
    }
    options.palette_only |= palette;
    options.keep_transparent_studs |= keep_transparent;
    options.optimize |= optimize;

    if report_path.is_some() && !options.palette_only {
        tracing::warn!("--report has no effect without --palette; skipping report");
    }

    let mosaic = rendering::convert_file(input, &options)?;

    let png_bytes = rendering::encode_png(&mosaic.pixmap)?;
    let png_bytes = if options.optimize {
        rendering::optimize_png(png_bytes)
    } else {
        png_bytes
    };

    let output = output.unwrap_or_else(|| default_output_path(input));
    std::fs::write(&output, &png_bytes).map_err(|source| brixel::MosaicError::Write {
        path: output.clone(),
        source,
    })?;
    println!(
        "Rendered {} ({}x{} studs, {} bytes)",
        output.display(),
        mosaic.grid_width,
        mosaic.grid_height,
        png_bytes.len()
    );

    if let (Some(path), Some(usage)) = (report_path, mosaic.usage.as_deref()) {
        let file = std::fs::File::create(&path)?;
        report::write_usage_report(std::io::BufWriter::new(file), usage)?;
        println!("Usage report written to {}", path.display());
    }

    Ok(())
}

/// `<input stem>_studs.png` next to the input file
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mosaic".to_string());
    input.with_file_name(format!("{stem}_studs.png"))
}

/// Print the built-in brick catalog
fn run_palette_command() {
    let palette = BrickPalette::classic();
    println!("Built-in brick palette ({} colors):\n", palette.len());
    for entry in palette.entries() {
        println!(
            "  {:>4}  {}  {}",
            entry.id(),
            entry.color().to_hex(),
            entry.name()
        );
    }
}

/// Display status and usage information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Brixel v{VERSION}");
    println!("Turn raster images into toy-brick stud mosaics\n");

    println!("Commands:");
    println!("  brixel convert <input.png>   Render a stud mosaic PNG");
    println!("  brixel palette               Print the built-in brick palette");
    println!("\nRun 'brixel --help' for more details.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("art/benman.png")),
            PathBuf::from("art/benman_studs.png")
        );
        assert_eq!(
            default_output_path(Path::new("plain")),
            PathBuf::from("plain_studs.png")
        );
    }
}
