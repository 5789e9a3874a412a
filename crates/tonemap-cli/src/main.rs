//! tonemap - convert raw f32 RGBA frame dumps to 8-bit RGB
//!
//! Replaces the renderer's family of fvec4-to-RGB8 conversion scripts with
//! one binary and an explicit tone-mapping policy.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use tonemap_core::{FrameDesc, OutputLayout};
use tonemap_ops::ToneMapVariant;

#[derive(Parser)]
#[command(name = "tonemap")]
#[command(version, about = "Convert a raw f32 RGBA frame dump to an 8-bit RGB image")]
#[command(long_about = "
Converts a headerless dump of little-endian 32-bit float RGBA pixels
(as written by the renderer) into a headerless 8-bit RGB image using a
selectable tone-mapping policy.

The dump carries no dimensions, so width and height are required and the
file size is checked against them.

Examples:
  tonemap 1920 1080                                # max-luma, final.bytes -> final.data
  tonemap 1920 1080 --variant aces-gamma
  tonemap 1920 1080 -i render.bytes -o render.rgb --variant aces-srgb
  tonemap 1920 1080 --layout top-down              # override the historical row order
")]
struct Cli {
    /// Frame width in pixels
    width: u32,

    /// Frame height in pixels
    height: u32,

    /// Input file: width*height*4 little-endian f32 values
    #[arg(short, long, default_value = "final.bytes")]
    input: PathBuf,

    /// Output file: 8-bit RGB, row order per the selected layout
    #[arg(short, long, default_value = "final.data")]
    output: PathBuf,

    /// Tone-mapping policy: max-luma, aces-gamma, aces-srgb
    #[arg(long, default_value_t = ToneMapVariant::MaxLuma, value_parser = ToneMapVariant::from_str)]
    variant: ToneMapVariant,

    /// Output row layout: top-down, bottom-up, transposed
    /// (default: the selected variant's historical convention)
    #[arg(long, value_parser = OutputLayout::from_str)]
    layout: Option<OutputLayout>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, default_value = "0")]
    threads: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    run(cli)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let desc = FrameDesc::new(cli.width, cli.height).context("Invalid frame dimensions")?;
    let layout = cli.layout.unwrap_or_else(|| cli.variant.default_layout());

    info!(
        width = cli.width,
        height = cli.height,
        variant = %cli.variant,
        %layout,
        "tone mapping"
    );

    if cli.verbose {
        println!("Loading: {}", cli.input.display());
    }

    let input = tonemap_io::read_f32_raw(&cli.input, desc)
        .with_context(|| format!("Failed to load: {}", cli.input.display()))?;

    let result = tonemap_ops::map_with_layout(&input, cli.width, cli.height, cli.variant, layout)
        .context("Tone mapping failed")?;

    if cli.verbose {
        println!("Saving: {}", cli.output.display());
    }

    tonemap_io::write_u8_raw(&cli.output, &result)
        .with_context(|| format!("Failed to save: {}", cli.output.display()))?;

    let (rows, cols) = layout.shape(cli.width, cli.height);
    println!(
        "Tone mapped {} -> {} ({}x{}, {}, {} rows of {} RGB pixels)",
        cli.input.display(),
        cli.output.display(),
        cli.width,
        cli.height,
        cli.variant,
        rows,
        cols,
    );

    Ok(())
}
