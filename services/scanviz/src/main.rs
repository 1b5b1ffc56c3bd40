//! Scan visualizer.
//!
//! Reads one sample file per grid position, assembles the serpentine scan
//! into a raster and writes it as a false-color PPM image.

mod config;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use config::{OutputTarget, ScanConfig};
use renderer::{render_grid, write_ppm};
use scan_assembler::{assemble_scan, PatternSource};
use scan_common::DEFAULT_ROW_SHIFT;

/// Exit code for malformed invocations.
const EXIT_USAGE: u8 = 1;
/// Exit code for configuration and environment failures.
const EXIT_CONFIG: u8 = 2;

const AFTER_HELP: &str = "\
Color maps: 0=grey 1=plasma 2=magma 3=inferno 4=viridis

Example:
  scanviz -c3 -o foo.pnm SAMPLE_3162099_%d_%d.dmp 207 80";

#[derive(Parser, Debug)]
#[command(name = "scanviz")]
#[command(version, about = "Render scanned sample files as a false-color PPM image")]
#[command(after_help = AFTER_HELP)]
struct Args {
    /// Sample file pattern with two integer placeholders (x, then y)
    pattern: String,

    /// Number of scan columns
    #[arg(value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    width: usize,

    /// Number of samples per column
    #[arg(value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    height: usize,

    /// Color map, by index or name
    #[arg(short, long, env = "SCANVIZ_COLOR", default_value = "1", allow_negative_numbers = true)]
    color: String,

    /// Row shift between down and up sweeps
    #[arg(short, long, env = "SCANVIZ_SHIFT", default_value_t = DEFAULT_ROW_SHIFT as i64, allow_negative_numbers = true)]
    shift: i64,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON palette definition, overrides --color
    #[arg(long)]
    palette_file: Option<PathBuf>,

    /// Log level
    #[arg(long, env = "SCANVIZ_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_USAGE),
            };
        }
    };

    if let Err(e) = init_tracing(&args.log_level, args.log_json) {
        eprintln!("Failed to initialize logging: {:#}", e);
        return ExitCode::from(EXIT_CONFIG);
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(EXIT_CONFIG)
        }
    }
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install a stderr subscriber; stdout may carry the image.
fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let builder = FmtSubscriber::builder()
        .with_max_level(parse_level(log_level))
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let target = OutputTarget::from_arg(args.output.as_deref());
    let mut sink = target.open()?;

    let config = ScanConfig::new(
        &args.pattern,
        args.width,
        args.height,
        args.shift,
        &args.color,
        args.palette_file.as_deref(),
    )?;

    info!(
        pattern = config.pattern.as_str(),
        width = config.geometry.width,
        height = config.geometry.height,
        shift = config.geometry.shift,
        palette = config.palette.name(),
        output = %target,
        "Starting scan"
    );

    let mut source = PatternSource::new(config.pattern.clone());
    let outcome = assemble_scan(config.geometry, &mut source);

    let raster = &outcome.raster;
    let pixels = render_grid(
        raster.values(),
        raster.width(),
        raster.height(),
        &outcome.extremes,
        &config.palette,
    );

    write_ppm(&mut sink, &pixels, raster.width(), raster.height())
        .with_context(|| format!("Failed to write image to {}", target))?;

    info!(
        width = raster.width(),
        height = raster.height(),
        positions_skipped = outcome.stats.positions_skipped,
        "Image written"
    );

    Ok(())
}
