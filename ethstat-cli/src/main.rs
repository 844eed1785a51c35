//! ethstat - collect ethtool metric families from captured ethtool output.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ethstat_collector::{DirectorySource, EthtoolCollector};
use tracing::{info, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

mod render;
mod settings;

use render::Format;
use settings::{OnError, Settings};

#[derive(Parser, Debug)]
#[command(name = "ethstat", version)]
#[command(about = "Collect ethtool metric families from captured ethtool output")]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory with <interface>.stats and <interface>.info captures
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Only report on this interface (repeatable)
    #[arg(short, long = "interface")]
    interfaces: Vec<String>,

    /// What to do when a capture is missing or unreadable
    #[arg(long, value_enum)]
    on_error: Option<OnError>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let mut settings = Settings::load(args.config.as_deref()).context("Failed to load configuration")?;
    apply_args(&mut settings, &args);

    let source = DirectorySource::new(&settings.capture_dir);
    let capture_dir = source.dir().display().to_string();
    let collector = if settings.interfaces.is_empty() {
        EthtoolCollector::from_source(source)
    } else {
        EthtoolCollector::new(settings.interfaces.clone(), source)
    }
    .on_source_error(settings.on_error.into());

    let families = collector
        .collect()
        .with_context(|| format!("Failed to collect from {}", capture_dir))?;
    info!("Collected {} metric families", families.len());

    let rendered = render::render(&families, args.format)?;
    match args.output {
        Some(path) => fs::write(&path, rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Command-line flags override file and environment settings.
fn apply_args(settings: &mut Settings, args: &Args) {
    if let Some(dir) = &args.dir {
        settings.capture_dir = dir.clone();
    }
    if !args.interfaces.is_empty() {
        settings.interfaces = args.interfaces.clone();
    }
    if let Some(on_error) = args.on_error {
        settings.on_error = on_error;
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from(level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
