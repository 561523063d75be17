//! Prints a calendar to stdout.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use loom_calendar::{layout, Layout, LayoutConfig, LayoutConfigBuilder};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// First year to print
    #[arg(long, default_value_t = 2022)]
    year: i32,
    /// Number of consecutive years to print
    #[arg(long, default_value_t = 1)]
    years: u16,
    /// Months printed side by side, overriding the config file
    #[arg(long)]
    per_row: Option<usize>,
    /// TOML file with layout settings
    #[arg(long, value_name = "TOML")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    tracing::info!(
        year = cli.year,
        years = cli.years,
        months_per_row = config.months_per_row,
        "rendering calendar"
    );

    let calendar = Layout::new(layout::years(cli.year, cli.years), &config)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    calendar
        .write_to(&mut out)
        .context("failed to print calendar")?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<LayoutConfig> {
    let file = match &cli.config {
        Some(path) => LayoutConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => LayoutConfig::default(),
    };
    let config = file.with_env_overrides()?;
    match cli.per_row {
        Some(per_row) => Ok(LayoutConfigBuilder::from_config(config)
            .months_per_row(per_row)
            .build()?),
        None => Ok(config),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
