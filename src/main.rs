use anyhow::{Context, Result};
use clap::Parser;
use std::{
    io::{self, Write},
    path::PathBuf,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use welldata::{LoaderConfig, UnitSystem, WellDataLoader};

/// Load a well-log CSV, normalize its columns and print the rows as JSON.
#[derive(Parser)]
#[command(name = "welldata", version)]
struct Cli {
    /// CSV file to load
    file: PathBuf,

    /// geothermal, contamination, groundwater, hydrocarbon or auto
    #[arg(long, short = 'a')]
    application: Option<String>,

    /// Units the file is written in [default: from config, else metric]
    #[arg(long, short = 'u')]
    units: Option<UnitSystem>,

    /// YAML loader configuration
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    // ─── 1) init logging (stderr, stdout carries the rows) ───────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // ─── 2) configuration ────────────────────────────────────────────
    let config = match &cli.config {
        Some(path) => LoaderConfig::from_yaml_file(path)?,
        None => LoaderConfig::default(),
    };
    let units = cli.units.unwrap_or(config.units);
    info!(file = %cli.file.display(), %units, "loading");

    // ─── 3) load + emit ──────────────────────────────────────────────
    let loader = WellDataLoader::new(config);
    let rows = loader
        .load(&cli.file, cli.application.as_deref(), units)
        .with_context(|| format!("Failed to load well data from {:?}", cli.file))?;

    let mut out = io::stdout().lock();
    if cli.pretty {
        serde_json::to_writer_pretty(&mut out, &rows)?;
    } else {
        serde_json::to_writer(&mut out, &rows)?;
    }
    writeln!(out)?;
    Ok(())
}
