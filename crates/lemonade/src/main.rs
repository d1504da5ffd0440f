//! Lemonade - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use lemonade::{AssetCatalog, LemonadeConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = LemonadeConfig::load(&cli.config)?;

    match cli.command {
        Command::Play { seed } => run_play(config.with_seed(seed)),
        Command::Simulate { taps, seed, json } => run_simulate(config.with_seed(seed), taps, json),
    }
}

/// Run the interactive TUI
fn run_play(config: LemonadeConfig) -> Result<()> {
    let catalog = AssetCatalog::load(config.catalog().as_deref())?;
    lemonade::run_tui(&config, catalog)
}

/// Run a headless simulation and print the transcript
#[instrument(skip(config))]
fn run_simulate(config: LemonadeConfig, taps: u64, json: bool) -> Result<()> {
    // stdout carries the transcript; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(taps, seed = ?config.seed(), "Starting simulation");

    let catalog = AssetCatalog::load(config.catalog().as_deref())?;
    let transcript = lemonade::simulate(taps, *config.seed(), &catalog)?;

    if json {
        let out = serde_json::to_string_pretty(&transcript).context("Failed to encode transcript")?;
        println!("{}", out);
    } else {
        for entry in &transcript {
            println!("{}", entry);
        }
    }

    Ok(())
}
