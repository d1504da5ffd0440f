//! Command-line interface for lemonade.

use clap::{Parser, Subcommand};

/// Lemonade - tap your way from lemon tree to empty glass
#[derive(Parser, Debug)]
#[command(name = "lemonade")]
#[command(about = "Tap-driven lemonade stand", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if missing)
    #[arg(short, long, global = true, default_value = "lemonade.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Seed for squeeze targets (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Tap a session headlessly and print what the screen shows
    Simulate {
        /// Number of taps to apply
        #[arg(short, long, default_value = "12")]
        taps: u64,

        /// Seed for squeeze targets (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the transcript as JSON
        #[arg(long)]
        json: bool,
    },
}
