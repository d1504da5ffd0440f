//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a lemonade run, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct LemonadeConfig {
    /// Seed for squeeze targets. Unset means OS entropy.
    #[serde(default)]
    seed: Option<u64>,

    /// File the TUI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Whether to show the `count/target` readout while squeezing.
    #[serde(default = "default_show_squeeze_readout")]
    show_squeeze_readout: bool,

    /// Optional resource catalog overriding the built-in strings and art.
    #[serde(default)]
    catalog: Option<PathBuf>,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("lemonade.log")
}

#[instrument]
fn default_show_squeeze_readout() -> bool {
    true
}

impl Default for LemonadeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_file: default_log_file(),
            show_squeeze_readout: default_show_squeeze_readout(),
            catalog: None,
        }
    }
}

impl LemonadeConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let mut config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        // Catalog paths are relative to the config file.
        if let (Some(catalog), Some(dir)) = (&config.catalog, path.as_ref().parent())
            && catalog.is_relative()
        {
            config.catalog = Some(dir.join(catalog));
        }

        info!(seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the seed when one is given.
    #[instrument(skip(self))]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            debug!(?seed, "Overriding seed");
            self.seed = seed;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
