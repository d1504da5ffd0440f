//! Lemonade - a tap-driven lemonade stand for the terminal.
//!
//! The game logic lives in [`lemonade_core`]; this crate is the rendering
//! collaborator around it.
//!
//! # Architecture
//!
//! - **Config**: optional TOML settings ([`LemonadeConfig`])
//! - **Assets**: resolves view keys to text and ASCII art ([`AssetCatalog`])
//! - **TUI**: interactive ratatui screen ([`run_tui`])
//! - **Simulate**: headless runs for scripting and tests ([`simulate`])
//!
//! # Example
//!
//! ```
//! use lemonade::{AssetCatalog, simulate};
//! use lemonade_core::Step;
//!
//! let transcript = simulate(1, Some(1), &AssetCatalog::builtin()).unwrap();
//! assert_eq!(transcript[0].step, Step::SelectLemon);
//! assert_eq!(transcript[1].step, Step::Squeeze);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod assets;
mod config;
mod simulate;
mod tui;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,lemonade=debug,lemonade_core=debug";

// Crate-level exports - Configuration
pub use config::{ConfigError, LemonadeConfig};

// Crate-level exports - Resource catalog
pub use assets::{APP_NAME, AssetCatalog, AssetError, RenderedView, SQUEEZE_LABEL};

// Crate-level exports - Front ends
pub use simulate::{TranscriptEntry, simulate};
pub use tui::run_tui;
