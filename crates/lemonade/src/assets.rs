//! Resource catalog: resolves opaque view keys to text and art.
//!
//! The built-in catalog covers every key. A TOML catalog can override any
//! entry:
//!
//! ```toml
//! [strings]
//! lemonade_select = "Pick a lemon!"
//!
//! [images]
//! lemon_tree = """
//!   (@)
//!    |
//! """
//! ```

use derive_more::{Display, Error};
use lemonade_core::{AccessibilityDescriptionKey, ImageKey, InstructionTextKey, ViewModel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Resource name of the application title.
pub const APP_NAME: &str = "app_name";

/// Resource name of the squeeze readout label.
pub const SQUEEZE_LABEL: &str = "squeeze_readout_label";

const LEMON_TREE_ART: &str = r"    _.-^^-._
  .'  @  @  '.
 (  @   @   @ )
  '. @   @  .'
    '--||--'
       ||
      _||_";

const LEMON_SQUEEZE_ART: &str = r"    \  |  /
   .-------.
  (  o   o  )
   '-------'
     \   /
      \_/";

const LEMON_DRINK_ART: &str = r"   ________
  |~~~~~~~~|
  | ~ ~ ~ ~|
  |  ~ ~ ~ |
  | ~ ~ ~ ~|
  |________|";

const LEMON_RESTART_ART: &str = r"   ________
  |        |
  |        |
  |        |
  |        |
  |________|";

/// Text and ASCII art keyed by resource name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetCatalog {
    /// Image name to ASCII art.
    #[serde(default)]
    images: BTreeMap<String, String>,
    /// String name to text.
    #[serde(default)]
    strings: BTreeMap<String, String>,
}

impl AssetCatalog {
    /// The catalog shipped with the application.
    #[instrument]
    pub fn builtin() -> Self {
        let images = [
            (ImageKey::LemonTree, LEMON_TREE_ART),
            (ImageKey::LemonSqueeze, LEMON_SQUEEZE_ART),
            (ImageKey::LemonDrink, LEMON_DRINK_ART),
            (ImageKey::LemonRestart, LEMON_RESTART_ART),
        ]
        .into_iter()
        .map(|(key, art)| (key.to_string(), art.to_string()))
        .collect();

        let strings = [
            (APP_NAME, "Lemonade"),
            (SQUEEZE_LABEL, "Squeezes"),
            (
                InstructionTextKey::LemonadeSelect.into(),
                "Tap the lemon tree to select a lemon",
            ),
            (
                InstructionTextKey::LemonadeSqueeze.into(),
                "Keep tapping the lemon to squeeze it",
            ),
            (
                InstructionTextKey::LemonadeDrink.into(),
                "Tap the lemonade to drink it",
            ),
            (
                InstructionTextKey::EmptyGlassRestart.into(),
                "Tap the empty glass to start again",
            ),
            (
                AccessibilityDescriptionKey::LemonTreeContentDescription.into(),
                "Lemon tree",
            ),
            (
                AccessibilityDescriptionKey::LemonContentDescription.into(),
                "Lemon",
            ),
            (
                AccessibilityDescriptionKey::GlassOfLemonadeContentDescription.into(),
                "Glass of lemonade",
            ),
            (
                AccessibilityDescriptionKey::EmptyGlassContentDescription.into(),
                "Empty glass",
            ),
        ]
        .into_iter()
        .map(|(name, text): (&str, &str)| (name.to_string(), text.to_string()))
        .collect();

        Self { images, strings }
    }

    /// Parses a catalog from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        debug!("Loading catalog from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| AssetError::new(format!("Failed to read catalog: {}", e)))?;

        let catalog: Self = toml::from_str(&content)
            .map_err(|e| AssetError::new(format!("Failed to parse catalog: {}", e)))?;

        info!(
            images = catalog.images.len(),
            strings = catalog.strings.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// The built-in catalog with an optional override file applied.
    #[instrument(skip(overrides))]
    pub fn load(overrides: Option<&Path>) -> Result<Self, AssetError> {
        let builtin = Self::builtin();
        match overrides {
            Some(path) => Ok(builtin.merged(Self::from_file(path)?)),
            None => Ok(builtin),
        }
    }

    /// Applies `overrides` on top of this catalog.
    pub fn merged(mut self, overrides: AssetCatalog) -> Self {
        self.images.extend(overrides.images);
        self.strings.extend(overrides.strings);
        self
    }

    /// Looks up a string by resource name.
    #[instrument(skip(self))]
    pub fn string(&self, name: &str) -> Result<&str, AssetError> {
        self.strings.get(name).map(String::as_str).ok_or_else(|| {
            warn!(name, "Missing string resource");
            AssetError::new(format!("No string resource named '{}'", name))
        })
    }

    /// Resolves an image key to its art.
    #[instrument(skip(self))]
    pub fn image(&self, key: ImageKey) -> Result<&str, AssetError> {
        let name: &'static str = key.into();
        self.images.get(name).map(String::as_str).ok_or_else(|| {
            warn!(name, "Missing image resource");
            AssetError::new(format!("No image resource named '{}'", name))
        })
    }

    /// Resolves an instruction key to its text.
    pub fn instruction(&self, key: InstructionTextKey) -> Result<&str, AssetError> {
        let name: &'static str = key.into();
        self.string(name)
    }

    /// Resolves an accessibility key to its text.
    pub fn description(&self, key: AccessibilityDescriptionKey) -> Result<&str, AssetError> {
        let name: &'static str = key.into();
        self.string(name)
    }

    /// Resolves every key of a view model.
    #[instrument(skip(self))]
    pub fn render(&self, view: &ViewModel) -> Result<RenderedView, AssetError> {
        let readout = match view.squeeze_readout {
            Some(progress) => Some(format!("{}: {}", self.string(SQUEEZE_LABEL)?, progress)),
            None => None,
        };

        Ok(RenderedView {
            title: self.string(APP_NAME)?.to_string(),
            image: self.image(view.image)?.to_string(),
            instruction: self.instruction(view.instruction)?.to_string(),
            description: self.description(view.description)?.to_string(),
            readout,
        })
    }
}

/// A view model with every key resolved, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedView {
    /// Application title.
    pub title: String,
    /// ASCII art of the image.
    pub image: String,
    /// Instruction text.
    pub instruction: String,
    /// Accessibility description of the image.
    pub description: String,
    /// Squeeze readout, e.g. `Squeezes: 1/3`.
    pub readout: Option<String>,
}

/// A resource failed to load or resolve.
#[derive(Debug, Clone, Display, Error)]
#[display("Asset error: {} at {}:{}", message, file, line)]
pub struct AssetError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AssetError {
    /// Creates a new asset error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
