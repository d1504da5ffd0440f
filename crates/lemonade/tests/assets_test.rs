//! Tests for resolving view keys through the resource catalog.

use lemonade::{APP_NAME, AssetCatalog};
use lemonade_core::{
    AccessibilityDescriptionKey, ImageKey, InstructionTextKey, SessionState, SqueezeProgress,
    Step, ViewModel,
};
use std::fs;
use strum::IntoEnumIterator;
use tempfile::TempDir;

#[test]
fn test_builtin_resolves_every_key() {
    let catalog = AssetCatalog::builtin();
    for key in ImageKey::iter() {
        assert!(!catalog.image(key).expect("image").is_empty());
    }
    for key in InstructionTextKey::iter() {
        assert!(!catalog.instruction(key).expect("instruction").is_empty());
    }
    for key in AccessibilityDescriptionKey::iter() {
        assert!(!catalog.description(key).expect("description").is_empty());
    }
    assert_eq!(catalog.string(APP_NAME).expect("title"), "Lemonade");
}

#[test]
fn test_builtin_texts() {
    let catalog = AssetCatalog::builtin();
    assert_eq!(
        catalog.instruction(InstructionTextKey::LemonadeSelect).unwrap(),
        "Tap the lemon tree to select a lemon"
    );
    assert_eq!(
        catalog
            .description(AccessibilityDescriptionKey::EmptyGlassContentDescription)
            .unwrap(),
        "Empty glass"
    );
}

#[test]
fn test_render_every_step() {
    let catalog = AssetCatalog::builtin();
    for step in Step::ALL {
        let state = SessionState::new(step, SqueezeProgress::new(1, 4));
        let view = catalog.render(&ViewModel::project(&state)).expect("render");
        assert_eq!(view.title, "Lemonade");
        assert_eq!(view.readout.is_some(), step == Step::Squeeze);
    }

    let squeezing = SessionState::new(Step::Squeeze, SqueezeProgress::new(1, 4));
    let view = catalog.render(&ViewModel::project(&squeezing)).unwrap();
    assert_eq!(view.readout.as_deref(), Some("Squeezes: 1/4"));
}

#[test]
fn test_missing_key_is_an_error() {
    let catalog = AssetCatalog::default();
    let err = catalog.image(ImageKey::LemonTree).unwrap_err();
    assert!(err.message.contains("lemon_tree"), "{err}");

    let state = SessionState::new(Step::Drink, SqueezeProgress::new(2, 2));
    assert!(catalog.render(&ViewModel::project(&state)).is_err());
}

#[test]
fn test_override_file_replaces_entries() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.toml");
    fs::write(
        &path,
        r#"
[strings]
lemonade_select = "Pick one!"

[images]
lemon_tree = "(@)"
"#,
    )
    .expect("Failed to write catalog");

    let catalog = AssetCatalog::load(Some(path.as_path())).expect("load");
    assert_eq!(
        catalog.instruction(InstructionTextKey::LemonadeSelect).unwrap(),
        "Pick one!"
    );
    assert_eq!(catalog.image(ImageKey::LemonTree).unwrap(), "(@)");
    // Untouched entries fall back to the built-in catalog.
    assert_eq!(
        catalog.instruction(InstructionTextKey::LemonadeDrink).unwrap(),
        "Tap the lemonade to drink it"
    );
}

#[test]
fn test_bad_catalog_file_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.toml");
    fs::write(&path, "strings = 12 ???").expect("Failed to write catalog");
    assert!(AssetCatalog::load(Some(path.as_path())).is_err());
    assert!(AssetCatalog::from_file(dir.path().join("missing.toml")).is_err());
}
