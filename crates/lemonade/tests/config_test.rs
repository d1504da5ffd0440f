//! Tests for loading lemonade configuration.

use lemonade::LemonadeConfig;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = LemonadeConfig::default();
    assert_eq!(config.seed(), &None);
    assert_eq!(config.log_file(), &PathBuf::from("lemonade.log"));
    assert!(*config.show_squeeze_readout());
    assert_eq!(config.catalog(), &None);
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = LemonadeConfig::load(dir.path().join("nope.toml")).expect("load");
    assert_eq!(config, LemonadeConfig::default());
}

#[test]
fn test_from_file_reads_fields() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("lemonade.toml");
    fs::write(
        &path,
        r#"
seed = 17
log_file = "/tmp/lemons.log"
show_squeeze_readout = false
catalog = "strings.toml"
"#,
    )
    .expect("Failed to write config");

    let config = LemonadeConfig::from_file(&path).expect("parse");
    assert_eq!(config.seed(), &Some(17));
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/lemons.log"));
    assert!(!*config.show_squeeze_readout());
    assert_eq!(config.catalog(), &Some(dir.path().join("strings.toml")));
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("lemonade.toml");
    fs::write(&path, "seed = 3\n").expect("Failed to write config");

    let config = LemonadeConfig::from_file(&path).expect("parse");
    assert_eq!(config.seed(), &Some(3));
    assert!(*config.show_squeeze_readout());
}

#[test]
fn test_invalid_toml_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("lemonade.toml");
    fs::write(&path, "seed = \"not a number\"").expect("Failed to write config");

    let err = LemonadeConfig::load(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"), "{err}");
}

#[test]
fn test_with_seed_overrides_only_when_given() {
    let config = LemonadeConfig::default().with_seed(Some(5));
    assert_eq!(config.seed(), &Some(5));
    let config = config.with_seed(None);
    assert_eq!(config.seed(), &Some(5));
}
