use std::fs;

use shelter_cli::config::{ConfigError, DEFAULT_CONFIG_FILE, FileConfig, load_config};
use shelter_model::AnimalDedupe;

#[test]
fn missing_default_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = load_config(None, dir.path()).expect("load config");
    assert_eq!(config, FileConfig::default());
}

#[test]
fn default_file_is_read_from_search_dir() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        "input = \"data/animals.csv\"\nanimal_dedupe = \"by-value\"\nreplace = true\n",
    )
    .expect("write config");
    let config = load_config(None, dir.path()).expect("load config");
    assert_eq!(config.input.as_deref(), Some(std::path::Path::new("data/animals.csv")));
    assert_eq!(config.animal_dedupe, Some(AnimalDedupe::ByValue));
    assert_eq!(config.replace, Some(true));
    assert_eq!(config.database, None);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("custom.toml");
    let error = load_config(Some(&path), dir.path()).expect_err("missing config");
    assert!(matches!(error, ConfigError::Io { .. }));
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("custom.toml");
    fs::write(&path, "host = \"127.0.0.1\"\n").expect("write config");
    let error = load_config(Some(&path), dir.path()).expect_err("unknown key");
    assert!(matches!(error, ConfigError::Toml { .. }));
}
