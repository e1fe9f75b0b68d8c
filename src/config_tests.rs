//! Tests for config

use super::*;
use std::fs;
use tempfile::TempDir;

fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert!(config.contact.endpoint.is_none());
}

#[test]
fn test_missing_file_returns_defaults_without_warning() {
    let dir = TempDir::new().unwrap();
    let result = load_config_from(&dir.path().join("config.toml"));

    assert!(result.config.contact.endpoint.is_none());
    assert!(result.warning.is_none());
}

#[test]
fn test_valid_file_is_loaded() {
    let (_dir, path) = write_config("[contact]\nendpoint = \"https://studio.example/api/contact\"\n");
    let result = load_config_from(&path);

    assert_eq!(
        result.config.contact.endpoint.as_deref(),
        Some("https://studio.example/api/contact")
    );
    assert!(result.warning.is_none());
}

#[test]
fn test_malformed_toml_falls_back_with_warning() {
    let (_dir, path) = write_config("[contact\nendpoint = \"x\"");
    let result = load_config_from(&path);

    assert!(result.config.contact.endpoint.is_none());
    let warning = result.warning.unwrap();
    assert!(warning.starts_with("Invalid config:"), "got: {}", warning);
}

#[test]
fn test_wrong_type_falls_back_with_warning() {
    let (_dir, path) = write_config("[contact]\nendpoint = 42\n");
    let result = load_config_from(&path);

    assert!(result.config.contact.endpoint.is_none());
    assert!(result.warning.is_some());
}

#[test]
fn test_unreadable_path_falls_back_with_warning() {
    // A directory exists but cannot be read as a file
    let dir = TempDir::new().unwrap();
    let result = load_config_from(dir.path());

    assert!(result.config.contact.endpoint.is_none());
    assert!(result.warning.unwrap().starts_with("Failed to read config:"));
}

#[test]
fn test_config_path_ends_with_folio_config() {
    let path = get_config_path();
    let path_str = path.to_string_lossy();
    assert!(
        path_str.ends_with("folio/config.toml") || path_str.ends_with("folio\\config.toml"),
        "got: {}",
        path_str
    );
}
