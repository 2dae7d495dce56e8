//! Integration tests for Settings config loading.
//!
//! These tests load explicit files from temp directories, never the
//! user's global config.

use std::fs;

use tempfile::TempDir;

use dobble::application::ApplicationError;
use dobble::config::{OutputFormat, Settings};

#[test]
fn given_missing_config_file_when_loading_then_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::load_from(Some(&dir.path().join("dobble.toml"))).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_no_config_path_when_loading_then_defaults() {
    assert_eq!(Settings::load_from(None).unwrap(), Settings::default());
}

#[test]
fn given_config_file_when_loading_then_overrides_specified_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dobble.toml");
    fs::write(
        &path,
        r#"
symbols_per_card = 6
format = "json"
"#,
    )
    .unwrap();

    let settings = Settings::load_from(Some(&path)).unwrap();

    assert_eq!(settings.symbols_per_card, 6);
    assert_eq!(settings.format, OutputFormat::Json);
    assert!(settings.color, "unspecified field keeps default");
}

#[test]
fn given_unknown_format_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dobble.toml");
    fs::write(&path, "format = \"yaml\"\n").unwrap();

    let err = Settings::load_from(Some(&path)).unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }));
}

#[test]
fn given_unknown_key_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dobble.toml");
    fs::write(&path, "symbols = 6\n").unwrap();

    let err = Settings::load_from(Some(&path)).unwrap_err();
    assert!(err.to_string().starts_with("config error: parse"));
}

#[test]
fn given_settings_when_rendering_toml_then_round_trips_values() {
    let settings = Settings {
        symbols_per_card: 4,
        format: OutputFormat::Json,
        color: false,
    };
    let text = settings.to_toml().unwrap();
    assert!(text.contains("symbols_per_card = 4"));
    assert!(text.contains("format = \"json\""));
    assert!(text.contains("color = false"));
}
