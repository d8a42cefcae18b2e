// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;

#[test]
fn load_missing_file_returns_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.refresh_interval_ms, 1000);
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);

    let config = Config {
        storage_dir: PathBuf::from("/tmp/fitlog-data"),
        refresh_interval_ms: 250,
    };
    config.save(&path).unwrap();

    let back = Config::load(&path).unwrap();
    assert_eq!(back, config);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "storage_dir = \"data\"\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.storage_dir, PathBuf::from("data"));
    assert_eq!(config.refresh_interval_ms, 1000);
}

#[test]
fn invalid_toml_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "refresh_interval_ms = \"not a number\"").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn refresh_interval_converts_to_duration() {
    let config = Config {
        refresh_interval_ms: 1500,
        ..Config::default()
    };
    assert_eq!(config.refresh_interval(), Duration::from_millis(1500));
}
