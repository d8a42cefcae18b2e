// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Store configuration.
//!
//! Configuration is stored as TOML and covers the two knobs the persistence
//! layer exposes:
//! - `storage_dir`: root directory for the file-backed storage
//! - `refresh_interval_ms`: polling cadence for view refresh

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default file name for the config.
pub const CONFIG_FILE_NAME: &str = "fitlog.toml";

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Root directory for the file-backed storage.
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
    /// Polling cadence for view refresh, in milliseconds.
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".fitlog")
}

fn default_refresh_interval_ms() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_dir: default_storage_dir(),
            refresh_interval_ms: default_refresh_interval_ms(),
        }
    }
}

impl Config {
    /// Loads the config from `path`. An absent file yields the defaults;
    /// invalid TOML is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let text = fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Writes the config to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(path, text)?;
        Ok(())
    }

    /// The polling cadence as a [`Duration`].
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
