// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for fitlog-core operations.

use thiserror::Error;

/// All possible errors that can occur in fitlog-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed payload under storage key '{key}': {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid storage key: '{0}'\n  hint: keys may only contain ASCII letters, digits, '_' and '-'")]
    InvalidKey(String),

    #[error("journal entry not found: {0}")]
    EntryNotFound(String),

    #[error("workout not found: {0}")]
    WorkoutNotFound(i64),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for fitlog-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
