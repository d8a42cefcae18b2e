// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the store layer.

use thiserror::Error;

/// All possible errors that can occur in fitlog-store operations.
///
/// Storage-layer failures bubble up unchanged; the stores perform no
/// retries, no backoff, and no partial-write recovery. The only suppressed
/// case is the add-with-empty-title validation no-op, which is not an error
/// at all (see [`crate::notes::NoteStore::add`]).
#[derive(Debug, Error)]
pub enum Error {
    #[error("storage error: {0}")]
    Storage(#[from] fitlog_core::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for fitlog-store operations.
pub type Result<T> = std::result::Result<T, Error>;
