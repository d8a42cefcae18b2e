// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The note record persisted by the notes screens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::key;

/// A single note.
///
/// Notes live in one of two collections at a time: the active collection or
/// the trash. Within each collection `key` is unique, and a key never appears
/// in both collections at once — removal moves the record, it does not copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier (UUID v4), assigned at creation, immutable.
    pub key: String,
    /// Short heading. Never empty for a persisted note; the store rejects
    /// titles that trim to empty.
    pub title: String,
    /// Free-form body, may be empty.
    pub description: String,
    /// Free-text category label.
    pub category: String,
    /// Creation timestamp. Serialized as an RFC 3339 string.
    pub date: DateTime<Utc>,
}

impl Note {
    /// Creates a note with a fresh key and the current timestamp.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Note {
            key: key::note_key(),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            date: Utc::now(),
        }
    }
}

#[cfg(test)]
#[path = "note_tests.rs"]
mod tests;
