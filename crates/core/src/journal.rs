// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The journal entry record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::key;

/// A journal entry.
///
/// Unlike notes, journal entries keep their insertion order: new entries are
/// prepended and the collection is never re-sorted on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier: milliseconds since the epoch at creation time.
    pub id: String,
    /// Rich-text body (HTML), may be empty.
    pub content: String,
    /// Creation timestamp. Serialized as an RFC 3339 string.
    pub date: DateTime<Utc>,
}

impl JournalEntry {
    /// Creates an entry with a fresh id and the current timestamp.
    pub fn new(content: impl Into<String>) -> Self {
        JournalEntry {
            id: key::journal_id(),
            content: content.into(),
            date: Utc::now(),
        }
    }
}

#[cfg(test)]
#[path = "journal_tests.rs"]
mod tests;
