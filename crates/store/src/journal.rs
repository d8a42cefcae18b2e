// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Journal entries.
//!
//! Persisted under [`JOURNAL_KEY`] in insertion order: new entries are
//! prepended, and load does not re-sort. Saving with an existing id replaces
//! that entry's content in place.

use fitlog_core::storage::{read_array, write_array};
use fitlog_core::{search, Error as CoreError, JournalEntry, Storage};
use tracing::debug;

use crate::error::Result;

/// Storage key for the journal collection.
pub const JOURNAL_KEY: &str = "journalEntries";

/// Store for journal entries.
pub struct JournalStore<S: Storage> {
    storage: S,
    entries: Vec<JournalEntry>,
}

impl<S: Storage> JournalStore<S> {
    pub fn new(storage: S) -> Self {
        JournalStore {
            storage,
            entries: Vec::new(),
        }
    }

    /// Reloads the collection from storage. Absent key reads as empty;
    /// a malformed payload aborts the load.
    pub async fn load(&mut self) -> Result<()> {
        self.entries = read_array(&self.storage, JOURNAL_KEY).await?;
        debug!(entries = self.entries.len(), "loaded journal");
        Ok(())
    }

    /// Snapshot of the collection, newest first.
    pub fn entries(&self) -> Vec<JournalEntry> {
        self.entries.clone()
    }

    /// Saves an entry and persists the full collection.
    ///
    /// With `Some(id)`, replaces the content of the existing entry in place;
    /// an unknown id is an error, never an implicit create. With `None`,
    /// creates a fresh entry and prepends it.
    pub async fn save(&mut self, id: Option<&str>, content: &str) -> Result<JournalEntry> {
        let entry = match id {
            Some(id) => {
                let Some(existing) = self.entries.iter_mut().find(|e| e.id == id) else {
                    return Err(CoreError::EntryNotFound(id.to_string()).into());
                };
                existing.content = content.to_string();
                existing.clone()
            }
            None => {
                let entry = JournalEntry::new(content);
                self.entries.insert(0, entry.clone());
                entry
            }
        };

        write_array(&self.storage, JOURNAL_KEY, &self.entries).await?;
        Ok(entry)
    }

    /// Case-insensitive substring search over entry content.
    pub fn search(&self, query: &str) -> Vec<JournalEntry> {
        search::filter_entries(&self.entries, query)
    }
}

#[cfg(test)]
#[path = "journal_tests.rs"]
mod tests;
