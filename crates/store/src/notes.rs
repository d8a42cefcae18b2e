// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Note collections with soft delete.
//!
//! Notes live under two storage keys: [`NOTES_KEY`] for the active
//! collection and [`DELETED_NOTES_KEY`] for the trash. Removing a note moves
//! it between the two; nothing is physically erased, and the trash is
//! one-way — no operation moves a note back out of it. Every mutation
//! rewrites the affected collection in full.
//!
//! Each `NoteStore` instance holds its own in-memory view of both
//! collections. Instances sharing a storage backend are only loosely
//! synchronized (typically through the polling refresher); concurrent
//! mutations from two instances can lose an update, and the store does not
//! guard against that.

use fitlog_core::storage::{read_array, write_array};
use fitlog_core::{search, Note, Storage};
use tracing::debug;

use crate::error::Result;

/// Storage key for the active collection.
pub const NOTES_KEY: &str = "notes";
/// Storage key for the trash.
pub const DELETED_NOTES_KEY: &str = "deletedNotes";

/// Single source of truth for the active and deleted note collections.
pub struct NoteStore<S: Storage> {
    storage: S,
    notes: Vec<Note>,
    deleted: Vec<Note>,
}

impl<S: Storage> NoteStore<S> {
    /// Creates an empty store over `storage`.
    ///
    /// The store starts with empty in-memory collections; call [`load`] to
    /// populate them.
    ///
    /// [`load`]: NoteStore::load
    pub fn new(storage: S) -> Self {
        NoteStore {
            storage,
            notes: Vec::new(),
            deleted: Vec::new(),
        }
    }

    /// Reloads both collections from storage.
    ///
    /// Each collection is re-sorted descending by date (most recent first).
    /// Absent keys read as empty collections. A payload that fails to parse
    /// aborts the whole load; no per-record recovery is attempted, and the
    /// in-memory view keeps its previous state.
    pub async fn load(&mut self) -> Result<()> {
        let mut notes: Vec<Note> = read_array(&self.storage, NOTES_KEY).await?;
        let mut deleted: Vec<Note> = read_array(&self.storage, DELETED_NOTES_KEY).await?;

        notes.sort_by(|a, b| b.date.cmp(&a.date));
        deleted.sort_by(|a, b| b.date.cmp(&a.date));

        debug!(active = notes.len(), deleted = deleted.len(), "loaded note collections");

        self.notes = notes;
        self.deleted = deleted;
        Ok(())
    }

    /// Snapshot of the active collection.
    pub fn notes(&self) -> Vec<Note> {
        self.notes.clone()
    }

    /// Snapshot of the trash.
    pub fn deleted_notes(&self) -> Vec<Note> {
        self.deleted.clone()
    }

    /// Adds a note and persists the full active collection.
    ///
    /// Returns `Ok(None)` without touching storage when `title` trims to
    /// empty — the validation no-op the screens rely on. Otherwise the note
    /// gets a fresh key and the current timestamp, and the new note is
    /// returned.
    pub async fn add(&mut self, title: &str, description: &str, category: &str) -> Result<Option<Note>> {
        if title.trim().is_empty() {
            return Ok(None);
        }

        let note = Note::new(title, description, category);
        self.notes.push(note.clone());
        self.persist_active().await?;

        debug!(key = %note.key, "added note");
        Ok(Some(note))
    }

    /// Moves the note with `key` to the trash.
    ///
    /// Unknown keys are a silent no-op: nothing changes and nothing is
    /// persisted. On a hit, the trash is persisted before the active
    /// collection; there is no atomicity between the two writes, so a crash
    /// in between leaves the note present in both collections.
    pub async fn remove(&mut self, key: &str) -> Result<()> {
        let Some(index) = self.notes.iter().position(|n| n.key == key) else {
            return Ok(());
        };

        let note = self.notes.remove(index);
        self.deleted.push(note);

        self.persist_deleted().await?;
        self.persist_active().await?;

        debug!(%key, "moved note to trash");
        Ok(())
    }

    /// Case-sensitive substring search over the active collection, matching
    /// title or description. The empty query returns everything.
    pub fn search(&self, query: &str) -> Vec<Note> {
        search::filter_notes(&self.notes, query)
    }

    /// Looks up an active note by key.
    pub fn get(&self, key: &str) -> Option<Note> {
        self.notes.iter().find(|n| n.key == key).cloned()
    }

    async fn persist_active(&self) -> Result<()> {
        write_array(&self.storage, NOTES_KEY, &self.notes).await?;
        Ok(())
    }

    async fn persist_deleted(&self) -> Result<()> {
        write_array(&self.storage, DELETED_NOTES_KEY, &self.deleted).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "notes_tests.rs"]
mod tests;
