// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pure filters over loaded collections.
//!
//! Each filter mirrors the matching behavior of the screen that uses it.
//! Note search is a case-sensitive substring match; journal and workout
//! search fold case on both sides. All filters return fresh clones, never
//! live references into the store's state.

use crate::journal::JournalEntry;
use crate::note::Note;
use crate::workout::Workout;

/// Category value that matches every workout.
pub const ALL_CATEGORY: &str = "All";

/// Notes whose title OR description contains `query` verbatim.
///
/// The empty query matches everything. Matching is case-sensitive, so
/// "MILK" does not find "milk".
pub fn filter_notes(notes: &[Note], query: &str) -> Vec<Note> {
    notes
        .iter()
        .filter(|n| n.title.contains(query) || n.description.contains(query))
        .cloned()
        .collect()
}

/// Journal entries whose content contains `query`, ignoring case.
pub fn filter_entries(entries: &[JournalEntry], query: &str) -> Vec<JournalEntry> {
    let query = query.to_lowercase();
    entries
        .iter()
        .filter(|e| e.content.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Workouts in `category` whose name contains `query`, ignoring case.
///
/// [`ALL_CATEGORY`] matches every category; other values are compared
/// exactly.
pub fn filter_workouts(workouts: &[Workout], category: &str, query: &str) -> Vec<Workout> {
    let query = query.to_lowercase();
    workouts
        .iter()
        .filter(|w| {
            w.name.to_lowercase().contains(&query)
                && (category == ALL_CATEGORY || w.category == category)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
