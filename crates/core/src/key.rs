// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Identifier generation for persisted records.

use chrono::Utc;
use uuid::Uuid;

/// Generate a note key: a random UUID v4 in hyphenated form.
pub fn note_key() -> String {
    Uuid::new_v4().to_string()
}

/// Generate a journal entry id: milliseconds since the Unix epoch, as a
/// decimal string. Two entries created within the same millisecond share
/// an id; callers that need distinct entries create them through the store,
/// which only ever assigns one id per save.
pub fn journal_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod tests;
