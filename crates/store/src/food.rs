// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The food log: an append-only record of logged foods.

use fitlog_core::storage::{read_array, write_array};
use fitlog_core::{FoodEntry, Storage};

use crate::error::Result;

/// Storage key for the food log.
pub const FOOD_LOG_KEY: &str = "loggedFoods";

/// Append-only food log.
///
/// Unlike the other stores this one keeps no in-memory view; every operation
/// is a fresh read-modify-write against storage, matching how the logging
/// screen uses it.
pub struct FoodLog<S: Storage> {
    storage: S,
}

impl<S: Storage> FoodLog<S> {
    pub fn new(storage: S) -> Self {
        FoodLog { storage }
    }

    /// Appends an entry stamped with the current time and persists the full
    /// log. Returns the stamped entry.
    pub async fn log(&self, name: &str, calories: f64, serving: &str) -> Result<FoodEntry> {
        let mut entries: Vec<FoodEntry> = read_array(&self.storage, FOOD_LOG_KEY).await?;

        let entry = FoodEntry::new(name, calories, serving);
        entries.push(entry.clone());

        write_array(&self.storage, FOOD_LOG_KEY, &entries).await?;
        Ok(entry)
    }

    /// Reads the full log in insertion order. Absent key reads as empty.
    pub async fn entries(&self) -> Result<Vec<FoodEntry>> {
        let entries = read_array(&self.storage, FOOD_LOG_KEY).await?;
        Ok(entries)
    }
}

#[cfg(test)]
#[path = "food_tests.rs"]
mod tests;
