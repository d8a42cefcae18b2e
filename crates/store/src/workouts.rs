// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The workout catalog.
//!
//! Persisted under [`WORKOUTS_KEY`]. The first load of a fresh storage seeds
//! the built-in catalog and persists it; after that the persisted state is
//! read verbatim, so user edits (the `saved` bookmarks) survive.

use fitlog_core::storage::{decode_array, write_array};
use fitlog_core::workout::default_catalog;
use fitlog_core::{search, Error as CoreError, Storage, Workout};
use tracing::debug;

use crate::error::Result;

/// Storage key for the workout catalog.
pub const WORKOUTS_KEY: &str = "workouts";

/// Store for the workout catalog.
pub struct WorkoutStore<S: Storage> {
    storage: S,
    workouts: Vec<Workout>,
}

impl<S: Storage> WorkoutStore<S> {
    pub fn new(storage: S) -> Self {
        WorkoutStore {
            storage,
            workouts: Vec::new(),
        }
    }

    /// Loads the catalog, seeding the defaults when the key is absent.
    ///
    /// Seeding persists the default catalog immediately, so a second store
    /// over the same backend observes the seeded state instead of
    /// re-seeding. An empty persisted array is NOT re-seeded; only a key
    /// that was never written is.
    pub async fn load(&mut self) -> Result<()> {
        match self.storage.get(WORKOUTS_KEY).await? {
            Some(payload) => {
                self.workouts = decode_array(WORKOUTS_KEY, &payload)?;
            }
            None => {
                self.workouts = default_catalog();
                write_array(&self.storage, WORKOUTS_KEY, &self.workouts).await?;
                debug!(count = self.workouts.len(), "seeded workout catalog");
            }
        }
        Ok(())
    }

    /// Snapshot of the catalog.
    pub fn workouts(&self) -> Vec<Workout> {
        self.workouts.clone()
    }

    /// Flips the `saved` flag of the workout with `id` and persists the
    /// full catalog. Returns the new flag value.
    pub async fn toggle_saved(&mut self, id: i64) -> Result<bool> {
        let Some(workout) = self.workouts.iter_mut().find(|w| w.id == id) else {
            return Err(CoreError::WorkoutNotFound(id).into());
        };

        workout.saved = !workout.saved;
        let saved = workout.saved;

        write_array(&self.storage, WORKOUTS_KEY, &self.workouts).await?;
        Ok(saved)
    }

    /// Workouts in `category` whose name contains `query` (case folded).
    /// `"All"` matches every category.
    pub fn filter(&self, category: &str, query: &str) -> Vec<Workout> {
        search::filter_workouts(&self.workouts, category, query)
    }
}

#[cfg(test)]
#[path = "workouts_tests.rs"]
mod tests;
