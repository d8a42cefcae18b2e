// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The food log record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged food item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    /// Food name as selected in the logging screen.
    pub name: String,
    /// Calories for the logged serving.
    pub calories: f64,
    /// Serving description, e.g. "1 cup".
    pub serving: String,
    /// When the entry was logged. Stamped by the log operation.
    #[serde(rename = "loggedAt")]
    pub logged_at: DateTime<Utc>,
}

impl FoodEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(name: impl Into<String>, calories: f64, serving: impl Into<String>) -> Self {
        FoodEntry {
            name: name.into(),
            calories,
            serving: serving.into(),
            logged_at: Utc::now(),
        }
    }
}

#[cfg(test)]
#[path = "food_tests.rs"]
mod tests;
