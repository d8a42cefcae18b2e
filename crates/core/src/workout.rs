// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The workout catalog record and its built-in seed data.

use serde::{Deserialize, Serialize};

/// A catalog workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Unique numeric identifier within the catalog.
    pub id: i64,
    pub name: String,
    /// Display duration, e.g. "45 min".
    pub duration: String,
    /// Display difficulty, e.g. "Beginner".
    pub difficulty: String,
    /// Icon name rendered by the workouts screen.
    pub icon: String,
    /// Whether the user bookmarked this workout.
    pub saved: bool,
    /// Category label; matched exactly by the category filter.
    pub category: String,
}

impl Workout {
    fn seed(id: i64, name: &str, duration: &str, difficulty: &str, icon: &str, category: &str) -> Self {
        Workout {
            id,
            name: name.to_string(),
            duration: duration.to_string(),
            difficulty: difficulty.to_string(),
            icon: icon.to_string(),
            saved: false,
            category: category.to_string(),
        }
    }
}

/// The catalog written on first load, before the user has persisted anything.
pub fn default_catalog() -> Vec<Workout> {
    vec![
        Workout::seed(1, "Full Body Workout", "45 min", "Intermediate", "weight-lifter", "Full Body"),
        Workout::seed(2, "HIIT Cardio", "30 min", "Advanced", "run-fast", "Cardio"),
        Workout::seed(3, "Yoga Flow", "60 min", "Beginner", "yoga", "Full Body"),
        Workout::seed(4, "Arm Blaster", "40 min", "Intermediate", "arm-flex", "Arms"),
        Workout::seed(5, "Leg Day", "50 min", "Advanced", "human-handsdown", "Legs"),
        Workout::seed(6, "Core Crusher", "20 min", "Advanced", "ab-testing", "Core"),
        Workout::seed(7, "Chest Workout", "45 min", "Intermediate", "human", "Chest"),
        Workout::seed(8, "Back and Biceps", "55 min", "Intermediate", "human-handsup", "Back"),
    ]
}

#[cfg(test)]
#[path = "workout_tests.rs"]
mod tests;
