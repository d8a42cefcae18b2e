// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::workout::default_catalog;

fn milk_notes() -> Vec<Note> {
    vec![
        Note::new("Buy milk", "2%", "groceries"),
        Note::new("Call mom", "ask about milk", "family"),
        Note::new("Workout", "leg day", "fitness"),
    ]
}

#[test]
fn matches_title_or_description() {
    let notes = milk_notes();
    let hits = filter_notes(&notes, "milk");

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].title, "Buy milk");
    assert_eq!(hits[1].title, "Call mom");
}

#[test]
fn note_matching_is_case_sensitive() {
    let notes = milk_notes();
    assert!(filter_notes(&notes, "MILK").is_empty());
}

#[test]
fn empty_query_returns_all_notes() {
    let notes = milk_notes();
    assert_eq!(filter_notes(&notes, "").len(), notes.len());
}

#[test]
fn filter_does_not_mutate_input() {
    let notes = milk_notes();
    let before = notes.clone();
    let _ = filter_notes(&notes, "milk");
    assert_eq!(notes, before);
}

#[test]
fn journal_matching_folds_case() {
    let entries = vec![
        JournalEntry::new("Slept WELL last night"),
        JournalEntry::new("skipped breakfast"),
    ];

    let hits = filter_entries(&entries, "well");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].content, "Slept WELL last night");
}

#[test]
fn workout_all_category_matches_everything() {
    let catalog = default_catalog();
    assert_eq!(filter_workouts(&catalog, ALL_CATEGORY, "").len(), catalog.len());
}

#[test]
fn workout_category_is_matched_exactly() {
    let catalog = default_catalog();
    let hits = filter_workouts(&catalog, "Cardio", "");

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "HIIT Cardio");
}

#[test]
fn workout_name_query_folds_case() {
    let catalog = default_catalog();
    let hits = filter_workouts(&catalog, ALL_CATEGORY, "yoga");

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Yoga Flow");
}

#[test]
fn workout_query_and_category_combine() {
    let catalog = default_catalog();
    // "Full Body Workout" and "Yoga Flow" share the category; only one
    // matches the query.
    let hits = filter_workouts(&catalog, "Full Body", "yoga");

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Yoga Flow");
}
