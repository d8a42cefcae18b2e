// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! fitlog-store: Local stores for the fitlog tracker
//!
//! This crate owns every piece of durable device-local state the tracker's
//! screens render: the note collections (active + trash), the journal, the
//! workout catalog, and the food log. Each store persists its collection as
//! one JSON document in the key-value storage provided by `fitlog-core`, and
//! the [`refresh::PollingRefresher`] periodically reloads note state so
//! independently mounted views converge.
//!
//! The storage space is shared and unsynchronized: two store instances over
//! the same backend can interleave read-modify-write cycles and lose one of
//! the updates. That anomaly is part of the modeled behavior; see the
//! `storage` module docs in `fitlog-core`.

pub mod config;
pub mod error;
pub mod food;
pub mod journal;
pub mod notes;
pub mod refresh;
pub mod workouts;

pub use config::Config;
pub use error::{Error, Result};
pub use food::FoodLog;
pub use journal::JournalStore;
pub use notes::NoteStore;
pub use refresh::{PollingRefresher, Snapshot, DEFAULT_REFRESH_INTERVAL};
pub use workouts::WorkoutStore;
