// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Polling refresher for note state.
//!
//! Local storage has no change-notification channel, so mounted views poll:
//! each refresher reloads the note collections on a fixed cadence and
//! delivers a snapshot per tick. Every view owns its own refresher — N
//! mounted views mean N independent polling loops over the same storage
//! keys.
//!
//! Ticks are fire-and-forget: each reload runs as its own task, so a slow or
//! failing load neither blocks nor skips the next tick, and ticks can
//! overlap. Cancellation stops the timer immediately but does not await or
//! cancel a load already in flight.

use std::time::Duration;

use fitlog_core::{Note, Storage};
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::error::Result;
use crate::notes::NoteStore;

/// Default polling cadence.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(1000);

/// Snapshot capacity before ticks start dropping their snapshots.
const SNAPSHOT_CHANNEL_CAPACITY: usize = 16;

/// Both note collections as of one refresh tick.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Active collection, most recent first.
    pub notes: Vec<Note>,
    /// Trash, most recent first.
    pub deleted_notes: Vec<Note>,
}

/// Handle to a running polling loop.
///
/// Dropping the handle cancels the loop.
pub struct PollingRefresher {
    cancel_token: CancellationToken,
}

impl PollingRefresher {
    /// Starts a polling loop over `storage`.
    ///
    /// The first tick fires one full `interval` after start. Snapshots
    /// arrive on the returned channel; when the consumer falls behind, a
    /// tick's snapshot is dropped rather than blocking the loop.
    pub fn start<S>(storage: S, interval: Duration) -> (Self, mpsc::Receiver<Snapshot>)
    where
        S: Storage + Clone + Send + Sync + 'static,
    {
        let (snapshot_tx, snapshot_rx) = mpsc::channel(SNAPSHOT_CHANNEL_CAPACITY);
        let cancel_token = CancellationToken::new();
        let token = cancel_token.clone();

        // A zero period would make the timer panic; clamp to the smallest
        // representable cadence instead.
        let interval = interval.max(Duration::from_millis(1));

        tokio::spawn(async move {
            let start = time::Instant::now() + interval;
            let mut ticker = time::interval_at(start, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        spawn_tick(storage.clone(), snapshot_tx.clone());
                    }
                }
            }
        });

        (PollingRefresher { cancel_token }, snapshot_rx)
    }

    /// Stops the timer. Immediate; an in-flight load may still complete and
    /// deliver one final snapshot.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    /// True once [`cancel`] has been called or the handle dropped.
    ///
    /// [`cancel`]: PollingRefresher::cancel
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

impl Drop for PollingRefresher {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}

/// One tick: reload in an independent task and deliver the snapshot.
fn spawn_tick<S>(storage: S, tx: mpsc::Sender<Snapshot>)
where
    S: Storage + Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        match load_snapshot(storage).await {
            Ok(snapshot) => {
                // try_send drops the snapshot when the consumer is behind.
                let _ = tx.try_send(snapshot);
            }
            Err(e) => warn!(error = %e, "refresh tick failed"),
        }
    });
}

async fn load_snapshot<S: Storage>(storage: S) -> Result<Snapshot> {
    let mut store = NoteStore::new(storage);
    store.load().await?;
    Ok(Snapshot {
        notes: store.notes(),
        deleted_notes: store.deleted_notes(),
    })
}

#[cfg(test)]
#[path = "refresh_tests.rs"]
mod tests;
