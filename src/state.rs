// ABOUTME: View-invalidation bus and session-only UI state
// ABOUTME: Version counters consumers subscribe to, plus the in-memory progress mirror
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Setlog Contributors

//! # View-Invalidation Bus
//!
//! A process-wide set of monotonically increasing version counters, one per
//! logical resource. Every mutation that changes persisted entries or
//! exercises bumps the matching counter after the write commits; consumers
//! treat "counter changed" as "re-run my query". There is no per-row
//! subscription.
//!
//! The state is an explicit injectable container rather than an ambient
//! global, so tests construct isolated instances.

use crate::models::{ProgramProgress, WeightUnit};
use chrono::{Local, NaiveDate};
use tokio::sync::{watch, RwLock};

/// A monotonically increasing version counter with push-style subscription
#[derive(Debug)]
pub struct VersionCounter {
    tx: watch::Sender<u64>,
}

impl VersionCounter {
    fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx }
    }

    /// The current version
    #[must_use]
    pub fn current(&self) -> u64 {
        *self.tx.borrow()
    }

    /// Increment the version, waking all subscribers
    pub fn bump(&self) {
        self.tx.send_modify(|v| *v += 1);
    }

    /// Subscribe to version changes. The receiver observes the latest
    /// version only; intermediate bumps may be coalesced, which is
    /// sufficient for "re-run my query" semantics.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }
}

/// Shared application state: the invalidation counters and the small
/// session-only UI state (selected calendar date, preferred unit, in-memory
/// mirror of durable program progress).
///
/// Constructed once at startup by [`crate::app::App::start`], which loads
/// the durable program-progress copy into the mirror before any query runs.
pub struct AppState {
    entries_version: VersionCounter,
    exercises_version: VersionCounter,
    selected_date: RwLock<NaiveDate>,
    unit: RwLock<WeightUnit>,
    progress: RwLock<ProgramProgress>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create state with today selected, kilograms preferred, and empty
    /// progress
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries_version: VersionCounter::new(),
            exercises_version: VersionCounter::new(),
            selected_date: RwLock::new(Local::now().date_naive()),
            unit: RwLock::new(WeightUnit::default()),
            progress: RwLock::new(ProgramProgress::default()),
        }
    }

    /// Counter bumped on every log-entry mutation
    #[must_use]
    pub const fn entries_version(&self) -> &VersionCounter {
        &self.entries_version
    }

    /// Counter bumped on every exercise mutation
    #[must_use]
    pub const fn exercises_version(&self) -> &VersionCounter {
        &self.exercises_version
    }

    /// The calendar date currently selected in the UI
    pub async fn selected_date(&self) -> NaiveDate {
        *self.selected_date.read().await
    }

    /// Select a calendar date
    pub async fn set_selected_date(&self, date: NaiveDate) {
        *self.selected_date.write().await = date;
    }

    /// The preferred display unit
    pub async fn unit(&self) -> WeightUnit {
        *self.unit.read().await
    }

    /// Flip the preferred display unit and return the new value
    pub async fn toggle_unit(&self) -> WeightUnit {
        let mut unit = self.unit.write().await;
        *unit = unit.toggled();
        *unit
    }

    /// Snapshot of the in-memory program-progress mirror
    pub async fn progress(&self) -> ProgramProgress {
        self.progress.read().await.clone()
    }

    /// Replace the mirror wholesale (startup load)
    pub async fn load_progress(&self, progress: ProgramProgress) {
        *self.progress.write().await = progress;
    }

    /// Mirror a completed program day
    pub async fn add_completed_day(&self, day: u32) {
        self.progress.write().await.completed_days.insert(day);
    }

    /// Mirror a date-to-day mapping
    pub async fn set_date_day(&self, date: &str, day: u32) {
        self.progress
            .write()
            .await
            .date_day_map
            .insert(date.to_string(), day);
    }

    /// Clear the mirror (progress reset)
    pub async fn clear_progress(&self) {
        *self.progress.write().await = ProgramProgress::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bump_is_monotonic_and_observable() {
        let state = AppState::new();
        let mut rx = state.entries_version().subscribe();
        assert_eq!(state.entries_version().current(), 0);

        state.entries_version().bump();
        state.entries_version().bump();

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 2);
        assert_eq!(state.entries_version().current(), 2);
        // The other counter is untouched
        assert_eq!(state.exercises_version().current(), 0);
    }

    #[tokio::test]
    async fn unit_toggle_flips_between_kg_and_lb() {
        let state = AppState::new();
        assert_eq!(state.unit().await, WeightUnit::Kg);
        assert_eq!(state.toggle_unit().await, WeightUnit::Lb);
        assert_eq!(state.toggle_unit().await, WeightUnit::Kg);
    }

    #[tokio::test]
    async fn progress_mirror_updates_are_cumulative() {
        let state = AppState::new();
        state.add_completed_day(5).await;
        state.add_completed_day(5).await;
        state.set_date_day("2025-08-26", 5).await;

        let progress = state.progress().await;
        assert_eq!(progress.completed_days.len(), 1);
        assert_eq!(progress.date_day_map.get("2025-08-26"), Some(&5));

        state.clear_progress().await;
        assert_eq!(state.progress().await, ProgramProgress::default());
    }
}
