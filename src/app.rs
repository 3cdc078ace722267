// ABOUTME: The App facade the UI layer calls into
// ABOUTME: Startup hook, write-boundary validation, version bumps, and the session save flows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Setlog Contributors

//! # Application Facade
//!
//! [`App`] owns the database and the shared state, and is the write
//! boundary: weight validation happens here, and every mutation bumps the
//! matching version counter after its write commits. Callers never need to
//! invalidate manually after a mutation.
//!
//! Queries that return plain data (entries for a date, history, streak, …)
//! are reached through [`App::database`].

use crate::catalog;
use crate::database::entries::{insert_log_entry, local_millis};
use crate::database::progress::{
    decode_or_default, encode, kv_get, kv_upsert, COMPLETED_DAYS_KEY, DATE_DAY_MAP_KEY,
};
use crate::database::{CreateExerciseRequest, Database};
use crate::errors::{AppError, AppResult};
use crate::models::{Exercise, ExerciseCategory, ExerciseRef, LogEntry, NewLogEntry, WeightUnit};
use crate::state::AppState;
use chrono::{Duration, Local, NaiveDate, NaiveTime};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// One row of a program-day workout session: the exercise and the weight
/// the user entered for it
#[derive(Debug, Clone)]
pub struct SessionSet {
    /// The exercise this set belongs to; program exercises without a
    /// catalog row use [`ExerciseRef::Inline`]
    pub exercise: ExerciseRef,
    /// Entered weight, must be positive
    pub weight: f64,
    /// Unit the weight was entered in
    pub unit: WeightUnit,
}

/// The data layer's entry point. Cheap to clone; clones share the same
/// database pool and state.
#[derive(Clone)]
pub struct App {
    db: Database,
    state: Arc<AppState>,
}

impl App {
    /// Startup hook: open the database, run migrations, seed the catalog,
    /// and load durable program progress into the in-memory state. No
    /// query is safe to call before this completes.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated
    pub async fn start(database_url: &str) -> AppResult<Self> {
        let db = Database::new(database_url).await?;
        let state = Arc::new(AppState::new());

        let progress = db.program_progress().await;
        info!(
            completed_days = progress.completed_days.len(),
            "loaded program progress"
        );
        state.load_progress(progress).await;

        Ok(Self { db, state })
    }

    /// The underlying database, for read queries
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.db
    }

    /// The shared state: version counters and session-only UI state
    #[must_use]
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    // ========================================================================
    // Exercise mutations
    // ========================================================================

    /// Create a user exercise. The id embeds the creation timestamp so ids
    /// are never reused, and the image key is derived from the category.
    ///
    /// # Errors
    ///
    /// Returns an already-exists error on a duplicate id, or a database
    /// error otherwise
    pub async fn create_exercise(
        &self,
        name: &str,
        category: ExerciseCategory,
    ) -> AppResult<Exercise> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("Exercise name must not be empty"));
        }

        let request = CreateExerciseRequest {
            id: catalog::user_exercise_id(name),
            name: name.to_string(),
            category,
            image_key: catalog::user_exercise_image_key(category),
        };

        let exercise = self.db.create_exercise(&request).await?;
        self.state.exercises_version().bump();
        Ok(exercise)
    }

    /// Set the favorite flag on an exercise
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails
    pub async fn set_favorite(&self, id: &str, is_favorite: bool) -> AppResult<()> {
        self.db.set_favorite(id, is_favorite).await?;
        self.state.exercises_version().bump();
        Ok(())
    }

    /// Delete an exercise and its log entries. Both counters bump: the
    /// cascade changes entries too.
    ///
    /// # Errors
    ///
    /// Returns an error if the cascade cannot commit
    pub async fn delete_exercise(&self, id: &str) -> AppResult<()> {
        self.db.delete_exercise(id).await?;
        self.state.exercises_version().bump();
        self.state.entries_version().bump();
        Ok(())
    }

    // ========================================================================
    // Log-entry mutations
    // ========================================================================

    /// Log one set: the entry's date is the given calendar date, its
    /// time-of-day is the wall clock at save time.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error unless `weight` is a positive finite
    /// number; this is the write boundary for the `weight > 0` invariant
    pub async fn log_set(
        &self,
        date: NaiveDate,
        exercise: ExerciseRef,
        weight: f64,
        unit: WeightUnit,
        note: Option<String>,
    ) -> AppResult<LogEntry> {
        validate_weight(weight)?;

        let entry = self
            .db
            .add_entry(NewLogEntry {
                date_time: compose_entry_timestamp(date, Local::now().time(), 0),
                exercise,
                weight,
                unit,
                note,
            })
            .await?;

        self.state.entries_version().bump();
        Ok(entry)
    }

    /// Log a Pilates session. This is the only path that stores the
    /// `weight = 0` sentinel; an optional session link is kept in the note.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn log_pilates_session(
        &self,
        date: NaiveDate,
        link: Option<String>,
    ) -> AppResult<LogEntry> {
        let entry = self
            .db
            .add_entry(NewLogEntry {
                date_time: compose_entry_timestamp(date, Local::now().time(), 0),
                exercise: ExerciseRef::Catalog {
                    id: "pilates".to_string(),
                },
                weight: 0.0,
                unit: self.state.unit().await,
                note: link.filter(|l| !l.trim().is_empty()),
            })
            .await?;

        self.state.entries_version().bump();
        Ok(entry)
    }

    /// Edit an entry's weight, unit, and note. A missing id stays a silent
    /// no-op, matching the repository contract; a no-op does not bump the
    /// entries counter, so consumers never re-query over nothing.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a non-positive weight, or a
    /// database error if the update fails
    pub async fn update_entry(
        &self,
        id: &str,
        weight: f64,
        unit: WeightUnit,
        note: Option<&str>,
    ) -> AppResult<()> {
        validate_weight(weight)?;
        let affected = self.db.update_entry(id, weight, unit, note).await?;
        if affected > 0 {
            self.state.entries_version().bump();
        }
        Ok(())
    }

    /// Delete an entry (idempotent)
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete_entry(&self, id: &str) -> AppResult<()> {
        self.db.delete_entry(id).await?;
        self.state.entries_version().bump();
        Ok(())
    }

    // ========================================================================
    // Program progress
    // ========================================================================

    /// Mark a program day completed, in the durable store and the mirror
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a day outside 1..=30, or a
    /// storage error if the write fails
    pub async fn mark_day_completed(&self, day: u32) -> AppResult<()> {
        validate_program_day(day)?;
        self.db.mark_day_completed(day).await?;
        self.state.add_completed_day(day).await;
        Ok(())
    }

    /// Record which program day was logged on a calendar date
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a day outside 1..=30, or a
    /// storage error if the write fails
    pub async fn set_date_day(&self, date: NaiveDate, day: u32) -> AppResult<()> {
        validate_program_day(day)?;
        let date_str = date.format("%Y-%m-%d").to_string();
        self.db.set_date_day(&date_str, day).await?;
        self.state.set_date_day(&date_str, day).await;
        Ok(())
    }

    /// Clear all program progress. Log entries are untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the durable clear fails
    pub async fn reset_progress(&self) -> AppResult<()> {
        self.db.reset_progress().await?;
        self.state.clear_progress().await;
        Ok(())
    }

    // ========================================================================
    // Workout-session save flow
    // ========================================================================

    /// Save a full program-day session: one entry per set, the day marked
    /// completed, and the date-to-day mapping recorded - all in a single
    /// transaction. A crash mid-save never leaves partial state.
    ///
    /// Entry timestamps are offset by one second per set so the session
    /// replays in order.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if `day` is out of range or no set
    /// has a positive weight, or a database error if the transaction
    /// cannot commit
    pub async fn save_program_session(
        &self,
        date: NaiveDate,
        day: u32,
        sets: Vec<SessionSet>,
    ) -> AppResult<Vec<LogEntry>> {
        validate_program_day(day)?;

        let sets: Vec<SessionSet> = sets
            .into_iter()
            .filter(|s| s.weight.is_finite() && s.weight > 0.0)
            .collect();
        if sets.is_empty() {
            return Err(AppError::invalid_input(
                "A session needs at least one set with a positive weight",
            ));
        }

        let date_str = date.format("%Y-%m-%d").to_string();
        let time_of_day = Local::now().time();

        let mut tx = self
            .db
            .pool()
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin session save: {e}")))?;

        let mut saved = Vec::with_capacity(sets.len());
        for (i, set) in sets.into_iter().enumerate() {
            let entry = LogEntry {
                id: Uuid::new_v4().to_string(),
                date_time: compose_entry_timestamp(date, time_of_day, i as i64),
                exercise: set.exercise,
                weight: set.weight,
                unit: set.unit,
                note: None,
            };
            insert_log_entry(&mut *tx, &entry).await?;
            saved.push(entry);
        }

        let mut completed: BTreeSet<u32> =
            decode_or_default(kv_get(&mut *tx, COMPLETED_DAYS_KEY).await?, COMPLETED_DAYS_KEY);
        if completed.insert(day) {
            let value = encode(&completed)?;
            kv_upsert(&mut *tx, COMPLETED_DAYS_KEY, &value).await?;
        }

        let mut map: HashMap<String, u32> =
            decode_or_default(kv_get(&mut *tx, DATE_DAY_MAP_KEY).await?, DATE_DAY_MAP_KEY);
        map.insert(date_str.clone(), day);
        let value = encode(&map)?;
        kv_upsert(&mut *tx, DATE_DAY_MAP_KEY, &value).await?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit session save: {e}")))?;

        self.state.add_completed_day(day).await;
        self.state.set_date_day(&date_str, day).await;
        self.state.entries_version().bump();

        info!(day, sets = saved.len(), "saved program session");
        Ok(saved)
    }
}

/// Write-boundary validation for logged weights
fn validate_weight(weight: f64) -> AppResult<()> {
    if weight.is_finite() && weight > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "Weight must be a positive number, got {weight}"
        )))
    }
}

fn validate_program_day(day: u32) -> AppResult<()> {
    if (1..=30).contains(&day) {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "Program day must be within 1..=30, got {day}"
        )))
    }
}

/// Combine a user-selected calendar date with a wall-clock time-of-day into
/// epoch milliseconds, local-time semantics. `offset_secs` keeps multi-set
/// sessions ordered.
fn compose_entry_timestamp(date: NaiveDate, time_of_day: NaiveTime, offset_secs: i64) -> i64 {
    local_millis(date.and_time(time_of_day) + Duration::seconds(offset_secs))
}
