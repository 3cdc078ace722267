// ABOUTME: Log-entry repository and its derived read models
// ABOUTME: Date-window queries, last-used weight, personal record, history, streak
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Setlog Contributors

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{ExerciseRef, LogEntry, NewLogEntry, WeightRecord, WeightUnit};
use chrono::{DateTime, Days, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use sqlx::{sqlite::SqliteRow, Row};
use std::collections::BTreeSet;
use uuid::Uuid;

/// How many distinct calendar days the streak computation looks back
const STREAK_LOOKBACK_DAYS: u64 = 365;

/// Maximum number of rows returned by the per-exercise history query
const HISTORY_LIMIT: i64 = 50;

impl Database {
    /// All entries whose timestamp falls within `[00:00:00.000,
    /// 23:59:59.999]` local time of the given calendar date, ascending by
    /// timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn entries_for_date(&self, date: NaiveDate) -> AppResult<Vec<LogEntry>> {
        let (start, end) = local_day_bounds(date);

        let rows = sqlx::query(
            r"
            SELECT id, date_time, exercise_id, exercise_name, weight, unit, note
            FROM log_entries
            WHERE date_time >= ?1 AND date_time <= ?2
            ORDER BY date_time ASC
            ",
        )
        .bind(start)
        .bind(end)
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to get entries for date: {e}")))?;

        Ok(rows.iter().map(row_to_log_entry).collect())
    }

    /// Distinct calendar dates (`YYYY-MM-DD`, local time) with at least one
    /// entry in the given month, sorted ascending. Used to paint calendar
    /// dots.
    ///
    /// `month` is 1-based (January = 1), matching chrono's convention.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for an out-of-range month, or a
    /// database error if the query fails
    pub async fn dates_with_entries(&self, year: i32, month: u32) -> AppResult<Vec<String>> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| AppError::invalid_input(format!("Invalid month: {year}-{month}")))?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(|| AppError::invalid_input(format!("Invalid month: {year}-{month}")))?;
        let last = next_month.pred_opt().unwrap_or(first);

        let (start, _) = local_day_bounds(first);
        let (_, end) = local_day_bounds(last);

        let rows = sqlx::query(
            "SELECT DISTINCT date_time FROM log_entries WHERE date_time >= ?1 AND date_time <= ?2",
        )
        .bind(start)
        .bind(end)
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to get dates with entries: {e}")))?;

        let dates: BTreeSet<String> = rows
            .iter()
            .filter_map(|row| local_date_of_millis(row.get("date_time")))
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect();

        Ok(dates.into_iter().collect())
    }

    /// Weight and unit of the most recent entry for an exercise, used to
    /// pre-fill new entries. Absent if the exercise has never been logged.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn last_used_weight(&self, exercise_id: &str) -> AppResult<Option<WeightRecord>> {
        let row = sqlx::query(
            r"
            SELECT weight, unit FROM log_entries
            WHERE exercise_id = ?1
            ORDER BY date_time DESC
            LIMIT 1
            ",
        )
        .bind(exercise_id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to get last used weight: {e}")))?;

        Ok(row.as_ref().map(row_to_weight_record))
    }

    /// The maximum weight ever logged for an exercise. Ties are broken
    /// arbitrarily. Absent if the exercise has never been logged.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn personal_record(&self, exercise_id: &str) -> AppResult<Option<WeightRecord>> {
        let row = sqlx::query(
            r"
            SELECT weight, unit FROM log_entries
            WHERE exercise_id = ?1
            ORDER BY weight DESC
            LIMIT 1
            ",
        )
        .bind(exercise_id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to get personal record: {e}")))?;

        Ok(row.as_ref().map(row_to_weight_record))
    }

    /// Up to 50 most recent entries for an exercise, descending by
    /// timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn history_for_exercise(&self, exercise_id: &str) -> AppResult<Vec<LogEntry>> {
        let rows = sqlx::query(
            r"
            SELECT id, date_time, exercise_id, exercise_name, weight, unit, note
            FROM log_entries
            WHERE exercise_id = ?1
            ORDER BY date_time DESC
            LIMIT ?2
            ",
        )
        .bind(exercise_id)
        .bind(HISTORY_LIMIT)
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to get exercise history: {e}")))?;

        Ok(rows.iter().map(row_to_log_entry).collect())
    }

    /// Persist a new entry and return it with its generated id.
    ///
    /// No weight validation happens here: the write boundary upstream
    /// enforces `weight > 0`, except for the Pilates flow which
    /// deliberately stores the `0` sentinel.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn add_entry(&self, entry: NewLogEntry) -> AppResult<LogEntry> {
        let entry = LogEntry {
            id: Uuid::new_v4().to_string(),
            date_time: entry.date_time,
            exercise: entry.exercise,
            weight: entry.weight,
            unit: entry.unit,
            note: entry.note,
        };

        insert_log_entry(self.pool(), &entry).await?;

        Ok(entry)
    }

    /// Replace the mutable fields of an entry and return how many rows
    /// changed. A missing id is a silent no-op (zero rows affected, no
    /// error); callers use the count to skip view invalidation for no-ops.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails
    pub async fn update_entry(
        &self,
        id: &str,
        weight: f64,
        unit: WeightUnit,
        note: Option<&str>,
    ) -> AppResult<u64> {
        let result =
            sqlx::query("UPDATE log_entries SET weight = ?1, unit = ?2, note = ?3 WHERE id = ?4")
                .bind(weight)
                .bind(unit.as_str())
                .bind(note)
                .bind(id)
                .execute(self.pool())
                .await
                .map_err(|e| AppError::database(format!("Failed to update entry: {e}")))?;

        Ok(result.rows_affected())
    }

    /// Delete an entry. Idempotent; deleting a non-existent id is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete_entry(&self, id: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM log_entries WHERE id = ?1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to delete entry: {e}")))?;

        Ok(())
    }

    /// Count of consecutive calendar days with at least one entry, ending
    /// today or yesterday. A day without entries breaks the chain, but the
    /// streak tolerates exactly one day of lag: a chain ending yesterday
    /// still counts until the end of today.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn streak_days(&self) -> AppResult<u32> {
        self.streak_days_from(Local::now().date_naive()).await
    }

    /// Streak computation with an explicit "today", so tests can pin the
    /// current date.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn streak_days_from(&self, today: NaiveDate) -> AppResult<u32> {
        let cutoff_date = today
            .checked_sub_days(Days::new(STREAK_LOOKBACK_DAYS))
            .unwrap_or(today);
        let (cutoff, _) = local_day_bounds(cutoff_date);

        // Collapse timestamps to distinct local dates in SQL so a heavy
        // year of logging still fetches at most the lookback's row count.
        let rows = sqlx::query(
            r"
            SELECT DISTINCT date(date_time / 1000, 'unixepoch', 'localtime') AS day
            FROM log_entries
            WHERE date_time >= ?1
            ORDER BY day DESC
            LIMIT ?2
            ",
        )
        .bind(cutoff)
        .bind(i64::try_from(STREAK_LOOKBACK_DAYS).unwrap_or(i64::MAX))
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to get streak dates: {e}")))?;

        let mut streak = 0_u32;
        let mut cursor = today;
        for row in &rows {
            let day: String = row.get("day");
            let Ok(date) = NaiveDate::parse_from_str(&day, "%Y-%m-%d") else {
                break;
            };
            let gap = (cursor - date).num_days();
            if gap == 0 || gap == 1 {
                streak += 1;
                cursor = date;
            } else {
                break;
            }
        }

        Ok(streak)
    }
}

/// Insert an entry through any executor (pool, or a transaction for the
/// multi-row program-session save)
pub(crate) async fn insert_log_entry<'e, E>(executor: E, entry: &LogEntry) -> AppResult<()>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    sqlx::query(
        r"
        INSERT INTO log_entries (id, date_time, exercise_id, exercise_name, weight, unit, note)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        ",
    )
    .bind(&entry.id)
    .bind(entry.date_time)
    .bind(entry.exercise.storage_id())
    .bind(entry.exercise.inline_name())
    .bind(entry.weight)
    .bind(entry.unit.as_str())
    .bind(entry.note.as_deref())
    .execute(executor)
    .await
    .map_err(|e| AppError::database(format!("Failed to insert entry: {e}")))?;

    Ok(())
}

fn row_to_log_entry(row: &SqliteRow) -> LogEntry {
    let exercise_name: Option<String> = row.get("exercise_name");
    let exercise = exercise_name.map_or_else(
        || ExerciseRef::Catalog {
            id: row.get("exercise_id"),
        },
        |name| ExerciseRef::Inline { name },
    );

    LogEntry {
        id: row.get("id"),
        date_time: row.get("date_time"),
        exercise,
        weight: row.get("weight"),
        unit: WeightUnit::parse(row.get::<String, _>("unit").as_str()),
        note: row.get("note"),
    }
}

fn row_to_weight_record(row: &SqliteRow) -> WeightRecord {
    WeightRecord {
        weight: row.get("weight"),
        unit: WeightUnit::parse(row.get::<String, _>("unit").as_str()),
    }
}

// ============================================================================
// Local-time window arithmetic
// ============================================================================

/// Epoch-millisecond bounds of a calendar date in local time:
/// `[00:00:00.000, 23:59:59.999]` inclusive. The end bound carries the
/// full millisecond precision entries are written with, so a set saved
/// during the final second of a day stays inside its own window.
pub(crate) fn local_day_bounds(date: NaiveDate) -> (i64, i64) {
    let start = date.and_hms_opt(0, 0, 0).map_or(0, local_millis);
    let end = date.and_hms_milli_opt(23, 59, 59, 999).map_or(0, local_millis);
    (start, end)
}

/// Interpret a naive local datetime as epoch milliseconds. DST gaps fall
/// back to the UTC interpretation; ambiguous times take the earlier
/// offset.
pub(crate) fn local_millis(ndt: NaiveDateTime) -> i64 {
    Local
        .from_local_datetime(&ndt)
        .earliest()
        .map_or_else(|| ndt.and_utc().timestamp_millis(), |dt| dt.timestamp_millis())
}

/// Local calendar date of an epoch-millisecond timestamp
pub(crate) fn local_date_of_millis(millis: i64) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&Local).date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_bounds_cover_exactly_one_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let (start, end) = local_day_bounds(date);
        assert_eq!(end - start, 86_400 * 1000 - 1);
        assert_eq!(local_date_of_millis(start), Some(date));
        assert_eq!(local_date_of_millis(end), Some(date));
        // The next day starts exactly one millisecond later
        let (next_start, _) = local_day_bounds(date.succ_opt().unwrap());
        assert_eq!(next_start, end + 1);
    }

    #[test]
    fn millis_round_trip_preserves_local_date() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let noon = date.and_hms_opt(12, 0, 0).unwrap();
        assert_eq!(local_date_of_millis(local_millis(noon)), Some(date));
    }
}
