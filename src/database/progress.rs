// ABOUTME: Program-progress tracker over the durable key-value area
// ABOUTME: Completed-day set and date-to-day map, with failure-tolerant reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Setlog Contributors

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::ProgramProgress;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::Row;
use std::collections::{BTreeSet, HashMap};
use tracing::warn;

/// Key holding the JSON array of completed program days
pub const COMPLETED_DAYS_KEY: &str = "program_completed_days";

/// Key holding the JSON date-to-day map
pub const DATE_DAY_MAP_KEY: &str = "program_date_day_map";

impl Database {
    /// The set of completed program days. Missing or corrupted storage
    /// degrades to the empty set rather than erroring, so the app stays
    /// usable.
    pub async fn completed_days(&self) -> BTreeSet<u32> {
        self.kv_read_or_default(COMPLETED_DAYS_KEY).await
    }

    /// Mark a program day completed. Idempotent: a day is added at most
    /// once.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn mark_day_completed(&self, day: u32) -> AppResult<()> {
        let mut days = self.completed_days().await;
        if days.insert(day) {
            let value = encode(&days)?;
            kv_upsert(self.pool(), COMPLETED_DAYS_KEY, &value).await?;
        }
        Ok(())
    }

    /// The date-to-program-day mapping, with the same failure-tolerant
    /// default as [`Database::completed_days`].
    pub async fn date_day_map(&self) -> HashMap<String, u32> {
        self.kv_read_or_default(DATE_DAY_MAP_KEY).await
    }

    /// Record which program day was logged on a calendar date. Last write
    /// wins per date.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn set_date_day(&self, date: &str, day: u32) -> AppResult<()> {
        let mut map = self.date_day_map().await;
        map.insert(date.to_string(), day);
        let value = encode(&map)?;
        kv_upsert(self.pool(), DATE_DAY_MAP_KEY, &value).await
    }

    /// Clear the completed-day set and the date-to-day map. Log entries
    /// are untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn reset_progress(&self) -> AppResult<()> {
        sqlx::query("DELETE FROM app_state WHERE key IN (?1, ?2)")
            .bind(COMPLETED_DAYS_KEY)
            .bind(DATE_DAY_MAP_KEY)
            .execute(self.pool())
            .await
            .map_err(|e| AppError::storage(format!("Failed to reset progress: {e}")))?;

        Ok(())
    }

    /// Snapshot of both progress values, for the startup state load
    pub async fn program_progress(&self) -> ProgramProgress {
        ProgramProgress {
            completed_days: self.completed_days().await,
            date_day_map: self.date_day_map().await,
        }
    }

    /// Read and decode a key-value entry, degrading to the default on any
    /// read or parse failure
    async fn kv_read_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match kv_get(self.pool(), key).await {
            Ok(raw) => decode_or_default(raw, key),
            Err(e) => {
                warn!(key, "degraded key-value read: {e}");
                T::default()
            }
        }
    }
}

/// Decode a raw key-value payload, degrading to the default on corrupt data
pub(crate) fn decode_or_default<T: DeserializeOwned + Default>(raw: Option<String>, key: &str) -> T {
    raw.map_or_else(T::default, |value| {
        serde_json::from_str(&value).unwrap_or_else(|e| {
            warn!(key, "corrupted key-value data, using default: {e}");
            T::default()
        })
    })
}

/// Encode a progress value as JSON
pub(crate) fn encode<T: Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string(value)
        .map_err(|e| AppError::serialization(format!("Failed to encode progress value: {e}")))
}

/// Fetch a raw key-value entry through any executor
pub(crate) async fn kv_get<'e, E>(executor: E, key: &str) -> AppResult<Option<String>>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    let row = sqlx::query("SELECT value FROM app_state WHERE key = ?1")
        .bind(key)
        .fetch_optional(executor)
        .await
        .map_err(|e| AppError::storage(format!("Failed to read {key}: {e}")))?;

    Ok(row.map(|r| r.get("value")))
}

/// Upsert a raw key-value entry through any executor (pool, or the
/// program-session transaction)
pub(crate) async fn kv_upsert<'e, E>(executor: E, key: &str, value: &str) -> AppResult<()>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    let now = Utc::now().to_rfc3339();

    sqlx::query(
        r"
        INSERT INTO app_state (key, value, updated_at)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(key) DO UPDATE SET
            value = ?2,
            updated_at = ?3
        ",
    )
    .bind(key)
    .bind(value)
    .bind(&now)
    .execute(executor)
    .await
    .map_err(|e| AppError::storage(format!("Failed to write {key}: {e}")))?;

    Ok(())
}
