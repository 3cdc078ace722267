// ABOUTME: Database management for the setlog data layer
// ABOUTME: Owns the SQLite pool, idempotent schema migration, and catalog seeding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Setlog Contributors

//! # Database Management
//!
//! This module provides the persistent store: two relational tables
//! (`exercises`, `log_entries`) plus a small durable key-value area
//! (`app_state`) used by the program-progress tracker. Schema creation and
//! the additive column migration are idempotent and safe to run on every
//! startup.

pub(crate) mod entries;
mod exercises;
pub(crate) mod progress;
pub mod test_utils;

pub use exercises::CreateExerciseRequest;

use crate::catalog::SEED_EXERCISES;
use crate::errors::{AppError, AppResult};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use tracing::{debug, info};

/// Database manager for exercise, log-entry, and program-progress storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection, run migrations, and seed the
    /// exercise catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection, migration, or seeding fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:")
            && !database_url.contains("::memory:")
            && !database_url.contains('?')
        {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        // Single logical writer: one connection serializes all statements,
        // and keeps in-memory databases stable across queries.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(&connection_options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect: {e}")))?;

        let db = Self { pool };

        db.migrate().await?;
        db.seed_catalog().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations. Idempotent; safe on every startup.
    ///
    /// # Errors
    ///
    /// Returns an error if schema creation fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_exercises().await?;
        self.migrate_log_entries().await?;
        self.migrate_app_state().await?;
        debug!("database schema ready");
        Ok(())
    }

    /// Create the exercises table
    async fn migrate_exercises(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id          TEXT PRIMARY KEY NOT NULL,
                name        TEXT NOT NULL,
                category    TEXT NOT NULL,
                image_key   TEXT NOT NULL,
                is_favorite INTEGER NOT NULL DEFAULT 0
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create exercises table: {e}")))?;

        Ok(())
    }

    /// Create the log_entries table and its indexes
    async fn migrate_log_entries(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS log_entries (
                id            TEXT PRIMARY KEY NOT NULL,
                date_time     INTEGER NOT NULL,
                exercise_id   TEXT NOT NULL,
                exercise_name TEXT,
                weight        REAL NOT NULL,
                unit          TEXT NOT NULL DEFAULT 'kg',
                note          TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create log_entries table: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_log_entries_date_time ON log_entries(date_time)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create date_time index: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_log_entries_exercise_id ON log_entries(exercise_id)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create exercise_id index: {e}")))?;

        // Additive migration for installations that predate the denormalized
        // exercise name. SQLite has no ADD COLUMN IF NOT EXISTS; the error on
        // an already-present column is expected and tolerated.
        if let Err(e) = sqlx::query("ALTER TABLE log_entries ADD COLUMN exercise_name TEXT")
            .execute(&self.pool)
            .await
        {
            debug!("exercise_name column migration skipped: {e}");
        }

        Ok(())
    }

    /// Create the key-value table backing program progress
    async fn migrate_app_state(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS app_state (
                key        TEXT PRIMARY KEY NOT NULL,
                value      TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create app_state table: {e}")))?;

        Ok(())
    }

    /// Insert each catalog exercise unless its id already exists. Never
    /// overwrites user edits (favorite toggles survive a re-seed).
    ///
    /// # Errors
    ///
    /// Returns an error if an insert fails
    pub async fn seed_catalog(&self) -> AppResult<()> {
        let mut inserted = 0_u64;
        for ex in SEED_EXERCISES {
            let result = sqlx::query(
                r"
                INSERT OR IGNORE INTO exercises (id, name, category, image_key, is_favorite)
                VALUES (?1, ?2, ?3, ?4, 0)
                ",
            )
            .bind(ex.id)
            .bind(ex.name)
            .bind(ex.category.as_str())
            .bind(ex.image_key)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to seed exercise {}: {e}", ex.id)))?;

            inserted += result.rows_affected();
        }

        if inserted > 0 {
            info!(inserted, "seeded exercise catalog");
        }

        Ok(())
    }
}
