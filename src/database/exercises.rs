// ABOUTME: Exercise repository over the exercises table
// ABOUTME: CRUD, favorite toggling, and the cascading delete into log entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Setlog Contributors

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{Exercise, ExerciseCategory};
use sqlx::{sqlite::SqliteRow, Row};
use tracing::debug;

/// Request to create a user exercise. Favorite state is not part of the
/// request; new exercises always start unfavorited.
#[derive(Debug, Clone)]
pub struct CreateExerciseRequest {
    /// Stable identifier (slug, or slug + creation timestamp for user rows)
    pub id: String,
    /// Display name
    pub name: String,
    /// Category
    pub category: ExerciseCategory,
    /// Image lookup key
    pub image_key: String,
}

impl Database {
    /// List all exercises, favorites first, then name ascending
    /// (case-insensitive). The catalog is small; no pagination.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_all_exercises(&self) -> AppResult<Vec<Exercise>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, category, image_key, is_favorite
            FROM exercises
            ORDER BY is_favorite DESC, name COLLATE NOCASE ASC
            ",
        )
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to list exercises: {e}")))?;

        Ok(rows.iter().map(row_to_exercise).collect())
    }

    /// Get an exercise by id. Absence is a normal outcome, not an error:
    /// denormalized log entries may reference ids with no catalog row.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_exercise_by_id(&self, id: &str) -> AppResult<Option<Exercise>> {
        let row = sqlx::query(
            r"
            SELECT id, name, category, image_key, is_favorite
            FROM exercises
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to get exercise: {e}")))?;

        Ok(row.as_ref().map(row_to_exercise))
    }

    /// Create an exercise. Fails with a constraint violation if the id
    /// already exists.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::ResourceAlreadyExists`] on a
    /// duplicate id, or a database error otherwise
    pub async fn create_exercise(&self, request: &CreateExerciseRequest) -> AppResult<Exercise> {
        sqlx::query(
            r"
            INSERT INTO exercises (id, name, category, image_key, is_favorite)
            VALUES (?1, ?2, ?3, ?4, 0)
            ",
        )
        .bind(&request.id)
        .bind(&request.name)
        .bind(request.category.as_str())
        .bind(&request.image_key)
        .execute(self.pool())
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::already_exists(format!("Exercise {}", request.id))
            }
            _ => AppError::database(format!("Failed to create exercise: {e}")),
        })?;

        Ok(Exercise {
            id: request.id.clone(),
            name: request.name.clone(),
            category: request.category,
            image_key: request.image_key.clone(),
            is_favorite: false,
        })
    }

    /// Set the favorite flag on an exercise. Idempotent; a missing id is a
    /// silent no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails
    pub async fn set_favorite(&self, id: &str, is_favorite: bool) -> AppResult<()> {
        sqlx::query("UPDATE exercises SET is_favorite = ?1 WHERE id = ?2")
            .bind(i32::from(is_favorite))
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to set favorite: {e}")))?;

        Ok(())
    }

    /// Delete an exercise and every log entry referencing it, atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot commit; partial state is
    /// never left behind
    pub async fn delete_exercise(&self, id: &str) -> AppResult<()> {
        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let entries = sqlx::query("DELETE FROM log_entries WHERE exercise_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete log entries: {e}")))?;

        sqlx::query("DELETE FROM exercises WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete exercise: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit cascade delete: {e}")))?;

        debug!(
            exercise_id = id,
            cascaded = entries.rows_affected(),
            "deleted exercise"
        );

        Ok(())
    }
}

fn row_to_exercise(row: &SqliteRow) -> Exercise {
    Exercise {
        id: row.get("id"),
        name: row.get("name"),
        category: ExerciseCategory::parse(row.get::<String, _>("category").as_str()),
        image_key: row.get("image_key"),
        is_favorite: row.get::<i64, _>("is_favorite") == 1,
    }
}
