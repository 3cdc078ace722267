// ABOUTME: Test utilities for database operations and in-memory test database creation
// ABOUTME: Provides a helper for creating isolated test database instances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Setlog Contributors

use super::Database;
use crate::errors::AppResult;

/// Create a test database instance
///
/// # Errors
///
/// Returns an error if database initialization fails
pub async fn create_test_db() -> AppResult<Database> {
    // A plain in-memory database - each connection gets its own isolated instance
    Database::new("sqlite::memory:").await
}
