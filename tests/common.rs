// ABOUTME: Shared test utilities for the integration test suite
// ABOUTME: Installs quiet tracing output once and builds in-memory test databases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Setlog Contributors

#![allow(dead_code, missing_docs, clippy::unwrap_used)]

use setlog::database::{test_utils, Database};
use setlog::errors::AppResult;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process).
/// Set `TEST_LOG=DEBUG` (or `TRACE`/`INFO`) to turn test output up.
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// In-memory test database with logging installed
pub async fn create_test_db() -> AppResult<Database> {
    init_test_logging();
    test_utils::create_test_db().await
}
