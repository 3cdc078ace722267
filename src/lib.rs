// ABOUTME: Main library entry point for the setlog data layer
// ABOUTME: Local-first storage, derived read models, and view invalidation for a fitness app
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Setlog Contributors

#![deny(unsafe_code)]

//! # Setlog
//!
//! The local data layer of a personal fitness-tracking app: users log
//! exercise sets (weight, unit, date, optional note), browse a calendar of
//! past activity, follow a fixed 30-day program, and track streaks and
//! personal records. Everything here is local to one device and one
//! process; there is no sync, auth, or server component.
//!
//! ## Architecture
//!
//! - **Models**: exercises, log entries, weight units, program progress
//! - **Database**: SQLite-backed repositories plus a durable key-value
//!   area, with idempotent migration and catalog seeding
//! - **Catalog / Program**: immutable content tables (seed exercises, the
//!   30-day program) and their display lookup tables
//! - **State**: injectable version counters and session-only UI state
//! - **App**: the facade the UI calls - startup hook, write-boundary
//!   validation, and mutation functions that bump version counters
//!
//! ## Example
//!
//! ```rust,no_run
//! use setlog::app::App;
//! use setlog::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let app = App::start("sqlite:fitness.db").await?;
//!     let streak = app.database().streak_days().await?;
//!     println!("current streak: {streak} days");
//!     Ok(())
//! }
//! ```

/// The application facade: startup hook, mutations, session save flows
pub mod app;

/// The fixed exercise catalog and category display attributes
pub mod catalog;

/// SQLite persistence: repositories and the durable key-value area
pub mod database;

/// Unified error handling
pub mod errors;

/// Core domain types
pub mod models;

/// The immutable 30-day workout program
pub mod program;

/// Version counters and session-only UI state
pub mod state;
