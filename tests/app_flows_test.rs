// ABOUTME: Integration tests for the App facade
// ABOUTME: Startup, write-boundary validation, version bumps, and the session save flows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Setlog Contributors

#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use chrono::NaiveDate;
use setlog::app::{App, SessionSet};
use setlog::errors::ErrorCode;
use setlog::models::{ExerciseCategory, ExerciseRef, WeightUnit};

async fn start_app() -> App {
    common::init_test_logging();
    App::start("sqlite::memory:").await.unwrap()
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 26).unwrap()
}

#[tokio::test]
async fn startup_seeds_and_loads_state() {
    let app = start_app().await;
    assert!(!app.database().get_all_exercises().await.unwrap().is_empty());
    assert_eq!(app.state().unit().await, WeightUnit::Kg);
    assert!(app.state().progress().await.completed_days.is_empty());
    assert_eq!(app.state().entries_version().current(), 0);
}

#[tokio::test]
async fn log_set_enforces_the_positive_weight_boundary() {
    let app = start_app().await;

    for bad in [0.0, -5.0, f64::NAN] {
        let err = app
            .log_set(
                date(),
                ExerciseRef::Catalog { id: "squat".into() },
                bad,
                WeightUnit::Kg,
                None,
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    // Failed writes never bump the counter
    assert_eq!(app.state().entries_version().current(), 0);
    assert!(app.database().entries_for_date(date()).await.unwrap().is_empty());
}

#[tokio::test]
async fn log_set_persists_and_bumps_the_entries_counter() {
    let app = start_app().await;
    let entry = app
        .log_set(
            date(),
            ExerciseRef::Catalog { id: "squat".into() },
            72.5,
            WeightUnit::Kg,
            Some("warmup skipped".into()),
        )
        .await
        .unwrap();

    assert_eq!(app.state().entries_version().current(), 1);
    let fetched = app.database().entries_for_date(date()).await.unwrap();
    assert_eq!(fetched, vec![entry]);
    // Exercises are untouched by an entry write
    assert_eq!(app.state().exercises_version().current(), 0);
}

#[tokio::test]
async fn pilates_flow_is_the_only_zero_weight_path() {
    let app = start_app().await;
    let entry = app
        .log_pilates_session(date(), Some("https://example.com/flow".into()))
        .await
        .unwrap();

    assert_eq!(entry.weight, 0.0);
    assert_eq!(entry.note.as_deref(), Some("https://example.com/flow"));
    assert_eq!(entry.exercise, ExerciseRef::Catalog { id: "pilates".into() });
    assert_eq!(app.state().entries_version().current(), 1);
}

#[tokio::test]
async fn update_entry_validates_then_bumps() {
    let app = start_app().await;
    let entry = app
        .log_set(
            date(),
            ExerciseRef::Catalog { id: "squat".into() },
            60.0,
            WeightUnit::Kg,
            None,
        )
        .await
        .unwrap();

    let err = app
        .update_entry(&entry.id, -1.0, WeightUnit::Kg, None)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    app.update_entry(&entry.id, 65.0, WeightUnit::Lb, Some("pr attempt"))
        .await
        .unwrap();
    assert_eq!(app.state().entries_version().current(), 2);

    let fetched = app.database().entries_for_date(date()).await.unwrap();
    assert_eq!(fetched[0].weight, 65.0);
    assert_eq!(fetched[0].unit, WeightUnit::Lb);
}

#[tokio::test]
async fn updating_a_missing_entry_does_not_invalidate_views() {
    let app = start_app().await;

    app.update_entry("no_such_id", 50.0, WeightUnit::Kg, None)
        .await
        .unwrap();

    // The silent no-op must not trigger a re-query cycle
    assert_eq!(app.state().entries_version().current(), 0);
}

#[tokio::test]
async fn exercise_mutations_bump_the_exercises_counter() {
    let app = start_app().await;

    let created = app
        .create_exercise("Cable Fly", ExerciseCategory::Push)
        .await
        .unwrap();
    assert!(created.id.starts_with("cable_fly_"));
    assert_eq!(created.image_key, "push");
    assert!(!created.is_favorite);
    assert_eq!(app.state().exercises_version().current(), 1);

    app.set_favorite(&created.id, true).await.unwrap();
    assert_eq!(app.state().exercises_version().current(), 2);

    let err = app.create_exercise("   ", ExerciseCategory::Other).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(app.state().exercises_version().current(), 2);
}

#[tokio::test]
async fn deleting_an_exercise_bumps_both_counters() {
    let app = start_app().await;
    app.log_set(
        date(),
        ExerciseRef::Catalog { id: "squat".into() },
        60.0,
        WeightUnit::Kg,
        None,
    )
    .await
    .unwrap();

    app.delete_exercise("squat").await.unwrap();

    assert_eq!(app.state().exercises_version().current(), 1);
    assert_eq!(app.state().entries_version().current(), 2);
    assert!(app.database().entries_for_date(date()).await.unwrap().is_empty());
}

#[tokio::test]
async fn session_save_writes_entries_and_progress_atomically() {
    let app = start_app().await;

    let saved = app
        .save_program_session(
            date(),
            1,
            vec![
                SessionSet {
                    exercise: ExerciseRef::Inline { name: "Suitcase Squat".into() },
                    weight: 12.0,
                    unit: WeightUnit::Kg,
                },
                SessionSet {
                    exercise: ExerciseRef::Inline { name: "Static Lunge".into() },
                    weight: 0.0, // skipped: no weight entered
                    unit: WeightUnit::Kg,
                },
                SessionSet {
                    exercise: ExerciseRef::Catalog { id: "squat".into() },
                    weight: 40.0,
                    unit: WeightUnit::Kg,
                },
            ],
        )
        .await
        .unwrap();

    assert_eq!(saved.len(), 2);
    // One bump for the whole session
    assert_eq!(app.state().entries_version().current(), 1);

    let entries = app.database().entries_for_date(date()).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].date_time < entries[1].date_time);

    let days = app.database().completed_days().await;
    assert!(days.contains(&1));
    let map = app.database().date_day_map().await;
    assert_eq!(map.get("2025-08-26"), Some(&1));

    // The in-memory mirror matches the durable copy
    let mirror = app.state().progress().await;
    assert!(mirror.completed_days.contains(&1));
    assert_eq!(mirror.date_day_map.get("2025-08-26"), Some(&1));
}

#[tokio::test]
async fn session_save_with_no_usable_sets_writes_nothing() {
    let app = start_app().await;

    let err = app
        .save_program_session(
            date(),
            2,
            vec![SessionSet {
                exercise: ExerciseRef::Inline { name: "Chest Press".into() },
                weight: 0.0,
                unit: WeightUnit::Kg,
            }],
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    assert!(app.database().entries_for_date(date()).await.unwrap().is_empty());
    assert!(app.database().completed_days().await.is_empty());
    assert_eq!(app.state().entries_version().current(), 0);
}

#[tokio::test]
async fn progress_mutations_validate_the_day_range() {
    let app = start_app().await;

    assert_eq!(
        app.mark_day_completed(0).await.unwrap_err().code,
        ErrorCode::InvalidInput
    );
    assert_eq!(
        app.set_date_day(date(), 31).await.unwrap_err().code,
        ErrorCode::InvalidInput
    );

    app.mark_day_completed(30).await.unwrap();
    assert!(app.state().progress().await.completed_days.contains(&30));
}

#[tokio::test]
async fn reset_clears_durable_progress_and_the_mirror() {
    let app = start_app().await;
    app.mark_day_completed(4).await.unwrap();
    app.set_date_day(date(), 4).await.unwrap();

    app.reset_progress().await.unwrap();

    assert!(app.database().completed_days().await.is_empty());
    assert!(app.database().date_day_map().await.is_empty());
    assert!(app.state().progress().await.completed_days.is_empty());
    assert!(app.state().progress().await.date_day_map.is_empty());
}
