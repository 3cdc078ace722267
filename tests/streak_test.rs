// ABOUTME: Integration tests for the streak computation
// ABOUTME: Consecutive-day chains, the one-day lag tolerance, and chain breaks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Setlog Contributors

#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use chrono::{Days, Local, NaiveDate, TimeZone};
use common::create_test_db;
use setlog::database::Database;
use setlog::models::{ExerciseRef, NewLogEntry, WeightUnit};

/// A fixed "today" so the walk is deterministic regardless of wall clock
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 26).unwrap()
}

fn days_ago(n: u64) -> NaiveDate {
    today().checked_sub_days(Days::new(n)).unwrap()
}

async fn add_on(db: &Database, date: NaiveDate) {
    let millis = Local
        .from_local_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
        .single()
        .unwrap()
        .timestamp_millis();
    db.add_entry(NewLogEntry {
        date_time: millis,
        exercise: ExerciseRef::Catalog { id: "squat".into() },
        weight: 60.0,
        unit: WeightUnit::Kg,
        note: None,
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn empty_log_means_zero_streak() {
    let db = create_test_db().await.unwrap();
    assert_eq!(db.streak_days_from(today()).await.unwrap(), 0);
}

#[tokio::test]
async fn three_consecutive_days_ending_today() {
    let db = create_test_db().await.unwrap();
    for n in 0..3 {
        add_on(&db, days_ago(n)).await;
    }
    assert_eq!(db.streak_days_from(today()).await.unwrap(), 3);
}

#[tokio::test]
async fn chain_not_reaching_today_or_yesterday_counts_zero() {
    let db = create_test_db().await.unwrap();
    add_on(&db, days_ago(2)).await;
    add_on(&db, days_ago(3)).await;
    assert_eq!(db.streak_days_from(today()).await.unwrap(), 0);
}

#[tokio::test]
async fn single_entry_yesterday_tolerates_the_lag() {
    let db = create_test_db().await.unwrap();
    add_on(&db, days_ago(1)).await;
    assert_eq!(db.streak_days_from(today()).await.unwrap(), 1);
}

#[tokio::test]
async fn chain_ending_yesterday_counts_in_full() {
    let db = create_test_db().await.unwrap();
    for n in 1..=4 {
        add_on(&db, days_ago(n)).await;
    }
    assert_eq!(db.streak_days_from(today()).await.unwrap(), 4);
}

#[tokio::test]
async fn a_two_day_gap_stops_the_walk() {
    let db = create_test_db().await.unwrap();
    add_on(&db, days_ago(0)).await;
    add_on(&db, days_ago(1)).await;
    // gap at days_ago(2)
    add_on(&db, days_ago(3)).await;
    add_on(&db, days_ago(4)).await;
    assert_eq!(db.streak_days_from(today()).await.unwrap(), 2);
}

#[tokio::test]
async fn multiple_entries_on_one_day_count_once() {
    let db = create_test_db().await.unwrap();
    add_on(&db, days_ago(0)).await;
    add_on(&db, days_ago(0)).await;
    add_on(&db, days_ago(1)).await;
    assert_eq!(db.streak_days_from(today()).await.unwrap(), 2);
}

#[tokio::test]
async fn entries_older_than_the_lookback_are_ignored() {
    let db = create_test_db().await.unwrap();
    add_on(&db, days_ago(0)).await;
    add_on(&db, days_ago(400)).await;
    assert_eq!(db.streak_days_from(today()).await.unwrap(), 1);
}
