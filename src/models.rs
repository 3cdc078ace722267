// ABOUTME: Core domain types for the setlog data layer
// ABOUTME: Exercises, log entries, weight units, and program-progress snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Setlog Contributors

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

// ============================================================================
// Exercise Types
// ============================================================================

/// Category of an exercise in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ExerciseCategory {
    /// Pressing movements (chest, shoulders, triceps)
    Push,
    /// Pulling movements (back, biceps)
    Pull,
    /// Lower body movements
    Legs,
    /// Trunk and abdominal work
    Core,
    /// Pilates sessions (logged without weight)
    Pilates,
    /// Anything that does not fit the other categories
    #[default]
    Other,
}

impl ExerciseCategory {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Push => "Push",
            Self::Pull => "Pull",
            Self::Legs => "Legs",
            Self::Core => "Core",
            Self::Pilates => "Pilates",
            Self::Other => "Other",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "push" => Self::Push,
            "pull" => Self::Pull,
            "legs" => Self::Legs,
            "core" => Self::Core,
            "pilates" => Self::Pilates,
            // Default to Other for unrecognized values
            _ => Self::Other,
        }
    }
}

/// An exercise in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Stable identifier: catalog rows use a slug, user-created rows a
    /// slug suffixed with the creation timestamp
    pub id: String,
    /// Display name
    pub name: String,
    /// Category used for grouping and display attributes
    pub category: ExerciseCategory,
    /// Cosmetic lookup key for the exercise image
    pub image_key: String,
    /// Whether the user pinned this exercise to the top of the list
    pub is_favorite: bool,
}

// ============================================================================
// Log Entry Types
// ============================================================================

/// Unit a weight was logged in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms
    #[default]
    Kg,
    /// Pounds
    Lb,
}

impl WeightUnit {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Lb => "lb",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "lb" => Self::Lb,
            // Default to kg for unrecognized values
            _ => Self::Kg,
        }
    }

    /// The other unit (used by the unit toggle in the UI state)
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Kg => Self::Lb,
            Self::Lb => Self::Kg,
        }
    }
}

/// Reference from a log entry to the exercise it belongs to.
///
/// Program-day exercises may not exist in the catalog; those entries carry
/// the display name inline instead of resolving against an exercise row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseRef {
    /// Entry logged against a resolved catalog exercise
    Catalog {
        /// Id of the exercise row
        id: String,
    },
    /// Entry logged against an exercise that has no catalog row
    Inline {
        /// Denormalized display name
        name: String,
    },
}

impl ExerciseRef {
    /// The id this entry is stored under.
    ///
    /// Inline references derive a stable slug from the name so history and
    /// personal-record queries still group entries for the same exercise.
    #[must_use]
    pub fn storage_id(&self) -> String {
        match self {
            Self::Catalog { id } => id.clone(),
            Self::Inline { name } => crate::catalog::slugify(name),
        }
    }

    /// The denormalized name, if this entry was not logged against a
    /// catalog row
    #[must_use]
    pub fn inline_name(&self) -> Option<&str> {
        match self {
            Self::Catalog { .. } => None,
            Self::Inline { name } => Some(name),
        }
    }
}

/// One recorded exercise set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique identifier, generated at creation time
    pub id: String,
    /// Epoch milliseconds: user-selected calendar date combined with the
    /// wall-clock time-of-day at save time, in local time
    pub date_time: i64,
    /// The exercise this set belongs to
    pub exercise: ExerciseRef,
    /// Logged weight; `0.0` is the "no weight tracked" sentinel reserved
    /// for Pilates sessions
    pub weight: f64,
    /// Unit the weight was logged in
    pub unit: WeightUnit,
    /// Optional free-text note (Pilates sessions store a session link here)
    pub note: Option<String>,
}

/// A log entry before an id has been assigned
#[derive(Debug, Clone, PartialEq)]
pub struct NewLogEntry {
    /// Epoch milliseconds, local-time semantics as on [`LogEntry`]
    pub date_time: i64,
    /// The exercise this set belongs to
    pub exercise: ExerciseRef,
    /// Logged weight
    pub weight: f64,
    /// Unit the weight was logged in
    pub unit: WeightUnit,
    /// Optional free-text note
    pub note: Option<String>,
}

/// Most recent weight logged for an exercise, used to pre-fill new entries;
/// also the shape of a personal record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    /// The logged weight
    pub weight: f64,
    /// Unit the weight was logged in
    pub unit: WeightUnit,
}

// ============================================================================
// Program Progress
// ============================================================================

/// Snapshot of the durable program-progress state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProgramProgress {
    /// Program days (1..=30) the user has completed
    pub completed_days: BTreeSet<u32>,
    /// Calendar date (`YYYY-MM-DD`) to the program day logged on that date
    pub date_day_map: HashMap<String, u32>,
}
