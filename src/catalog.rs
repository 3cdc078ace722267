// ABOUTME: Fixed exercise catalog seeded at first run, plus display lookup tables
// ABOUTME: Category colors/emojis and id derivation for user-created exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Setlog Contributors

use crate::models::ExerciseCategory;
use chrono::Utc;

/// A catalog exercise as shipped with the app
#[derive(Debug, Clone, Copy)]
pub struct SeedExercise {
    /// Stable slug identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Category
    pub category: ExerciseCategory,
    /// Image lookup key
    pub image_key: &'static str,
}

/// The fixed catalog inserted on startup (idempotently; existing rows are
/// never overwritten)
pub const SEED_EXERCISES: &[SeedExercise] = &[
    SeedExercise { id: "bench_press", name: "Bench Press", category: ExerciseCategory::Push, image_key: "bench_press" },
    SeedExercise { id: "incline_press", name: "Incline Press", category: ExerciseCategory::Push, image_key: "incline_press" },
    SeedExercise { id: "overhead_press", name: "Overhead Press", category: ExerciseCategory::Push, image_key: "overhead_press" },
    SeedExercise { id: "lateral_raise", name: "Lateral Raise", category: ExerciseCategory::Push, image_key: "lateral_raise" },
    SeedExercise { id: "tricep_pushdown", name: "Tricep Pushdown", category: ExerciseCategory::Push, image_key: "tricep_pushdown" },
    SeedExercise { id: "deadlift", name: "Deadlift", category: ExerciseCategory::Pull, image_key: "deadlift" },
    SeedExercise { id: "barbell_row", name: "Barbell Row", category: ExerciseCategory::Pull, image_key: "barbell_row" },
    SeedExercise { id: "pull_up", name: "Pull-Up", category: ExerciseCategory::Pull, image_key: "pull_up" },
    SeedExercise { id: "lat_pulldown", name: "Lat Pulldown", category: ExerciseCategory::Pull, image_key: "lat_pulldown" },
    SeedExercise { id: "bicep_curl", name: "Bicep Curl", category: ExerciseCategory::Pull, image_key: "bicep_curl" },
    SeedExercise { id: "squat", name: "Squat", category: ExerciseCategory::Legs, image_key: "squat" },
    SeedExercise { id: "romanian_deadlift", name: "Romanian Deadlift", category: ExerciseCategory::Legs, image_key: "romanian_deadlift" },
    SeedExercise { id: "leg_press", name: "Leg Press", category: ExerciseCategory::Legs, image_key: "leg_press" },
    SeedExercise { id: "lunges", name: "Lunges", category: ExerciseCategory::Legs, image_key: "lunges" },
    SeedExercise { id: "leg_curl", name: "Leg Curl", category: ExerciseCategory::Legs, image_key: "leg_curl" },
    SeedExercise { id: "plank", name: "Plank", category: ExerciseCategory::Core, image_key: "plank" },
    SeedExercise { id: "cable_crunch", name: "Cable Crunch", category: ExerciseCategory::Core, image_key: "cable_crunch" },
    SeedExercise { id: "ab_rollout", name: "Ab Rollout", category: ExerciseCategory::Core, image_key: "ab_rollout" },
    SeedExercise { id: "face_pull", name: "Face Pull", category: ExerciseCategory::Other, image_key: "face_pull" },
    SeedExercise { id: "farmers_carry", name: "Farmer's Carry", category: ExerciseCategory::Other, image_key: "farmers_carry" },
    SeedExercise { id: "pilates", name: "Pilates", category: ExerciseCategory::Pilates, image_key: "pilates" },
];

/// Accent color per category (hex), used by exercise cards and calendar dots
const CATEGORY_COLORS: &[(ExerciseCategory, &str)] = &[
    (ExerciseCategory::Push, "#6C63FF"),
    (ExerciseCategory::Pull, "#FF6584"),
    (ExerciseCategory::Legs, "#4CAF84"),
    (ExerciseCategory::Core, "#FF9800"),
    (ExerciseCategory::Pilates, "#E91E8C"),
    (ExerciseCategory::Other, "#2196F3"),
];

/// Emoji per category, used as a fallback where no exercise image exists
const CATEGORY_EMOJIS: &[(ExerciseCategory, &str)] = &[
    (ExerciseCategory::Push, "\u{1f4aa}"),
    (ExerciseCategory::Pull, "\u{1f3cb}\u{fe0f}"),
    (ExerciseCategory::Legs, "\u{1f9b5}"),
    (ExerciseCategory::Core, "\u{1f3af}"),
    (ExerciseCategory::Pilates, "\u{1f9d8}"),
    (ExerciseCategory::Other, "\u{26a1}"),
];

/// Accent color for a category
#[must_use]
pub fn category_color(category: ExerciseCategory) -> &'static str {
    CATEGORY_COLORS
        .iter()
        .find(|(c, _)| *c == category)
        .map_or("#6C63FF", |(_, color)| color)
}

/// Emoji for a category
#[must_use]
pub fn category_emoji(category: ExerciseCategory) -> &'static str {
    CATEGORY_EMOJIS
        .iter()
        .find(|(c, _)| *c == category)
        .map_or("\u{1f4aa}", |(_, emoji)| emoji)
}

/// Derive a stable slug from a display name: lowercase, with every
/// non-alphanumeric character replaced by an underscore
#[must_use]
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Derive the id for a user-created exercise.
///
/// The creation timestamp is embedded so ids stay unique even if the user
/// creates, deletes, and re-creates an exercise with the same name.
#[must_use]
pub fn user_exercise_id(name: &str) -> String {
    format!("{}_{}", slugify(name.trim()), Utc::now().timestamp_millis())
}

/// Image key for a user-created exercise (derived from its category)
#[must_use]
pub fn user_exercise_image_key(category: ExerciseCategory) -> String {
    category.as_str().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_unique_ids() {
        let mut ids: Vec<&str> = SEED_EXERCISES.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SEED_EXERCISES.len());
    }

    #[test]
    fn every_category_has_display_attributes() {
        for cat in [
            ExerciseCategory::Push,
            ExerciseCategory::Pull,
            ExerciseCategory::Legs,
            ExerciseCategory::Core,
            ExerciseCategory::Pilates,
            ExerciseCategory::Other,
        ] {
            assert!(category_color(cat).starts_with('#'));
            assert!(!category_emoji(cat).is_empty());
        }
    }

    #[test]
    fn slugify_replaces_non_alphanumerics() {
        assert_eq!(slugify("Pull-Up"), "pull_up");
        assert_eq!(slugify("Farmer's Carry"), "farmer_s_carry");
    }

    #[test]
    fn user_exercise_id_embeds_timestamp() {
        let id = user_exercise_id("Cable Fly");
        assert!(id.starts_with("cable_fly_"));
        let suffix = id.trim_start_matches("cable_fly_");
        assert!(suffix.parse::<i64>().is_ok());
    }

    #[test]
    fn user_image_key_is_lowercased_category() {
        assert_eq!(
            user_exercise_image_key(ExerciseCategory::Legs),
            "legs"
        );
    }
}
