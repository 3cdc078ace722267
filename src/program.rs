// ABOUTME: The fixed 30-day workout program shipped with the app
// ABOUTME: Static content table plus the title-to-color display lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Setlog Contributors

/// One of the 30 fixed workout templates
#[derive(Debug, Clone, Copy)]
pub struct ProgramDay {
    /// Day number, 1..=30
    pub day: u32,
    /// Display title
    pub title: &'static str,
    /// Ordered exercise names for this day
    pub exercises: &'static [&'static str],
}

/// The full program, ordered by day. Read-only at runtime.
pub const PROGRAM: &[ProgramDay] = &[
    ProgramDay { day: 1, title: "Leg Day", exercises: &["Suitcase Squat", "Static Lunge", "RDL", "Rear-Step Lunge", "Pause-Bottom Goblet Squat", "Lateral Lunge", "Half Goblet Squat", "Full Goblet Squat"] },
    ProgramDay { day: 2, title: "Upper Body", exercises: &["Chest Press", "Flyes", "Renegade Row", "Pullover", "Shoulder Press", "Rear Delt Fly", "Lateral Raise", "Alternating Front Raise"] },
    ProgramDay { day: 3, title: "Glutes", exercises: &["Banded Hip Thrust (Pause)", "Hip Thrust (Pause)", "Staggered Hip Thrust", "Sumo Deadlift Squat", "Bulgarian Lunge", "Single-Leg Hip Thrust"] },
    ProgramDay { day: 4, title: "Full Body", exercises: &["Bent-Over Row", "Static Lunge", "RDL", "Chest Press", "Push Press", "Heel-Elevated Squat", "Rear-Step Lunge", "Maker"] },
    ProgramDay { day: 5, title: "Arms + Abs", exercises: &["Palms-Up Curls", "Diamond Press", "Dips", "Wide Curls", "Tricep Press", "Skull Crushers", "Hammer Curls"] },
    ProgramDay { day: 6, title: "Leg Day", exercises: &["Closer-Stance Lunge", "Heel-Elevated Squat (Slow)", "Bulgarian Lunge (Slow)", "Close Bulgarian Lunge", "Goblet Squat", "Heel-Elevated Squat + Hold"] },
    ProgramDay { day: 7, title: "Shoulders + Triceps", exercises: &["Shoulder Press", "Arnold Press", "Face Pulls", "Alternating Lateral Raises", "Upright Rows", "Tate Press", "Skull Crushers", "Shoulder Crushers", "Overhead Tricep Extension", "Lateral Raise + Partials"] },
    ProgramDay { day: 8, title: "Glutes + Hamstrings", exercises: &["RDL", "Banded Hip Thrust (Slow/Pause)", "Banded Hamstring Hip Thrust", "Staggered RDL (L/R)", "Lunge to Staggered RDL", "Single-Leg Hamstring Thrust"] },
    ProgramDay { day: 9, title: "Full Body", exercises: &["Bent-Over Row", "Squat-to-Press", "High Squat", "Chest Press", "Static Lunge", "Single-Arm Shoulder Press", "Lateral Lunge", "Half-Squat + Push Press + Squat-to-Press"] },
    ProgramDay { day: 10, title: "Back + Biceps", exercises: &["Single-Arm Row", "Pullover", "Single-Arm Supine Row", "Hammer Curls", "Cross-Body Curls", "Wide Curls", "Supine Row + 21s Palms-Up Curls"] },
    ProgramDay { day: 11, title: "Leg Day + Calves", exercises: &["Paused Goblet Squat", "Elevated Lunge", "Paused Lunge", "Rear-Step Lunge (2 DB)", "Rear-Step Forward-Lean Lunge", "Step-Into Curtsy Lunge", "Static Curtsy Lunge", "Calf Raise Variations"] },
    ProgramDay { day: 12, title: "Chest + Triceps", exercises: &["Chest Press", "Diamond Press", "Flyes", "Tricep Press", "Skull Crushers", "Dips"] },
    ProgramDay { day: 13, title: "Glutes / Hamstrings / Back", exercises: &["Renegade Row", "Rotational Row", "Deadstop Row", "Pullovers", "RDL (Slow/Pause)", "Staggered RDL", "Sumo Deadlift Squat", "Banded Hip Thrust"] },
    ProgramDay { day: 14, title: "Unilateral Full Body", exercises: &["Alternating Chest Press", "Static Lunge", "Alternating Rear-Step Lunge", "Renegade Row (L/R)", "Bulgarian Lunge", "Forward-Lean Lunge", "Single-Arm Arnold Press", "Clean to Single-Arm Arnold Press", "Squat-to-Lunge"] },
    ProgramDay { day: 15, title: "Shoulders", exercises: &["Shoulder Press", "Frontal Raise", "Rear Delt Fly", "Lateral Raise", "Hammer Front Raise", "Partial Rear Delt Raise", "Lateral Partials", "Arc Raise"] },
    ProgramDay { day: 16, title: "Hamstrings", exercises: &["RDL (Slow/Paused)", "Staggered RDL", "Staggered RDL to Lunge", "Balance RDL", "Hamstring Thrust", "Single-Leg Hamstring Thrust"] },
    ProgramDay { day: 17, title: "Complete Upper Body", exercises: &["Chest Press + Dips", "Pullovers", "Diamond Press", "Landmine Row", "Arnold Press", "Lateral-to-Frontal Arcs", "Partial Rear Delt Fly", "Around-the-World"] },
    ProgramDay { day: 18, title: "Glutes", exercises: &["Sumo Squat Deadlift", "Banded Hip Thrust + Hold", "Hip Thrust Pulses", "Full Hip Thrust", "Elevated Lunge", "Rear Lunge", "Single-Leg Hip Thrust + Pulses"] },
    ProgramDay { day: 19, title: "Full Body", exercises: &["Chest Press", "Push-Ups", "Static Lunge", "Rear-Step Forward Lunge", "Pullovers", "Bent-Over Row", "Pause Goblet Squat", "1\u{00bd} Goblet Squat", "Shoulder Press", "Push Press", "RDL", "1\u{00bd} RDL"] },
    ProgramDay { day: 20, title: "Arms + Abs / Core", exercises: &["Diamond Press", "Tricep Press", "Skull Crushers", "Shoulder Crushers", "Overhead Tricep Extension", "Plank Hip Twist", "Side Plank Lift", "Leg Lowers + Reverse Crunch", "Palms-Up Curls", "Wide Curls", "Hammer Curls", "Cross-Body Curls"] },
    ProgramDay { day: 21, title: "Leg Day \u{2013} Step Ups", exercises: &["Heel-Elevated Squat", "Static Lunge + Step-Up", "Rear-Step Lunge + Step-Up", "Lateral Lunge + Side Step-Up", "Forward-Lean Lunge + Step-Up", "Single Calf Raise (L/R)"] },
    ProgramDay { day: 22, title: "Upper Body", exercises: &["Chest Press", "Flyes", "Single-Arm Row", "Pullovers", "Momentum Row", "Push-Ups", "Supine Double Row", "Alternating Renegade Row"] },
    ProgramDay { day: 23, title: "Glutes + Hamstrings", exercises: &["RDL Slow Eccentric", "Sumo Deadlift Slow Eccentric", "Banded Hip Thrust", "Hip Thrust (Slow)", "Hamstring Hip Thrust", "Glute Bridge", "Hamstring Bridge", "Single-Leg Bridge"] },
    ProgramDay { day: 24, title: "Full Body \u{2013} Circuits", exercises: &["High Squat", "Squat-to-Press", "Bent-Over Rowmaker", "RDL", "RDL to High Squat", "Shoulder Press", "Clean-to-Press", "Forward Step Alternating Lunges", "Rear-Step Alternating Lunge"] },
    ProgramDay { day: 25, title: "Shoulders \u{2013} Supersets", exercises: &["Rear Delt Flyes", "Hammer Raise", "90\u{00b0} Lateral Raise", "Rear Delt Row", "Upright Row", "Arc Frontal Raise", "Lateral Raise + Partials", "Arnold Press"] },
    ProgramDay { day: 26, title: "Leg Day \u{2013} Step Ups", exercises: &["Sumo Deadlift Squat", "Lunge Hold", "Alternating Rear Lunge", "RDL", "Step-Up (L/R)", "Sumo Deadlift Hold"] },
    ProgramDay { day: 27, title: "Upper Body \u{2013} Antagonist", exercises: &["Alternating Renegade Rows", "Pause Push-Ups", "Pullovers", "Diamond Press", "Single-Arm Hammer Press", "Single-Arm Rear Delt Fly", "Slow Lateral Raise", "Slow Frontal Raise"] },
    ProgramDay { day: 28, title: "Glutes", exercises: &["Clam (Slow/Hold/Faster)", "Straight-Leg Lift", "Hip Thrust", "Staggered Thrust", "Forward-Lean Bulgarian Lunge", "Single-Leg Thrust"] },
    ProgramDay { day: 29, title: "Full Body \u{2013} Hypertrophy", exercises: &["Shoulder Press", "Static Lunge (L/R)", "Chest Press", "Paused Goblet Squat", "Pullover", "RDL", "Bulgarian Lunge (L/R)", "Push-Ups"] },
    ProgramDay { day: 30, title: "Arms + Abs / Core", exercises: &["Dips", "Tricep Press", "Skull Crushers", "Crunch + Crunch Pulses", "X-Arm Sit-Up", "Hollow-to-V Sit", "Reverse Crunch", "Plank Feet Walkout", "Cross-Body Curl", "Hammer Curls", "Alternating Curls"] },
];

/// Accent color per title keyword, first match wins
const DAY_COLORS: &[(&str, &str)] = &[
    ("Leg Day", "#4CAF84"),
    ("Upper Body", "#6C63FF"),
    ("Glutes", "#FF6584"),
    ("Full Body", "#FF9800"),
    ("Arms", "#2196F3"),
    ("Back", "#2196F3"),
    ("Shoulders", "#9C27B0"),
    ("Hamstrings", "#4CAF84"),
    ("Chest", "#6C63FF"),
    ("Unilateral", "#FF9800"),
];

/// Look up the program day with the given number
#[must_use]
pub fn program_day(day: u32) -> Option<&'static ProgramDay> {
    PROGRAM.iter().find(|d| d.day == day)
}

/// Accent color for a program-day title
#[must_use]
pub fn day_color(title: &str) -> &'static str {
    DAY_COLORS
        .iter()
        .find(|(key, _)| title.contains(key))
        .map_or("#6C63FF", |(_, color)| color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_has_thirty_ordered_days() {
        assert_eq!(PROGRAM.len(), 30);
        for (i, day) in PROGRAM.iter().enumerate() {
            assert_eq!(day.day as usize, i + 1);
            assert!(!day.exercises.is_empty());
        }
    }

    #[test]
    fn day_lookup_by_number() {
        let day = program_day(3).unwrap();
        assert_eq!(day.title, "Glutes");
        assert!(program_day(31).is_none());
    }

    #[test]
    fn day_color_matches_first_keyword() {
        assert_eq!(day_color("Leg Day \u{2013} Step Ups"), "#4CAF84");
        assert_eq!(day_color("Glutes + Hamstrings"), "#FF6584");
        assert_eq!(day_color("Mystery Session"), "#6C63FF");
    }
}
