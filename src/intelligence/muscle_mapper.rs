// ABOUTME: Maps exercise names to the primary and secondary muscles they train
// ABOUTME: Case-insensitive phrase matching against an ordered taxonomy of exercise families
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Muscle-Volume Mapper
//!
//! Resolves free-text exercise names ("Barbell Back Squat", "Cable Lateral
//! Raise", "Face-Pull") to the muscles they train. Names are normalized
//! (lower-cased, `-`, `_` and `/` treated as spaces) and compared against an
//! ordered table of exercise families. Patterns match at word starts, so
//! "row" matches "Seated Cable Rows" but not "Narrow Grip Bench Press".
//! The first matching family wins, which is why specific families sit above
//! the generic ones they would otherwise collide with.

use pierre_training_core::models::{Muscle, MuscleMapping};

use Muscle::{
    Back, Biceps, Calves, Chest, DeltsFront, DeltsRear, DeltsSide, Glutes, Hamstrings, Quads,
    Triceps,
};

/// One exercise family in the taxonomy
struct ExerciseFamily {
    patterns: &'static [&'static str],
    primary: &'static [Muscle],
    secondary: &'static [Muscle],
}

const fn family(
    patterns: &'static [&'static str],
    primary: &'static [Muscle],
    secondary: &'static [Muscle],
) -> ExerciseFamily {
    ExerciseFamily {
        patterns,
        primary,
        secondary,
    }
}

/// Exercise taxonomy, most specific families first
static EXERCISE_FAMILIES: &[ExerciseFamily] = &[
    // Lower body isolation
    family(&["leg curl", "hamstring curl", "nordic"], &[Hamstrings], &[]),
    family(&["leg extension", "quad extension"], &[Quads], &[]),
    family(&["calf raise", "calf press", "calves"], &[Calves], &[]),
    // Hinges and glute work
    family(
        &["romanian deadlift", "rdl", "stiff leg", "good morning"],
        &[Hamstrings],
        &[Glutes, Back],
    ),
    family(
        &["hip thrust", "glute bridge", "glute kickback", "hip abduction"],
        &[Glutes],
        &[Hamstrings],
    ),
    family(&["back extension", "hyperextension"], &[Back], &[Glutes, Hamstrings]),
    // Squat patterns
    family(&["leg press", "hack squat"], &[Quads], &[Glutes]),
    family(
        &["split squat", "lunge", "step up", "bulgarian"],
        &[Quads, Glutes],
        &[Hamstrings],
    ),
    family(&["squat"], &[Quads], &[Glutes, Hamstrings]),
    family(&["deadlift"], &[Hamstrings, Glutes], &[Back, Quads]),
    // Shoulders
    family(
        &["face pull", "rear delt", "reverse fly", "reverse flye", "reverse pec deck"],
        &[DeltsRear],
        &[Back],
    ),
    family(&["lateral", "side raise", "upright row"], &[DeltsSide], &[]),
    family(&["front raise"], &[DeltsFront], &[]),
    family(
        &[
            "overhead press",
            "shoulder press",
            "military press",
            "arnold press",
            "push press",
            "ohp",
        ],
        &[DeltsFront],
        &[DeltsSide, Triceps],
    ),
    // Arms
    family(
        &[
            "pushdown",
            "push down",
            "skull",
            "tricep",
            "close grip bench",
            "dip",
            "kickback",
            "extension",
        ],
        &[Triceps],
        &[],
    ),
    family(&["curl"], &[Biceps], &[]),
    // Back
    family(
        &["pulldown", "pull down", "lat pull", "pull up", "pullup", "chin up", "chinup"],
        &[Back],
        &[Biceps],
    ),
    family(&["pullover"], &[Back], &[Chest]),
    family(&["row"], &[Back], &[Biceps, DeltsRear]),
    // Chest
    family(&["fly", "flye", "pec deck", "crossover"], &[Chest], &[DeltsFront]),
    family(
        &["bench press", "chest press", "floor press", "push up", "pushup", "press up"],
        &[Chest],
        &[Triceps, DeltsFront],
    ),
    family(&["incline", "decline", "bench"], &[Chest], &[DeltsFront, Triceps]),
];

/// Normalize an exercise name for matching
///
/// Lower-cases, treats `-`, `_` and `/` as spaces and collapses runs of
/// whitespace: `"Face-Pull "` becomes `"face pull"`.
#[must_use]
pub fn normalize_exercise_name(name: &str) -> String {
    name.to_lowercase()
        .replace(['-', '_', '/'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether `pattern` occurs in an already-normalized name starting at a word boundary
#[must_use]
pub fn matches_phrase(normalized_name: &str, pattern: &str) -> bool {
    let pattern = normalize_exercise_name(pattern);
    if pattern.is_empty() {
        return false;
    }
    format!(" {normalized_name}").contains(&format!(" {pattern}"))
}

/// Map an exercise name to the muscles it trains
///
/// Total and deterministic: unrecognized names return an empty mapping.
#[must_use]
pub fn map_exercise_to_muscles(exercise_name: &str) -> MuscleMapping {
    let normalized = normalize_exercise_name(exercise_name);

    EXERCISE_FAMILIES
        .iter()
        .find(|family| {
            family
                .patterns
                .iter()
                .any(|pattern| matches_phrase(&normalized, pattern))
        })
        .map_or_else(MuscleMapping::default, |family| {
            MuscleMapping::new(family.primary, family.secondary)
        })
}
