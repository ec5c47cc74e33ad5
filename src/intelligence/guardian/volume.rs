// ABOUTME: Weekly per-muscle set volume calculation and harmonization into target ranges
// ABOUTME: Adds or trims accessory sets one at a time until each muscle sits inside its range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Volume Harmonization
//!
//! Weekly volume is counted in half-set units so that secondary muscles
//! (half weight) stay exact; totals are rounded half-up when reported.
//!
//! Sets are added to (or trimmed from) accessories whose only primary muscle
//! is the one being corrected, until the muscle is back in range or no
//! eligible accessory remains. Secondary muscles pushed out of range by a
//! change are corrected on their own turn, so passes over all muscles repeat
//! until one makes no change. With the default taxonomy no accessory trains
//! a muscle that can feed back into its own primary, which guarantees a
//! fixed point well inside the pass cap and makes a second run a no-op.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use pierre_training_core::models::{
    ExperienceLevel, GuardianOptions, Muscle, MuscleMapping, MuscleSplit, PrimaryFocus,
    TrainingProgram, VolumeRange,
};
use tracing::debug;

use super::template::normalize_label;
use crate::config::training::GuardianConfig;
use crate::intelligence::muscle_mapper::{
    map_exercise_to_muscles, matches_phrase, normalize_exercise_name,
};

/// Weekly per-muscle set target for a focus and experience level
#[must_use]
pub const fn expected_volume(focus: PrimaryFocus, level: ExperienceLevel) -> VolumeRange {
    VolumeRange::expected(focus, level)
}

/// Weekly set totals per muscle
pub struct MuscleVolumeCalculator;

impl MuscleVolumeCalculator {
    /// Weekly volume per muscle in half-set units (every muscle present, zero included)
    #[must_use]
    pub fn weekly_half_sets(program: &TrainingProgram) -> BTreeMap<Muscle, u32> {
        let mappings = program
            .workouts
            .iter()
            .flat_map(|w| w.main_exercises.iter())
            .map(|e| (map_exercise_to_muscles(&e.name), e.sets));
        Self::accumulate(mappings)
    }

    /// Weekly sets per muscle: primary sets count fully, secondary sets at half weight
    #[must_use]
    pub fn weekly_sets(program: &TrainingProgram) -> BTreeMap<Muscle, u32> {
        Self::weekly_half_sets(program)
            .into_iter()
            .map(|(muscle, half)| (muscle, Self::round_half_sets(half)))
            .collect()
    }

    /// Convert half-set units to whole sets, rounding halves up
    #[must_use]
    pub const fn round_half_sets(half_sets: u32) -> u32 {
        half_sets.div_ceil(2)
    }

    fn accumulate(
        exercises: impl Iterator<Item = (MuscleMapping, u32)>,
    ) -> BTreeMap<Muscle, u32> {
        let mut totals: BTreeMap<Muscle, u32> = Muscle::ALL.iter().map(|&m| (m, 0)).collect();
        for (mapping, sets) in exercises {
            for muscle in Muscle::ALL {
                let weight = mapping.half_set_weight(muscle);
                if weight > 0 {
                    let total = totals.entry(muscle).or_insert(0);
                    *total = total.saturating_add(weight.saturating_mul(sets));
                }
            }
        }
        totals
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Increase,
    Decrease,
}

/// A single one-set change chosen by the harmonizer
#[derive(Debug, Clone, Copy)]
struct Adjustment {
    workout: usize,
    exercise: usize,
    muscle: Muscle,
    direction: Direction,
}

/// What the harmonizer needs to know about each exercise; names never change mid-run
struct ExerciseProfile {
    mapping: MuscleMapping,
    accessory: bool,
}

/// Whether an exercise name matches one of the normalized accessory patterns
pub(super) fn is_accessory(accessory_patterns: &[String], exercise_name: &str) -> bool {
    let normalized = normalize_exercise_name(exercise_name);
    accessory_patterns
        .iter()
        .any(|pattern| matches_phrase(&normalized, pattern))
}

fn workout_trains_split(focus: &str, split: MuscleSplit) -> bool {
    let focus = normalize_label(focus);
    split
        .focus_keywords()
        .iter()
        .any(|keyword| focus.contains(keyword))
}

pub(super) struct VolumeHarmonizer<'a> {
    config: &'a GuardianConfig,
    accessory_patterns: &'a [String],
}

impl<'a> VolumeHarmonizer<'a> {
    pub(super) const fn new(config: &'a GuardianConfig, accessory_patterns: &'a [String]) -> Self {
        Self {
            config,
            accessory_patterns,
        }
    }

    fn is_time_capped(&self, options: &GuardianOptions) -> bool {
        options
            .session_duration_minutes
            .is_some_and(|minutes| minutes <= self.config.time_capped_session_minutes)
    }

    /// Move every muscle's weekly volume toward its target range
    pub(super) fn harmonize(
        &self,
        program: &mut TrainingProgram,
        options: &GuardianOptions,
        corrections: &mut Vec<String>,
    ) {
        if program.workouts.is_empty() {
            return;
        }

        let range = options.volume_range();
        let allow_increase = !self.is_time_capped(options);
        if !allow_increase {
            debug!(
                session_duration_minutes = ?options.session_duration_minutes,
                "Time-capped sessions: volume may only be trimmed"
            );
        }

        let profiles: Vec<Vec<ExerciseProfile>> = program
            .workouts
            .iter()
            .map(|workout| {
                workout
                    .main_exercises
                    .iter()
                    .map(|exercise| ExerciseProfile {
                        mapping: map_exercise_to_muscles(&exercise.name),
                        accessory: is_accessory(self.accessory_patterns, &exercise.name),
                    })
                    .collect()
            })
            .collect();

        let mut half_sets = MuscleVolumeCalculator::accumulate(
            program
                .workouts
                .iter()
                .zip(&profiles)
                .flat_map(|(workout, row)| workout.main_exercises.iter().zip(row))
                .map(|(exercise, profile)| (profile.mapping.clone(), exercise.sets)),
        );

        for pass in 0..self.config.max_harmonization_passes {
            let mut changed = false;
            for muscle in Muscle::ALL {
                while let Some(adjustment) = self.next_adjustment(
                    muscle,
                    program,
                    &profiles,
                    &half_sets,
                    range,
                    allow_increase,
                ) {
                    let profile = &profiles[adjustment.workout][adjustment.exercise];
                    Self::apply(program, profile, &mut half_sets, adjustment, corrections);
                    changed = true;
                }
            }
            if !changed {
                debug!(passes = pass + 1, "Volume harmonization converged");
                break;
            }
        }
    }

    /// Pick the next one-set change for `muscle`, if any is allowed
    fn next_adjustment(
        &self,
        muscle: Muscle,
        program: &TrainingProgram,
        profiles: &[Vec<ExerciseProfile>],
        half_sets: &BTreeMap<Muscle, u32>,
        range: VolumeRange,
        allow_increase: bool,
    ) -> Option<Adjustment> {
        let current = MuscleVolumeCalculator::round_half_sets(half_sets_of(half_sets, muscle));
        let direction = if current < range.min && allow_increase {
            Direction::Increase
        } else if current > range.max {
            Direction::Decrease
        } else {
            return None;
        };

        let candidates = program
            .workouts
            .iter()
            .enumerate()
            .filter(|(_, workout)| workout_trains_split(&workout.focus, muscle.split()))
            .flat_map(|(w, workout)| {
                workout
                    .main_exercises
                    .iter()
                    .enumerate()
                    .map(move |(e, exercise)| (w, e, exercise.sets))
            })
            .filter(|&(w, e, sets)| {
                let profile = &profiles[w][e];
                profile.accessory
                    && profile.mapping.isolates(muscle)
                    && self.within_set_bounds(sets, direction)
            });

        // Spread additions over the smallest exercises, trims over the largest
        let chosen = match direction {
            Direction::Increase => candidates.min_by_key(|&(_, _, sets)| sets),
            Direction::Decrease => candidates.min_by_key(|&(_, _, sets)| Reverse(sets)),
        };

        chosen.map(|(workout, exercise, _)| Adjustment {
            workout,
            exercise,
            muscle,
            direction,
        })
    }

    const fn within_set_bounds(&self, sets: u32, direction: Direction) -> bool {
        match direction {
            Direction::Increase => sets < self.config.max_sets_per_exercise,
            Direction::Decrease => sets > self.config.min_sets_per_exercise,
        }
    }

    fn apply(
        program: &mut TrainingProgram,
        profile: &ExerciseProfile,
        half_sets: &mut BTreeMap<Muscle, u32>,
        adjustment: Adjustment,
        corrections: &mut Vec<String>,
    ) {
        let exercise =
            &mut program.workouts[adjustment.workout].main_exercises[adjustment.exercise];
        let before = exercise.sets;
        let (after, verb, goal) = match adjustment.direction {
            Direction::Increase => (before + 1, "Increased", "raise"),
            Direction::Decrease => (before - 1, "Decreased", "lower"),
        };
        exercise.sets = after;

        for muscle in Muscle::ALL {
            let weight = profile.mapping.half_set_weight(muscle);
            if weight == 0 {
                continue;
            }
            let total = half_sets.entry(muscle).or_insert(0);
            *total = match adjustment.direction {
                Direction::Increase => total.saturating_add(weight),
                Direction::Decrease => total.saturating_sub(weight),
            };
        }

        debug!(
            exercise = %exercise.name,
            workout = adjustment.workout + 1,
            muscle = %adjustment.muscle,
            before,
            after,
            "Adjusted accessory sets"
        );
        corrections.push(format!(
            "{verb} sets on \"{}\" (workout {}) from {before} to {after} to {goal} {} volume",
            exercise.name,
            adjustment.workout + 1,
            adjustment.muscle
        ));
    }
}

fn half_sets_of(half_sets: &BTreeMap<Muscle, u32>, muscle: Muscle) -> u32 {
    half_sets.get(&muscle).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_sets_round_up() {
        assert_eq!(MuscleVolumeCalculator::round_half_sets(0), 0);
        assert_eq!(MuscleVolumeCalculator::round_half_sets(3), 2);
        assert_eq!(MuscleVolumeCalculator::round_half_sets(4), 2);
    }

    #[test]
    fn test_accessory_patterns_match_at_word_starts() {
        let patterns = vec!["raise".to_owned(), "face pull".to_owned()];
        assert!(is_accessory(&patterns, "Cable Lateral Raise"));
        assert!(is_accessory(&patterns, "Rope Face-Pull"));
        assert!(!is_accessory(&patterns, "Barbell Row"));
    }

    #[test]
    fn test_half_sets_saturate() {
        let totals = MuscleVolumeCalculator::accumulate(
            [(map_exercise_to_muscles("Lateral Raise"), u32::MAX)].into_iter(),
        );
        assert_eq!(totals[&Muscle::DeltsSide], u32::MAX);
    }

    #[test]
    fn test_split_keywords_cover_generic_days() {
        assert!(workout_trains_split("Full Body", MuscleSplit::Legs));
        assert!(workout_trains_split("Upper A", MuscleSplit::Pull));
        assert!(workout_trains_split("Legs", MuscleSplit::Legs));
        assert!(!workout_trains_split("Push", MuscleSplit::Legs));
    }
}
