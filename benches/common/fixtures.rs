// ABOUTME: Benchmark fixtures generating realistic weekly training programs
// ABOUTME: Deterministic program generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures generating realistic weekly training programs.

use pierre_training_engine::models::{Exercise, TrainingProgram, Workout};

/// Exercise pool cycled through when building workouts
const EXERCISE_POOL: &[&str] = &[
    "Bench Press",
    "Incline Dumbbell Press",
    "Arnold Press",
    "Cable Lateral Raise",
    "Triceps Pushdown",
    "Barbell Row",
    "Lat Pulldown",
    "Face Pull",
    "Barbell Curl",
    "Barbell Back Squat",
    "Romanian Deadlift",
    "Leg Extension",
    "Lying Leg Curl",
    "Standing Calf Raise",
    "Dumbbell Fly",
];

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum ProgramBatchSize {
    /// Small batch (10 programs)
    Small,
    /// Medium batch (100 programs)
    Medium,
}

impl ProgramBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
        }
    }
}

/// Generate one program with `days` workouts, seeded so programs differ
#[must_use]
pub fn generate_program(days: usize, seed: usize) -> TrainingProgram {
    let workouts = (0..days)
        .map(|day| {
            let exercises = (0..5)
                .map(|slot| {
                    let index = (seed * 7 + day * 5 + slot) % EXERCISE_POOL.len();
                    let sets = 2 + ((seed + day + slot) % 4) as u32;
                    Exercise::new(EXERCISE_POOL[index], sets)
                })
                .collect();
            Workout::new(format!("Day {}", day + 1), exercises)
        })
        .collect();
    TrainingProgram::new(workouts)
}

/// Generate a batch of distinct programs
#[must_use]
pub fn generate_programs(size: ProgramBatchSize, days: usize) -> Vec<TrainingProgram> {
    (0..size.count()).map(|seed| generate_program(days, seed)).collect()
}
