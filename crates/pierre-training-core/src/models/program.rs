// ABOUTME: Training program data model as produced by the program generation step
// ABOUTME: Defines TrainingProgram, Workout and Exercise with camelCase wire names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A weekly training program: one workout per training day, in order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainingProgram {
    /// Workouts in training-day order
    #[serde(default)]
    pub workouts: Vec<Workout>,
}

impl TrainingProgram {
    /// Create a program from its workouts
    #[must_use]
    pub const fn new(workouts: Vec<Workout>) -> Self {
        Self { workouts }
    }

    /// Whether the program has no workouts at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Focus labels of every workout, in order
    #[must_use]
    pub fn focus_labels(&self) -> Vec<&str> {
        self.workouts.iter().map(|w| w.focus.as_str()).collect()
    }

    /// Total working sets across the whole week, saturating at `u32::MAX`
    #[must_use]
    pub fn total_sets(&self) -> u32 {
        self.workouts
            .iter()
            .flat_map(|w| w.main_exercises.iter())
            .map(|e| e.sets)
            .fold(0, u32::saturating_add)
    }
}

/// A single training day
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Human-readable label ("Push Day", "Upper A", ...)
    pub name: String,
    /// Split label used for template and volume decisions ("Push", "Legs", ...)
    pub focus: String,
    /// Exercises in execution order
    #[serde(default)]
    pub main_exercises: Vec<Exercise>,
}

impl Workout {
    /// Create a workout whose name equals its focus
    pub fn new(focus: impl Into<String>, main_exercises: Vec<Exercise>) -> Self {
        let focus = focus.into();
        Self {
            name: focus.clone(),
            focus,
            main_exercises,
        }
    }
}

/// A prescribed exercise
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Exercise name, matched case-insensitively against the muscle taxonomy
    pub name: String,
    /// Working sets per session
    pub sets: u32,
    /// Rep prescription ("8-12", "5", "AMRAP")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    /// Rest between sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,
    /// Coaching cues shown alongside the exercise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Exercise {
    /// Create an exercise with only the fields the engine reasons about
    pub fn new(name: impl Into<String>, sets: u32) -> Self {
        Self {
            name: name.into(),
            sets,
            ..Self::default()
        }
    }
}
