// ABOUTME: Program guardian configuration for set limits, accessory taxonomy and banned exercises
// ABOUTME: Configures per-exercise set bounds, session time cap, and substitution rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Program Guardian Configuration
//!
//! The accessory taxonomy decides which exercises may absorb weekly volume
//! changes. It is a heuristic, so it lives here rather than in code.

use pierre_training_core::constants::guardian;
use serde::{Deserialize, Serialize};

/// Program Guardian Configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuardianConfig {
    /// Per-exercise set cap when adding volume
    pub max_sets_per_exercise: u32,
    /// Per-exercise floor when trimming volume
    pub min_sets_per_exercise: u32,
    /// Sessions at or below this many minutes never receive extra sets
    pub time_capped_session_minutes: u32,
    /// Upper bound on full harmonization passes
    pub max_harmonization_passes: u32,
    /// Name fragments identifying accessory exercises (matched after normalization)
    pub accessory_patterns: Vec<String>,
    /// Exercises that are always replaced
    pub banned_exercises: Vec<BannedExercise>,
}

/// A banned exercise and the substitute that replaces it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BannedExercise {
    /// Phrase matched case-insensitively as a whole phrase
    pub name: String,
    /// Exercise name written in its place
    pub substitute: String,
}

impl BannedExercise {
    /// Create a substitution rule
    pub fn new(name: impl Into<String>, substitute: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            substitute: substitute.into(),
        }
    }
}

impl Default for GuardianConfig {
    fn default() -> Self {
        Self {
            max_sets_per_exercise: guardian::MAX_SETS_PER_EXERCISE,
            min_sets_per_exercise: guardian::MIN_SETS_PER_EXERCISE,
            time_capped_session_minutes: guardian::TIME_CAPPED_SESSION_MINUTES,
            max_harmonization_passes: guardian::MAX_HARMONIZATION_PASSES,
            accessory_patterns: guardian::DEFAULT_ACCESSORY_PATTERNS
                .iter()
                .map(|&p| p.to_owned())
                .collect(),
            banned_exercises: guardian::DEFAULT_BANNED_EXERCISES
                .iter()
                .map(|&(name, substitute)| BannedExercise::new(name, substitute))
                .collect(),
        }
    }
}
