// ABOUTME: Program guardian applying rule-based corrections to generated training programs
// ABOUTME: Runs template conformance, volume harmonization and banned-exercise substitution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Program Guardian
//!
//! Takes a generated weekly program and returns a corrected copy together
//! with a human-readable audit trail. Corrections run in a fixed order:
//!
//! 1. **Template conformance** relabels, trims or pads workouts so the week
//!    follows the split expected for the requested number of training days.
//! 2. **Volume harmonization** adds or removes accessory sets until every
//!    muscle's weekly set count sits inside the range for the athlete's focus
//!    and experience level.
//! 3. **Banned exercise substitution** swaps denylisted exercises for their
//!    configured substitutes.
//!
//! Volume targets depend on focus labels, so templates are enforced first.
//! Substitution never changes structure or set counts, so it runs last.
//!
//! The guardian never fails at call time. An empty program passes through
//! unchanged with no notes.

mod substitution;
mod template;
mod volume;

pub use template::expected_template;
pub use volume::{expected_volume, MuscleVolumeCalculator};

use std::collections::BTreeMap;
use std::sync::OnceLock;

use pierre_training_core::models::{GuardianOptions, Muscle, TrainingProgram};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::config::training::{ConfigError, GuardianConfig, TrainingConfig};
use crate::intelligence::muscle_mapper::normalize_exercise_name;
use substitution::{substitute_banned, validate_substitutes, Substitution};
use volume::VolumeHarmonizer;

/// Audit trail of a guardian run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GuardianNotes {
    /// One line per correction, in the order they were made
    pub corrections: Vec<String>,
    /// Weekly sets per muscle in the corrected program (every muscle listed)
    pub per_muscle_sets: BTreeMap<Muscle, u32>,
    /// Muscles left outside their target range because no eligible change existed
    pub unresolved_muscles: Vec<Muscle>,
}

/// Corrected program plus notes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuardianResult {
    /// The corrected program
    pub program: TrainingProgram,
    /// What was changed and the resulting weekly volume
    pub notes: GuardianNotes,
}

/// Program guardian with compiled accessory taxonomy and substitution rules
///
/// Immutable once built, so one instance can serve many threads.
#[derive(Debug, Clone)]
pub struct ProgramGuardian {
    config: GuardianConfig,
    accessory_patterns: Vec<String>,
    substitutions: Vec<Substitution>,
}

impl ProgramGuardian {
    /// Build a guardian from configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPattern` if a banned exercise cannot be
    /// compiled, or its substitute is banned by any rule, trains different
    /// muscles or differs in accessory status, and
    /// `ConfigError::ValueOutOfRange` if the accessory taxonomy is empty
    pub fn new(config: &GuardianConfig) -> Result<Self, ConfigError> {
        let accessory_patterns: Vec<String> = config
            .accessory_patterns
            .iter()
            .map(|pattern| normalize_exercise_name(pattern))
            .filter(|pattern| !pattern.is_empty())
            .collect();
        if accessory_patterns.is_empty() {
            return Err(ConfigError::ValueOutOfRange(
                "accessory_patterns must contain at least one pattern",
            ));
        }

        let substitutions = config
            .banned_exercises
            .iter()
            .map(Substitution::compile)
            .collect::<Result<Vec<_>, _>>()?;
        validate_substitutes(&substitutions, &accessory_patterns)?;

        Ok(Self {
            config: config.clone(),
            accessory_patterns,
            substitutions,
        })
    }

    /// Guardian built from default configuration
    ///
    /// The default taxonomy always compiles. Should that ever change, the
    /// guardian runs without substitutions rather than failing.
    fn from_defaults() -> Self {
        let config = GuardianConfig::default();
        Self::new(&config).unwrap_or_else(|e| {
            warn!("Default guardian configuration rejected: {e}");
            Self {
                accessory_patterns: config
                    .accessory_patterns
                    .iter()
                    .map(|pattern| normalize_exercise_name(pattern))
                    .collect(),
                substitutions: Vec::new(),
                config,
            }
        })
    }

    /// Configuration this guardian was built from
    #[must_use]
    pub const fn config(&self) -> &GuardianConfig {
        &self.config
    }

    /// Apply all corrections to a program
    #[instrument(
        skip_all,
        fields(
            workouts = program.workouts.len(),
            focus = ?options.primary_focus,
            level = ?options.experience_level,
        )
    )]
    #[must_use]
    pub fn apply(&self, mut program: TrainingProgram, options: &GuardianOptions) -> GuardianResult {
        let mut corrections = Vec::new();

        template::enforce_template(&mut program, options, &mut corrections);
        let after_template = corrections.len();

        VolumeHarmonizer::new(&self.config, &self.accessory_patterns).harmonize(
            &mut program,
            options,
            &mut corrections,
        );
        let after_volume = corrections.len();

        substitute_banned(&mut program, &self.substitutions, &mut corrections);

        let per_muscle_sets = MuscleVolumeCalculator::weekly_sets(&program);
        let unresolved_muscles = if program.is_empty() {
            Vec::new()
        } else {
            let range = options.volume_range();
            per_muscle_sets
                .iter()
                .filter(|&(_, &sets)| !range.contains(sets))
                .map(|(&muscle, _)| muscle)
                .collect()
        };

        info!(
            template_corrections = after_template,
            volume_corrections = after_volume - after_template,
            substitutions = corrections.len() - after_volume,
            unresolved = unresolved_muscles.len(),
            "Guardian run complete"
        );

        GuardianResult {
            program,
            notes: GuardianNotes {
                corrections,
                per_muscle_sets,
                unresolved_muscles,
            },
        }
    }

    /// Apply the guardian to many programs in parallel, preserving input order
    #[must_use]
    pub fn apply_batch(
        &self,
        programs: Vec<TrainingProgram>,
        options: &GuardianOptions,
    ) -> Vec<GuardianResult> {
        programs
            .into_par_iter()
            .map(|program| self.apply(program, options))
            .collect()
    }
}

/// Guardian built from the global configuration
fn global_guardian() -> &'static ProgramGuardian {
    static GUARDIAN: OnceLock<ProgramGuardian> = OnceLock::new();
    GUARDIAN.get_or_init(|| {
        ProgramGuardian::new(&TrainingConfig::global().guardian).unwrap_or_else(|e| {
            warn!("Invalid guardian configuration: {e}, using defaults");
            ProgramGuardian::from_defaults()
        })
    })
}

/// Apply the program guardian with the global configuration
///
/// # Examples
///
/// ```rust
/// use pierre_training_engine::apply_guardian;
/// use pierre_training_engine::models::{
///     Exercise, ExperienceLevel, GuardianOptions, PrimaryFocus, TrainingProgram, Workout,
/// };
///
/// let program = TrainingProgram::new(vec![
///     Workout::new("Day A", vec![Exercise::new("Arnold Press", 3)]),
/// ]);
/// let options = GuardianOptions::new(PrimaryFocus::Strength, ExperienceLevel::Beginner);
///
/// let result = apply_guardian(program, &options);
/// assert_eq!(
///     result.program.workouts[0].main_exercises[0].name,
///     "Seated Dumbbell Shoulder Press"
/// );
/// ```
#[must_use]
pub fn apply_guardian(program: TrainingProgram, options: &GuardianOptions) -> GuardianResult {
    global_guardian().apply(program, options)
}
