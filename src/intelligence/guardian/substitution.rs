// ABOUTME: Banned exercise detection and replacement with configured safe substitutes
// ABOUTME: Compiles each banned name into a case-insensitive whole-phrase regex
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_training_core::models::TrainingProgram;
use regex::Regex;
use tracing::debug;

use super::volume::is_accessory;
use crate::config::training::{BannedExercise, ConfigError};
use crate::intelligence::muscle_mapper::map_exercise_to_muscles;

/// A compiled substitution rule
#[derive(Debug, Clone)]
pub(super) struct Substitution {
    pattern: Regex,
    name: String,
    substitute: String,
}

impl Substitution {
    /// Compile a banned exercise into a matcher
    ///
    /// Words match case-insensitively at word boundaries and may be separated
    /// by any run of whitespace, hyphens or underscores.
    pub(super) fn compile(rule: &BannedExercise) -> Result<Self, ConfigError> {
        let words: Vec<String> = rule
            .name
            .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .filter(|word| !word.is_empty())
            .map(regex::escape)
            .collect();
        if words.is_empty() {
            return Err(ConfigError::InvalidPattern {
                pattern: rule.name.clone(),
                reason: "banned exercise name is empty".into(),
            });
        }

        let source = format!(r"(?i)\b{}\b", words.join(r"[\s\-_]+"));
        let pattern = Regex::new(&source).map_err(|e| ConfigError::InvalidPattern {
            pattern: rule.name.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            pattern,
            name: rule.name.clone(),
            substitute: rule.substitute.clone(),
        })
    }

    fn matches(&self, exercise_name: &str) -> bool {
        self.pattern.is_match(exercise_name)
    }

    fn rejected(&self, reason: String) -> ConfigError {
        ConfigError::InvalidPattern {
            pattern: self.name.clone(),
            reason,
        }
    }
}

/// Check that substitution is a fixed point of the whole guardian
///
/// Substitution runs after volume harmonization, so a substitute must not be
/// banned by any rule (including its own), must train the same muscles as
/// the banned exercise and must share its accessory status. Otherwise a
/// second run would replace or re-harmonize it.
pub(super) fn validate_substitutes(
    substitutions: &[Substitution],
    accessory_patterns: &[String],
) -> Result<(), ConfigError> {
    for rule in substitutions {
        if let Some(banning) = substitutions.iter().find(|s| s.matches(&rule.substitute)) {
            return Err(rule.rejected(format!(
                "substitute \"{}\" is banned by \"{}\"",
                rule.substitute, banning.name
            )));
        }
        if map_exercise_to_muscles(&rule.name) != map_exercise_to_muscles(&rule.substitute) {
            return Err(rule.rejected(format!(
                "substitute \"{}\" trains different muscles",
                rule.substitute
            )));
        }
        if is_accessory(accessory_patterns, &rule.name)
            != is_accessory(accessory_patterns, &rule.substitute)
        {
            return Err(rule.rejected(format!(
                "substitute \"{}\" differs in accessory status",
                rule.substitute
            )));
        }
    }
    Ok(())
}

/// Replace every banned exercise in the program with its substitute
pub(super) fn substitute_banned(
    program: &mut TrainingProgram,
    substitutions: &[Substitution],
    corrections: &mut Vec<String>,
) {
    for (index, workout) in program.workouts.iter_mut().enumerate() {
        for exercise in &mut workout.main_exercises {
            let Some(rule) = substitutions.iter().find(|s| s.matches(&exercise.name)) else {
                continue;
            };
            debug!(
                banned = %rule.name,
                exercise = %exercise.name,
                substitute = %rule.substitute,
                workout = index + 1,
                "Replaced banned exercise"
            );
            corrections.push(format!(
                "Replaced banned exercise \"{}\" with \"{}\" on workout {}",
                exercise.name,
                rule.substitute,
                index + 1
            ));
            rule.substitute.clone_into(&mut exercise.name);
        }
    }
}
