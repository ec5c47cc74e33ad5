// ABOUTME: Day-split template enforcement for generated training programs
// ABOUTME: Relabels, trims or pads workouts so the week follows the expected split pattern
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_training_core::models::{GuardianOptions, PrimaryFocus, TrainingProgram};
use tracing::{debug, warn};

const FULL_BODY_X2: &[&str] = &["Full Body", "Full Body"];
const UPPER_LOWER_FULL: &[&str] = &["Upper", "Lower", "Full Body"];
const UPPER_LOWER_X2: &[&str] = &["Upper", "Lower", "Upper", "Lower"];
const PPL_UPPER_LOWER: &[&str] = &["Push", "Pull", "Legs", "Upper", "Lower"];
const UPPER_LOWER_X3: &[&str] = &["Upper", "Lower", "Upper", "Lower", "Upper", "Lower"];
const PPL_X2: &[&str] = &["Push", "Pull", "Legs", "Push", "Pull", "Legs"];

/// Expected focus label for each training day, if a template exists
///
/// Returns `None` when no day count was requested or it lies outside 2-6.
#[must_use]
pub fn expected_template(options: &GuardianOptions) -> Option<&'static [&'static str]> {
    let days = options.supported_training_days()?;
    let template = match (days, options.primary_focus) {
        (2, _) => FULL_BODY_X2,
        (3, _) => UPPER_LOWER_FULL,
        (4, _) => UPPER_LOWER_X2,
        (5, _) => PPL_UPPER_LOWER,
        (_, PrimaryFocus::Strength) => UPPER_LOWER_X3,
        _ => PPL_X2,
    };
    Some(template)
}

/// Lower-case alphanumerics only, so "Full-Body" and "full body" compare equal
pub(super) fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Loose match: the workout's focus contains the expected label
fn focus_matches(focus: &str, expected: &str) -> bool {
    normalize_label(focus).contains(&normalize_label(expected))
}

/// Bring the program in line with its day-split template
pub(super) fn enforce_template(
    program: &mut TrainingProgram,
    options: &GuardianOptions,
    corrections: &mut Vec<String>,
) {
    if program.workouts.is_empty() {
        return;
    }
    let Some(template) = expected_template(options) else {
        warn!(
            training_days_per_week = ?options.training_days_per_week,
            "No split template for requested day count, skipping template enforcement"
        );
        return;
    };

    let original_len = program.workouts.len();
    if original_len > template.len() {
        program.workouts.truncate(template.len());
        corrections.push(format!(
            "Trimmed program from {original_len} to {} workouts to match {}-day template",
            template.len(),
            template.len()
        ));
    } else if original_len < template.len() {
        pad_with_clones(program, template, corrections);
    }

    for (index, (workout, &expected)) in program.workouts.iter_mut().zip(template).enumerate() {
        if focus_matches(&workout.focus, expected) {
            continue;
        }
        corrections.push(format!(
            "Renamed focus \"{}\" → \"{expected}\" on workout {}",
            workout.focus,
            index + 1
        ));
        debug!(workout = index + 1, from = %workout.focus, to = expected, "Renamed workout focus");
        expected.clone_into(&mut workout.name);
        expected.clone_into(&mut workout.focus);
    }
}

/// Clone the last workout into every missing slot, labelled for that slot
fn pad_with_clones(
    program: &mut TrainingProgram,
    template: &[&str],
    corrections: &mut Vec<String>,
) {
    let source_index = program.workouts.len() - 1;
    let source = program.workouts[source_index].clone();

    for (slot, &label) in template.iter().enumerate().skip(program.workouts.len()) {
        let mut clone = source.clone();
        label.clone_into(&mut clone.name);
        label.clone_into(&mut clone.focus);
        program.workouts.push(clone);
        corrections.push(format!(
            "Added workout {} (\"{label}\") cloned from workout {}",
            slot + 1,
            source_index + 1
        ));
    }
}
