// ABOUTME: Adaptive per-session load recommendations from mesocycle fatigue and RPE feedback
// ABOUTME: Two-stage adjustment with plate rounding plus an RPE-aware one-rep-max estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adaptive Load Module
//!
//! Recommends the working weight for the next session of an exercise:
//!
//! 1. **Proactive fatigue discount** - the base weight is reduced by
//!    `(week - 1) * discount / recovery_rate`, anticipating fatigue that
//!    accumulates over a mesocycle.
//! 2. **Reactive RPE correction** - a hard last session (RPE above the high
//!    threshold) lowers the load, an easy one (below the low threshold)
//!    raises it.
//!
//! The result is rounded to plate granularity, never below one increment,
//! and every step that changed the weight is recorded in `reasoning`, in the
//! order it was applied.
//!
//! # Scientific References
//!
//! - Helms, E.R., et al. (2016). Application of the repetitions in reserve-based rating of
//!   perceived exertion scale for resistance training. *Strength Cond J*, 38(4), 42-49.
//! - Epley, B. (1985). Poundage chart. *Boyd Epley Workout*.

use pierre_training_core::constants::load;
use pierre_training_core::errors::{AppError, AppResult};
use pierre_training_core::models::{RecoveryProfile, SessionFeedback};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::training::{AdaptiveLoadConfig, TrainingConfig};

/// Recommended load for the next session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoadRecommendation {
    /// Weight the recommendation started from
    pub base_weight: f64,
    /// Rounded weight to use next session
    pub recommended_weight: f64,
    /// Change relative to `base_weight`, in percent
    pub percentage_change: f64,
    /// Every adjustment applied, in application order
    pub reasoning: Vec<String>,
}

/// Adaptive load calculator
pub struct AdaptiveLoadCalculator;

impl AdaptiveLoadCalculator {
    /// Recommend the next session's load
    ///
    /// # Errors
    ///
    /// Returns `INVALID_RECOVERY_RATE` for a non-positive or non-finite
    /// recovery rate, and `INVALID_INPUT` for a non-positive base weight,
    /// week 0, an RPE outside 0-10, or a fatigue discount that would drive
    /// the weight to zero or below
    pub fn calculate(
        base_weight: f64,
        week_in_mesocycle: u32,
        profile: &RecoveryProfile,
        feedback: &SessionFeedback,
        config: &AdaptiveLoadConfig,
    ) -> AppResult<LoadRecommendation> {
        Self::validate_inputs(base_weight, week_in_mesocycle, profile, feedback)?;

        let mut reasoning = Vec::new();

        let reduction = f64::from(week_in_mesocycle - 1) * config.weekly_fatigue_discount
            / profile.recovery_rate;
        let mut weight = base_weight * (1.0 - reduction);
        if weight <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Fatigue discount of {:.1}% in week {week_in_mesocycle} leaves no working weight",
                reduction * 100.0
            )));
        }
        if reduction > 0.0 {
            reasoning.push(format!(
                "Week {week_in_mesocycle} of mesocycle: reduced load by {:.1}% for accumulated fatigue (recovery rate {:.2})",
                reduction * 100.0,
                profile.recovery_rate
            ));
        }

        let rpe = feedback.last_session_rpe;
        if rpe > config.high_rpe_threshold {
            weight *= config.high_rpe_multiplier;
            reasoning.push(format!(
                "Last session RPE {rpe:.1} above {:.1}: reduced load by {:.0}%",
                config.high_rpe_threshold,
                (1.0 - config.high_rpe_multiplier) * 100.0
            ));
        } else if rpe < config.low_rpe_threshold {
            weight *= config.low_rpe_multiplier;
            reasoning.push(format!(
                "Last session RPE {rpe:.1} below {:.1}: increased load by {:.0}%",
                config.low_rpe_threshold,
                (config.low_rpe_multiplier - 1.0) * 100.0
            ));
        } else {
            reasoning.push(format!(
                "Last session RPE {rpe:.1} within target range: no intensity change"
            ));
        }

        let mut recommended_weight = round_to_increment(weight, config.rounding_increment);
        if recommended_weight < config.rounding_increment {
            recommended_weight = config.rounding_increment;
            reasoning.push(format!(
                "Rounded up to the smallest increment of {:.1}",
                config.rounding_increment
            ));
        }
        let percentage_change = (recommended_weight - base_weight) / base_weight * 100.0;

        debug!(
            base_weight,
            week_in_mesocycle,
            rpe,
            recommended_weight,
            "Calculated adaptive load"
        );

        Ok(LoadRecommendation {
            base_weight,
            recommended_weight,
            percentage_change,
            reasoning,
        })
    }

    fn validate_inputs(
        base_weight: f64,
        week_in_mesocycle: u32,
        profile: &RecoveryProfile,
        feedback: &SessionFeedback,
    ) -> AppResult<()> {
        validate_recovery_rate(profile.recovery_rate)?;
        if !base_weight.is_finite() || base_weight <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Base weight must be positive, got {base_weight}"
            )));
        }
        if week_in_mesocycle == 0 {
            return Err(AppError::invalid_input(
                "Week in mesocycle starts at 1, got 0",
            ));
        }
        validate_rpe(feedback.last_session_rpe)
    }

    /// Estimate a one-rep max from a set, accounting for reps left in reserve
    ///
    /// Uses the Epley formula on effective reps (`reps + (10 - rpe)`); a
    /// single rep at RPE 10 returns the weight itself.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for a non-positive weight, zero reps, or an
    /// RPE outside 0-10
    pub fn estimate_one_rep_max(weight: f64, reps: u32, rpe: f64) -> AppResult<f64> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Weight must be positive, got {weight}"
            )));
        }
        if reps == 0 {
            return Err(AppError::invalid_input("At least one rep is required"));
        }
        validate_rpe(rpe)?;

        let effective_reps = f64::from(reps) + (load::MAX_RPE - rpe);
        if effective_reps <= 1.0 {
            return Ok(weight);
        }
        Ok(weight * (1.0 + effective_reps / load::EPLEY_DIVISOR))
    }
}

pub(crate) fn validate_recovery_rate(recovery_rate: f64) -> AppResult<()> {
    if recovery_rate.is_finite() && recovery_rate > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_recovery_rate(recovery_rate))
    }
}

fn validate_rpe(rpe: f64) -> AppResult<()> {
    if (0.0..=load::MAX_RPE).contains(&rpe) {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "RPE must be between 0 and {}, got {rpe}",
            load::MAX_RPE
        )))
    }
}

fn round_to_increment(weight: f64, increment: f64) -> f64 {
    (weight / increment).round() * increment
}

/// Recommend the next session's load using the global configuration
///
/// # Errors
///
/// See [`AdaptiveLoadCalculator::calculate`]
pub fn calculate_adaptive_load(
    base_weight: f64,
    week_in_mesocycle: u32,
    profile: &RecoveryProfile,
    feedback: &SessionFeedback,
) -> AppResult<LoadRecommendation> {
    AdaptiveLoadCalculator::calculate(
        base_weight,
        week_in_mesocycle,
        profile,
        feedback,
        &TrainingConfig::global().adaptive_load,
    )
}

/// Estimate a one-rep max from weight, reps and RPE
///
/// # Errors
///
/// See [`AdaptiveLoadCalculator::estimate_one_rep_max`]
pub fn estimate_one_rep_max(weight: f64, reps: u32, rpe: f64) -> AppResult<f64> {
    AdaptiveLoadCalculator::estimate_one_rep_max(weight, reps, rpe)
}
