// ABOUTME: Cumulative fatigue tracking, RPE trend analysis and deload recommendations
// ABOUTME: Pure functions over caller-threaded fatigue totals and RPE history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fatigue Module
//!
//! Fatigue is an exponential-decay accumulator: each session sheds a share of
//! the running total (faster for athletes who recover faster) and adds that
//! session's fatigue. The caller stores the returned total and passes it back
//! next time.
//!
//! A deload is recommended for at most one reason, chosen by priority:
//! cumulative fatigue above the athlete's threshold beats a rising RPE trend.

use std::fmt;

use pierre_training_core::errors::{AppError, AppResult};
use pierre_training_core::models::RpeTrend;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::training::{AdaptiveLoadConfig, DeloadConfig, TrainingConfig};
use crate::intelligence::adaptive_load::validate_recovery_rate;

/// Why a deload was recommended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeloadTrigger {
    /// Cumulative fatigue exceeded the athlete's threshold
    FatigueThresholdExceeded,
    /// Perceived exertion has been rising for the same work
    RisingRpeTrend,
}

impl fmt::Display for DeloadTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FatigueThresholdExceeded => f.write_str("fatigue threshold exceeded"),
            Self::RisingRpeTrend => f.write_str("rising RPE trend"),
        }
    }
}

/// Deload decision
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeloadRecommendation {
    /// Whether a deload should be scheduled
    pub needed: bool,
    /// Highest-priority trigger, when a deload is needed
    pub trigger: Option<DeloadTrigger>,
    /// Deload length in days (0 when none is needed)
    pub duration_days: u32,
    /// Fractional reduction of training volume
    pub volume_reduction: f64,
    /// Fractional reduction of training intensity
    pub intensity_reduction: f64,
    /// Human-readable explanation
    pub reason: String,
}

impl DeloadRecommendation {
    fn not_needed() -> Self {
        Self {
            needed: false,
            trigger: None,
            duration_days: 0,
            volume_reduction: 0.0,
            intensity_reduction: 0.0,
            reason: "Fatigue and RPE trend within normal limits: no deload needed".into(),
        }
    }
}

/// Fatigue tracker
pub struct FatigueTracker;

impl FatigueTracker {
    /// Decay the running fatigue total and add a new session
    ///
    /// The retention factor `1 - decay_rate / recovery_rate` is floored at 0,
    /// so very slow recoverers keep all of the new session and none of the
    /// old total rather than going negative.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_RECOVERY_RATE` for a non-positive or non-finite
    /// recovery rate and `INVALID_INPUT` for negative fatigue values
    pub fn track(
        cumulative_fatigue: f64,
        session_fatigue: f64,
        recovery_rate: f64,
        config: &AdaptiveLoadConfig,
    ) -> AppResult<f64> {
        validate_recovery_rate(recovery_rate)?;
        validate_fatigue("Cumulative fatigue", cumulative_fatigue)?;
        validate_fatigue("Session fatigue", session_fatigue)?;

        let retention = (1.0 - config.fatigue_decay_rate / recovery_rate).max(0.0);
        Ok(cumulative_fatigue.mul_add(retention, session_fatigue))
    }

    /// Decide whether a deload is needed
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for negative fatigue or a non-positive threshold
    pub fn determine_deload_need(
        cumulative_fatigue: f64,
        fatigue_threshold: f64,
        trend: Option<RpeTrend>,
        config: &DeloadConfig,
    ) -> AppResult<DeloadRecommendation> {
        validate_fatigue("Cumulative fatigue", cumulative_fatigue)?;
        if !fatigue_threshold.is_finite() || fatigue_threshold <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Fatigue threshold must be positive, got {fatigue_threshold}"
            )));
        }

        let recommendation = if cumulative_fatigue > fatigue_threshold {
            DeloadRecommendation {
                needed: true,
                trigger: Some(DeloadTrigger::FatigueThresholdExceeded),
                duration_days: config.duration_days,
                volume_reduction: config.fatigue_volume_reduction,
                intensity_reduction: 0.0,
                reason: format!(
                    "Cumulative fatigue {cumulative_fatigue:.1} exceeds threshold {fatigue_threshold:.1}: {}-day deload with {:.0}% less volume",
                    config.duration_days,
                    config.fatigue_volume_reduction * 100.0
                ),
            }
        } else if trend == Some(RpeTrend::Increasing) {
            DeloadRecommendation {
                needed: true,
                trigger: Some(DeloadTrigger::RisingRpeTrend),
                duration_days: config.duration_days,
                volume_reduction: 0.0,
                intensity_reduction: config.rpe_intensity_reduction,
                reason: format!(
                    "RPE trending upward: {}-day deload with {:.0}% less intensity",
                    config.duration_days,
                    config.rpe_intensity_reduction * 100.0
                ),
            }
        } else {
            DeloadRecommendation::not_needed()
        };

        debug!(
            cumulative_fatigue,
            fatigue_threshold,
            trigger = ?recommendation.trigger,
            "Determined deload need"
        );
        Ok(recommendation)
    }

    /// Classify RPE history by comparing its first and last entries
    ///
    /// Histories shorter than the configured minimum are `Stable`.
    #[must_use]
    pub fn analyze_rpe_trend(history: &[f64], config: &DeloadConfig) -> RpeTrend {
        if history.len() < config.trend_min_points {
            return RpeTrend::Stable;
        }
        let (Some(&first), Some(&last)) = (history.first(), history.last()) else {
            return RpeTrend::Stable;
        };

        if last > first + config.trend_delta {
            RpeTrend::Increasing
        } else if last < first - config.trend_delta {
            RpeTrend::Decreasing
        } else {
            RpeTrend::Stable
        }
    }
}

fn validate_fatigue(label: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{label} must be a non-negative number, got {value}"
        )))
    }
}

/// Update cumulative fatigue using the global configuration
///
/// # Errors
///
/// See [`FatigueTracker::track`]
pub fn track_cumulative_fatigue(
    cumulative_fatigue: f64,
    session_fatigue: f64,
    recovery_rate: f64,
) -> AppResult<f64> {
    FatigueTracker::track(
        cumulative_fatigue,
        session_fatigue,
        recovery_rate,
        &TrainingConfig::global().adaptive_load,
    )
}

/// Decide whether a deload is needed using the global configuration
///
/// # Errors
///
/// See [`FatigueTracker::determine_deload_need`]
pub fn determine_deload_need(
    cumulative_fatigue: f64,
    fatigue_threshold: f64,
    trend: Option<RpeTrend>,
) -> AppResult<DeloadRecommendation> {
    FatigueTracker::determine_deload_need(
        cumulative_fatigue,
        fatigue_threshold,
        trend,
        &TrainingConfig::global().adaptive_load.deload,
    )
}

/// Classify RPE history using the global configuration
#[must_use]
pub fn analyze_rpe_trend(history: &[f64]) -> RpeTrend {
    FatigueTracker::analyze_rpe_trend(history, &TrainingConfig::global().adaptive_load.deload)
}
