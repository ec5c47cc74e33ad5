// ABOUTME: Adaptive load and fatigue model configuration
// ABOUTME: Configures fatigue discount, RPE thresholds, rounding, decay and deload parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adaptive Load Configuration
//!
//! Parameters for the two-stage load adjustment (proactive mesocycle fatigue
//! discount, then reactive RPE correction) and for the fatigue/deload model.
//!
//! # Scientific References
//!
//! - Zourdos, M.C., et al. (2016). Novel resistance training-specific rating of perceived
//!   exertion scale measuring repetitions in reserve. *J Strength Cond Res*, 30(1), 267-275.
//! - Banister, E.W. (1991). Modeling elite athletic performance.

use pierre_training_core::constants::load;
use serde::{Deserialize, Serialize};

/// Adaptive Load Configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdaptiveLoadConfig {
    /// Load discount per completed mesocycle week at recovery rate 1.0
    pub weekly_fatigue_discount: f64,
    /// RPE above which the next load is reduced
    pub high_rpe_threshold: f64,
    /// RPE below which the next load is increased
    pub low_rpe_threshold: f64,
    /// Multiplier applied after a high-RPE session
    pub high_rpe_multiplier: f64,
    /// Multiplier applied after a low-RPE session
    pub low_rpe_multiplier: f64,
    /// Weight granularity of recommendations
    pub rounding_increment: f64,
    /// Fraction of fatigue shed per session at recovery rate 1.0
    pub fatigue_decay_rate: f64,
    /// Deload settings
    pub deload: DeloadConfig,
}

/// Deload recommendation parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeloadConfig {
    /// Length of a recommended deload
    pub duration_days: u32,
    /// Volume reduction when cumulative fatigue exceeds the threshold
    pub fatigue_volume_reduction: f64,
    /// Intensity reduction when RPE is trending upward
    pub rpe_intensity_reduction: f64,
    /// Sessions of history required before a trend is reported
    pub trend_min_points: usize,
    /// First-to-last RPE change that counts as a trend
    pub trend_delta: f64,
}

impl Default for AdaptiveLoadConfig {
    fn default() -> Self {
        Self {
            weekly_fatigue_discount: load::WEEKLY_FATIGUE_DISCOUNT,
            high_rpe_threshold: load::HIGH_RPE_THRESHOLD,
            low_rpe_threshold: load::LOW_RPE_THRESHOLD,
            high_rpe_multiplier: load::HIGH_RPE_MULTIPLIER,
            low_rpe_multiplier: load::LOW_RPE_MULTIPLIER,
            rounding_increment: load::ROUNDING_INCREMENT,
            fatigue_decay_rate: load::FATIGUE_DECAY_RATE,
            deload: DeloadConfig::default(),
        }
    }
}

impl Default for DeloadConfig {
    fn default() -> Self {
        Self {
            duration_days: load::DELOAD_DURATION_DAYS,
            fatigue_volume_reduction: load::FATIGUE_DELOAD_VOLUME_REDUCTION,
            rpe_intensity_reduction: load::RPE_DELOAD_INTENSITY_REDUCTION,
            trend_min_points: load::RPE_TREND_MIN_POINTS,
            trend_delta: load::RPE_TREND_DELTA,
        }
    }
}
