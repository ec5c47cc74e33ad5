// ABOUTME: Training constants for weekly volume targets, guardian limits and load adjustments
// ABOUTME: Fixed values shared by the guardian, the adaptive load engine and their configs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training constants organized by domain.
//!
//! Weekly volume targets are fixed constants and are never adjusted at
//! runtime. Guardian and load-engine values here are the defaults that the
//! engine's configuration layer starts from.

/// Service identity used in structured logs
pub mod service_names {
    /// Service name reported by the logging layer
    pub const PIERRE_TRAINING_ENGINE: &str = "pierre-training-engine";
}

/// Weekly per-muscle working-set targets
///
/// References:
/// - Schoenfeld, B.J., Ogborn, D., & Krieger, J.W. (2017). Dose-response relationship between
///   weekly resistance training volume and increases in muscle mass. *J Sports Sci*, 35(11).
pub mod volume {
    /// Strength focus: minimum weekly sets per muscle
    pub const STRENGTH_MIN_SETS: u32 = 10;
    /// Strength focus: maximum weekly sets per muscle
    pub const STRENGTH_MAX_SETS: u32 = 15;

    /// General fitness focus: minimum weekly sets per muscle
    pub const GENERAL_FITNESS_MIN_SETS: u32 = 6;
    /// General fitness focus: maximum weekly sets per muscle
    pub const GENERAL_FITNESS_MAX_SETS: u32 = 9;

    /// Hypertrophy, beginner: minimum weekly sets per muscle
    pub const HYPERTROPHY_BEGINNER_MIN_SETS: u32 = 12;
    /// Hypertrophy, beginner: maximum weekly sets per muscle
    pub const HYPERTROPHY_BEGINNER_MAX_SETS: u32 = 14;
    /// Hypertrophy, intermediate: minimum weekly sets per muscle
    pub const HYPERTROPHY_INTERMEDIATE_MIN_SETS: u32 = 12;
    /// Hypertrophy, intermediate: maximum weekly sets per muscle
    pub const HYPERTROPHY_INTERMEDIATE_MAX_SETS: u32 = 18;
    /// Hypertrophy, advanced: minimum weekly sets per muscle
    pub const HYPERTROPHY_ADVANCED_MIN_SETS: u32 = 14;
    /// Hypertrophy, advanced: maximum weekly sets per muscle
    pub const HYPERTROPHY_ADVANCED_MAX_SETS: u32 = 20;
}

/// Program guardian defaults
pub mod guardian {
    /// Per-exercise set cap when adding volume
    pub const MAX_SETS_PER_EXERCISE: u32 = 5;
    /// Per-exercise floor when trimming volume
    pub const MIN_SETS_PER_EXERCISE: u32 = 2;
    /// Sessions at or below this length never receive extra sets
    pub const TIME_CAPPED_SESSION_MINUTES: u32 = 45;
    /// Upper bound on full harmonization passes over all muscles
    pub const MAX_HARMONIZATION_PASSES: u32 = 16;
    /// Smallest supported training week
    pub const MIN_TRAINING_DAYS: u8 = 2;
    /// Largest supported training week
    pub const MAX_TRAINING_DAYS: u8 = 6;

    /// Name fragments that identify accessory (typically single-joint) exercises
    pub const DEFAULT_ACCESSORY_PATTERNS: &[&str] = &[
        "raise",
        "curl",
        "extension",
        "fly",
        "pulldown",
        "pushdown",
        "face pull",
        "lateral",
    ];

    /// Exercises replaced on sight, paired with their substitute
    pub const DEFAULT_BANNED_EXERCISES: &[(&str, &str)] =
        &[("Arnold Press", "Seated Dumbbell Shoulder Press")];
}

/// Adaptive load and fatigue model defaults
///
/// References:
/// - Helms, E.R., et al. (2016). Application of the repetitions in reserve-based rating of
///   perceived exertion scale for resistance training. *Strength Cond J*, 38(4), 42-49.
pub mod load {
    /// Load discount per completed mesocycle week (fraction of base weight)
    pub const WEEKLY_FATIGUE_DISCOUNT: f64 = 0.05;
    /// Last-session RPE above which load is reduced
    pub const HIGH_RPE_THRESHOLD: f64 = 8.5;
    /// Last-session RPE below which load is increased
    pub const LOW_RPE_THRESHOLD: f64 = 7.5;
    /// Load multiplier after a high-RPE session
    pub const HIGH_RPE_MULTIPLIER: f64 = 0.95;
    /// Load multiplier after a low-RPE session
    pub const LOW_RPE_MULTIPLIER: f64 = 1.03;
    /// Plate granularity for rounded recommendations
    pub const ROUNDING_INCREMENT: f64 = 2.5;
    /// Fraction of cumulative fatigue shed per session at recovery rate 1.0
    pub const FATIGUE_DECAY_RATE: f64 = 0.3;
    /// Length of a recommended deload
    pub const DELOAD_DURATION_DAYS: u32 = 7;
    /// Volume reduction for a fatigue-triggered deload
    pub const FATIGUE_DELOAD_VOLUME_REDUCTION: f64 = 0.5;
    /// Intensity reduction for an RPE-trend-triggered deload
    pub const RPE_DELOAD_INTENSITY_REDUCTION: f64 = 0.2;
    /// Minimum history length before an RPE trend is reported
    pub const RPE_TREND_MIN_POINTS: usize = 3;
    /// RPE change between first and last session that counts as a trend
    pub const RPE_TREND_DELTA: f64 = 1.0;
    /// Top of the RPE scale
    pub const MAX_RPE: f64 = 10.0;
    /// Epley formula divisor
    pub const EPLEY_DIVISOR: f64 = 30.0;
}
