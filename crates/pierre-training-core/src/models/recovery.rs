// ABOUTME: Recovery profile, session feedback and RPE trend inputs for load autoregulation
// ABOUTME: Caller-owned state threaded through the stateless adaptive load engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-athlete recovery characteristics, supplied by the caller on every call
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryProfile {
    /// Recovery speed multiplier (> 1.0 recovers faster than average)
    pub recovery_rate: f64,
    /// Cumulative fatigue ceiling before a deload is forced
    pub fatigue_threshold: f64,
}

impl RecoveryProfile {
    /// Create a recovery profile
    #[must_use]
    pub const fn new(recovery_rate: f64, fatigue_threshold: f64) -> Self {
        Self {
            recovery_rate,
            fatigue_threshold,
        }
    }
}

impl Default for RecoveryProfile {
    fn default() -> Self {
        Self {
            recovery_rate: 1.0,
            fatigue_threshold: 100.0,
        }
    }
}

/// Feedback from the previous session of an exercise
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionFeedback {
    /// Perceived exertion on the 0-10 scale
    #[serde(rename = "lastSessionRPE")]
    pub last_session_rpe: f64,
    /// Sets x reps x load for the session
    pub total_volume: f64,
    /// Free-text athlete notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SessionFeedback {
    /// Feedback carrying only an RPE and volume
    #[must_use]
    pub const fn new(last_session_rpe: f64, total_volume: f64) -> Self {
        Self {
            last_session_rpe,
            total_volume,
            notes: None,
        }
    }
}

/// Direction of perceived exertion across recent sessions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum RpeTrend {
    /// Same loads feel harder over time
    Increasing,
    /// Same loads feel easier over time
    Decreasing,
    /// No meaningful change, or too little history
    #[default]
    Stable,
}

impl fmt::Display for RpeTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increasing => f.write_str("increasing"),
            Self::Decreasing => f.write_str("decreasing"),
            Self::Stable => f.write_str("stable"),
        }
    }
}
