// ABOUTME: Guardian options and weekly volume targets keyed by focus and experience
// ABOUTME: Defines PrimaryFocus, ExperienceLevel, GuardianOptions and VolumeRange
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{guardian, volume};

/// Primary training goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryFocus {
    /// Muscle growth
    Hypertrophy,
    /// Maximal strength
    Strength,
    /// General health and conditioning
    GeneralFitness,
}

/// Training age of the athlete
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// Less than about a year of consistent training
    Beginner,
    /// One to three years
    Intermediate,
    /// Three or more years
    Advanced,
}

/// Read-only inputs steering the program guardian
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GuardianOptions {
    /// Primary training goal
    pub primary_focus: PrimaryFocus,
    /// Training age of the athlete
    pub experience_level: ExperienceLevel,
    /// Requested training days per week (2-6)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_days_per_week: Option<u8>,
    /// Session length budget in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_duration_minutes: Option<u32>,
}

impl GuardianOptions {
    /// Options with no day count and no session time budget
    #[must_use]
    pub const fn new(primary_focus: PrimaryFocus, experience_level: ExperienceLevel) -> Self {
        Self {
            primary_focus,
            experience_level,
            training_days_per_week: None,
            session_duration_minutes: None,
        }
    }

    /// Set the requested training days per week
    #[must_use]
    pub const fn with_training_days(mut self, days: u8) -> Self {
        self.training_days_per_week = Some(days);
        self
    }

    /// Set the session length budget
    #[must_use]
    pub const fn with_session_duration(mut self, minutes: u32) -> Self {
        self.session_duration_minutes = Some(minutes);
        self
    }

    /// Requested day count, if it lies in the supported 2-6 range
    #[must_use]
    pub fn supported_training_days(&self) -> Option<u8> {
        self.training_days_per_week
            .filter(|days| (guardian::MIN_TRAINING_DAYS..=guardian::MAX_TRAINING_DAYS).contains(days))
    }

    /// Weekly per-muscle set target for these options
    #[must_use]
    pub const fn volume_range(&self) -> VolumeRange {
        VolumeRange::expected(self.primary_focus, self.experience_level)
    }
}

/// Weekly working-set target for a single muscle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VolumeRange {
    /// Fewest acceptable weekly sets
    pub min: u32,
    /// Most acceptable weekly sets
    pub max: u32,
}

impl VolumeRange {
    /// Fixed target for a focus and experience level
    #[must_use]
    pub const fn expected(focus: PrimaryFocus, level: ExperienceLevel) -> Self {
        match (focus, level) {
            (PrimaryFocus::Strength, _) => Self {
                min: volume::STRENGTH_MIN_SETS,
                max: volume::STRENGTH_MAX_SETS,
            },
            (PrimaryFocus::GeneralFitness, _) => Self {
                min: volume::GENERAL_FITNESS_MIN_SETS,
                max: volume::GENERAL_FITNESS_MAX_SETS,
            },
            (PrimaryFocus::Hypertrophy, ExperienceLevel::Beginner) => Self {
                min: volume::HYPERTROPHY_BEGINNER_MIN_SETS,
                max: volume::HYPERTROPHY_BEGINNER_MAX_SETS,
            },
            (PrimaryFocus::Hypertrophy, ExperienceLevel::Intermediate) => Self {
                min: volume::HYPERTROPHY_INTERMEDIATE_MIN_SETS,
                max: volume::HYPERTROPHY_INTERMEDIATE_MAX_SETS,
            },
            (PrimaryFocus::Hypertrophy, ExperienceLevel::Advanced) => Self {
                min: volume::HYPERTROPHY_ADVANCED_MIN_SETS,
                max: volume::HYPERTROPHY_ADVANCED_MAX_SETS,
            },
        }
    }

    /// Whether `sets` lies within the range (inclusive)
    #[must_use]
    pub const fn contains(self, sets: u32) -> bool {
        sets >= self.min && sets <= self.max
    }
}

impl fmt::Display for VolumeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hypertrophy_scales_with_experience() {
        let beginner = VolumeRange::expected(PrimaryFocus::Hypertrophy, ExperienceLevel::Beginner);
        let advanced = VolumeRange::expected(PrimaryFocus::Hypertrophy, ExperienceLevel::Advanced);
        assert_eq!((beginner.min, beginner.max), (12, 14));
        assert_eq!((advanced.min, advanced.max), (14, 20));
    }

    #[test]
    fn test_unsupported_day_counts_are_filtered() {
        let options = GuardianOptions::new(PrimaryFocus::Strength, ExperienceLevel::Beginner);
        assert_eq!(options.clone().with_training_days(7).supported_training_days(), None);
        assert_eq!(options.with_training_days(4).supported_training_days(), Some(4));
    }
}
