// ABOUTME: Training engine configuration orchestrating guardian and adaptive load settings
// ABOUTME: Provides defaults, environment overrides, validation and a lazily loaded global
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training Configuration Module
//!
//! Type-safe configuration for the program guardian and the adaptive load
//! engine.
//!
//! # Module Structure
//!
//! - `guardian` - Set bounds, time cap, accessory taxonomy and banned exercises
//! - `adaptive_load` - Fatigue discount, RPE thresholds, rounding and deload parameters
//! - `error` - Validation and parsing errors
//!
//! Loading follows a fixed order: defaults, then environment overrides, then
//! validation.

pub mod adaptive_load;
pub mod error;
pub mod guardian;

pub use adaptive_load::{AdaptiveLoadConfig, DeloadConfig};
pub use error::ConfigError;
pub use guardian::{BannedExercise, GuardianConfig};

use std::env::{self, VarError};
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Global configuration singleton
static TRAINING_CONFIG: OnceLock<TrainingConfig> = OnceLock::new();

/// Main training engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrainingConfig {
    /// Configuration for the program guardian
    pub guardian: GuardianConfig,
    /// Configuration for the adaptive load and fatigue model
    pub adaptive_load: AdaptiveLoadConfig,
}

impl TrainingConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        TRAINING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load training config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_guardian()?;
        self.validate_adaptive_load()
    }

    fn validate_guardian(&self) -> Result<(), ConfigError> {
        let guardian = &self.guardian;

        if guardian.min_sets_per_exercise == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_sets_per_exercise must be at least 1",
            ));
        }
        if guardian.min_sets_per_exercise >= guardian.max_sets_per_exercise {
            return Err(ConfigError::InvalidRange(
                "min_sets_per_exercise must be < max_sets_per_exercise",
            ));
        }
        if guardian.max_harmonization_passes == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_harmonization_passes must be at least 1",
            ));
        }
        if guardian
            .accessory_patterns
            .iter()
            .all(|pattern| pattern.trim().is_empty())
        {
            return Err(ConfigError::ValueOutOfRange(
                "accessory_patterns must contain at least one pattern",
            ));
        }
        if guardian
            .banned_exercises
            .iter()
            .any(|b| b.name.trim().is_empty() || b.substitute.trim().is_empty())
        {
            return Err(ConfigError::ValueOutOfRange(
                "banned exercises need a non-empty name and substitute",
            ));
        }

        Ok(())
    }

    fn validate_adaptive_load(&self) -> Result<(), ConfigError> {
        let load = &self.adaptive_load;

        if !(0.0..1.0).contains(&load.weekly_fatigue_discount) {
            return Err(ConfigError::ValueOutOfRange(
                "weekly_fatigue_discount must be in [0, 1)",
            ));
        }
        if !(0.0..=10.0).contains(&load.low_rpe_threshold)
            || !(0.0..=10.0).contains(&load.high_rpe_threshold)
        {
            return Err(ConfigError::ValueOutOfRange(
                "RPE thresholds must be within the 0-10 scale",
            ));
        }
        if load.low_rpe_threshold >= load.high_rpe_threshold {
            return Err(ConfigError::InvalidRange(
                "low_rpe_threshold must be < high_rpe_threshold",
            ));
        }
        // Range checks reject NaN, which fails every comparison
        let positive_fraction = |value: f64| value > 0.0 && value <= 1.0;

        if !positive_fraction(load.high_rpe_multiplier) {
            return Err(ConfigError::ValueOutOfRange(
                "high_rpe_multiplier must be in (0, 1]",
            ));
        }
        if !(1.0..).contains(&load.low_rpe_multiplier) || !load.low_rpe_multiplier.is_finite() {
            return Err(ConfigError::ValueOutOfRange(
                "low_rpe_multiplier must be >= 1",
            ));
        }
        if load.rounding_increment <= 0.0 || !load.rounding_increment.is_finite() {
            return Err(ConfigError::ValueOutOfRange(
                "rounding_increment must be positive",
            ));
        }
        if !positive_fraction(load.fatigue_decay_rate) {
            return Err(ConfigError::ValueOutOfRange(
                "fatigue_decay_rate must be in (0, 1]",
            ));
        }

        let deload = &load.deload;
        if deload.duration_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "deload duration must be at least one day",
            ));
        }
        let in_unit_interval = |value: f64| value > 0.0 && value < 1.0;
        if !in_unit_interval(deload.fatigue_volume_reduction)
            || !in_unit_interval(deload.rpe_intensity_reduction)
        {
            return Err(ConfigError::ValueOutOfRange(
                "deload reductions must be in (0, 1)",
            ));
        }
        if deload.trend_min_points < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "trend_min_points must be at least 2",
            ));
        }
        if !(0.0..).contains(&deload.trend_delta) || !deload.trend_delta.is_finite() {
            return Err(ConfigError::ValueOutOfRange(
                "trend_delta must be finite and non-negative",
            ));
        }

        Ok(())
    }

    /// Read an environment variable; unset is `None`, non-UTF-8 is an error
    fn read_env_var(env_var_name: &str) -> Result<Option<String>, ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => Ok(Some(val)),
            Err(VarError::NotPresent) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Helper function to apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Some(val) = Self::read_env_var(env_var_name)? {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Guardian overrides
        Self::apply_env_var(
            "GUARDIAN_MAX_SETS_PER_EXERCISE",
            &mut self.guardian.max_sets_per_exercise,
        )?;
        Self::apply_env_var(
            "GUARDIAN_MIN_SETS_PER_EXERCISE",
            &mut self.guardian.min_sets_per_exercise,
        )?;
        Self::apply_env_var(
            "GUARDIAN_TIME_CAP_MINUTES",
            &mut self.guardian.time_capped_session_minutes,
        )?;
        if let Some(patterns) = Self::read_env_var("GUARDIAN_ACCESSORY_PATTERNS")? {
            self.guardian.accessory_patterns = patterns
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_lowercase)
                .collect();
        }

        // Adaptive load overrides
        Self::apply_env_var(
            "ADAPTIVE_LOAD_WEEKLY_FATIGUE_DISCOUNT",
            &mut self.adaptive_load.weekly_fatigue_discount,
        )?;
        Self::apply_env_var(
            "ADAPTIVE_LOAD_HIGH_RPE_THRESHOLD",
            &mut self.adaptive_load.high_rpe_threshold,
        )?;
        Self::apply_env_var(
            "ADAPTIVE_LOAD_LOW_RPE_THRESHOLD",
            &mut self.adaptive_load.low_rpe_threshold,
        )?;
        Self::apply_env_var(
            "ADAPTIVE_LOAD_ROUNDING_INCREMENT",
            &mut self.adaptive_load.rounding_increment,
        )?;
        Self::apply_env_var(
            "ADAPTIVE_LOAD_FATIGUE_DECAY_RATE",
            &mut self.adaptive_load.fatigue_decay_rate,
        )?;

        Ok(self)
    }
}
