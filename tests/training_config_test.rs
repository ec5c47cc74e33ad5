// ABOUTME: Tests for training configuration defaults, validation and environment overrides
// ABOUTME: Environment tests run serially since they mutate process-wide variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env::{self, VarError};

use pierre_training_engine::config::training::{ConfigError, TrainingConfig};
use pierre_training_engine::errors::{AppError, ErrorCode};
use serial_test::serial;

const ENV_VARS: &[&str] = &[
    "GUARDIAN_MAX_SETS_PER_EXERCISE",
    "GUARDIAN_MIN_SETS_PER_EXERCISE",
    "GUARDIAN_TIME_CAP_MINUTES",
    "GUARDIAN_ACCESSORY_PATTERNS",
    "ADAPTIVE_LOAD_WEEKLY_FATIGUE_DISCOUNT",
    "ADAPTIVE_LOAD_HIGH_RPE_THRESHOLD",
    "ADAPTIVE_LOAD_LOW_RPE_THRESHOLD",
    "ADAPTIVE_LOAD_ROUNDING_INCREMENT",
    "ADAPTIVE_LOAD_FATIGUE_DECAY_RATE",
];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_default_config_is_valid() {
    let config = TrainingConfig::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.guardian.max_sets_per_exercise, 5);
    assert_eq!(config.guardian.min_sets_per_exercise, 2);
    assert_eq!(config.guardian.time_capped_session_minutes, 45);
    assert_eq!(config.guardian.banned_exercises.len(), 1);
    assert!((config.adaptive_load.rounding_increment - 2.5).abs() < f64::EPSILON);
    assert_eq!(config.adaptive_load.deload.duration_days, 7);
}

#[test]
fn test_set_bounds_must_be_ordered() {
    let mut config = TrainingConfig::default();
    config.guardian.min_sets_per_exercise = 5;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_rpe_thresholds_must_be_ordered_and_on_scale() {
    let mut config = TrainingConfig::default();
    config.adaptive_load.low_rpe_threshold = 9.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));

    let mut config = TrainingConfig::default();
    config.adaptive_load.high_rpe_threshold = 11.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_invalid_load_parameters() {
    let mutations: [fn(&mut TrainingConfig); 5] = [
        |c| c.adaptive_load.rounding_increment = 0.0,
        |c| c.adaptive_load.fatigue_decay_rate = 0.0,
        |c| c.adaptive_load.high_rpe_multiplier = 1.2,
        |c| c.adaptive_load.deload.fatigue_volume_reduction = 1.0,
        |c| c.adaptive_load.deload.trend_min_points = 1,
    ];
    for mutate in mutations {
        let mut config = TrainingConfig::default();
        mutate(&mut config);
        assert!(config.validate().is_err(), "{config:?}");
    }
}

#[test]
fn test_nan_parameters_are_rejected() {
    let mutations: [fn(&mut TrainingConfig); 7] = [
        |c| c.adaptive_load.weekly_fatigue_discount = f64::NAN,
        |c| c.adaptive_load.high_rpe_multiplier = f64::NAN,
        |c| c.adaptive_load.low_rpe_multiplier = f64::NAN,
        |c| c.adaptive_load.rounding_increment = f64::NAN,
        |c| c.adaptive_load.fatigue_decay_rate = f64::NAN,
        |c| c.adaptive_load.deload.rpe_intensity_reduction = f64::NAN,
        |c| c.adaptive_load.deload.trend_delta = f64::NAN,
    ];
    for mutate in mutations {
        let mut config = TrainingConfig::default();
        mutate(&mut config);
        assert!(
            matches!(config.validate(), Err(ConfigError::ValueOutOfRange(_))),
            "{config:?}"
        );
    }
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error: AppError = ConfigError::ValueOutOfRange("rounding_increment must be positive").into();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("rounding_increment"));
    assert!(error.source.is_some());
}

#[test]
#[serial]
fn test_env_overrides_are_applied() {
    clear_env();
    env::set_var("GUARDIAN_MAX_SETS_PER_EXERCISE", "6");
    env::set_var("GUARDIAN_TIME_CAP_MINUTES", " 30 ");
    env::set_var("GUARDIAN_ACCESSORY_PATTERNS", " Raise, CURL ,, fly ");
    env::set_var("ADAPTIVE_LOAD_ROUNDING_INCREMENT", "5.0");

    let config = TrainingConfig::load().unwrap();
    clear_env();

    assert_eq!(config.guardian.max_sets_per_exercise, 6);
    assert_eq!(config.guardian.time_capped_session_minutes, 30);
    assert_eq!(config.guardian.accessory_patterns, vec!["raise", "curl", "fly"]);
    assert!((config.adaptive_load.rounding_increment - 5.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_unparseable_env_value_is_rejected() {
    clear_env();
    env::set_var("ADAPTIVE_LOAD_HIGH_RPE_THRESHOLD", "very hard");

    let result = TrainingConfig::load();
    clear_env();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_env_overrides_are_validated() {
    clear_env();
    env::set_var("GUARDIAN_MIN_SETS_PER_EXERCISE", "8");

    let result = TrainingConfig::load();
    clear_env();

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
#[serial]
fn test_load_without_env_matches_defaults() {
    clear_env();

    assert_eq!(TrainingConfig::load().unwrap(), TrainingConfig::default());
}

#[test]
#[serial]
fn test_nan_env_value_is_rejected() {
    clear_env();
    env::set_var("ADAPTIVE_LOAD_FATIGUE_DECAY_RATE", "NaN");

    let result = TrainingConfig::load();
    clear_env();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_unicode_env_value_is_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    clear_env();
    env::set_var("GUARDIAN_TIME_CAP_MINUTES", OsStr::from_bytes(b"4\xff5"));

    let result = TrainingConfig::load();
    clear_env();

    assert!(matches!(
        result,
        Err(ConfigError::EnvVar(VarError::NotUnicode(_)))
    ));
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_unicode_accessory_patterns_are_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    clear_env();
    env::set_var("GUARDIAN_ACCESSORY_PATTERNS", OsStr::from_bytes(b"raise,\xffcurl"));

    let result = TrainingConfig::load();
    clear_env();

    assert!(matches!(result, Err(ConfigError::EnvVar(_))));
}
