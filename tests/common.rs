// ABOUTME: Shared test utilities for training engine integration tests
// ABOUTME: Quiet tracing setup plus builders for programs, workouts and guardian options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    dead_code,
    missing_docs
)]

use std::env;
use std::sync::Once;

use pierre_training_engine::models::{
    Exercise, ExperienceLevel, GuardianOptions, PrimaryFocus, TrainingProgram, Workout,
};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls verbosity, WARN keeps test output clean by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Workout from `(name, sets)` pairs
pub fn workout(focus: &str, exercises: &[(&str, u32)]) -> Workout {
    Workout::new(
        focus,
        exercises
            .iter()
            .map(|&(name, sets)| Exercise::new(name, sets))
            .collect(),
    )
}

/// Program from workouts
pub fn program(workouts: Vec<Workout>) -> TrainingProgram {
    TrainingProgram::new(workouts)
}

/// Strength options with no day count, so only volume and substitution apply
pub fn strength_options() -> GuardianOptions {
    GuardianOptions::new(PrimaryFocus::Strength, ExperienceLevel::Beginner)
}

/// Six-day advanced hypertrophy options
pub fn six_day_hypertrophy() -> GuardianOptions {
    GuardianOptions::new(PrimaryFocus::Hypertrophy, ExperienceLevel::Advanced).with_training_days(6)
}

/// Compound-only workout: nothing here is an accessory, so volume is never adjusted
pub fn compound_day(focus: &str) -> Workout {
    workout(focus, &[("Bench Press", 3), ("Barbell Back Squat", 3)])
}
