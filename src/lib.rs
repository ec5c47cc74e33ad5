// ABOUTME: Main library entry point for the Pierre training engine
// ABOUTME: Program guardian, muscle volume mapping and adaptive load autoregulation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Training Engine
//!
//! Deterministic, side-effect free corrections and recommendations for
//! strength and hypertrophy programming.
//!
//! ## Features
//!
//! - **Program Guardian**: Enforces day-split templates, harmonizes weekly
//!   per-muscle set volume and substitutes banned exercises, narrating every
//!   change it makes
//! - **Muscle Mapping**: Resolves exercise names to primary and secondary muscles
//! - **Adaptive Load**: Fatigue- and RPE-aware weight recommendations rounded
//!   to plate granularity
//! - **Fatigue Model**: Exponential-decay fatigue accumulation, RPE trend
//!   detection and deload recommendations
//!
//! All state (cumulative fatigue, RPE history) is owned by the caller and
//! threaded through explicitly; nothing is cached between calls.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pierre_training_engine::models::{
//!     Exercise, ExperienceLevel, GuardianOptions, PrimaryFocus, TrainingProgram, Workout,
//! };
//! use pierre_training_engine::apply_guardian;
//!
//! let program = TrainingProgram::new(vec![Workout::new(
//!     "Day A",
//!     vec![Exercise::new("Barbell Back Squat", 4)],
//! )]);
//! let options = GuardianOptions::new(PrimaryFocus::Hypertrophy, ExperienceLevel::Advanced)
//!     .with_training_days(6);
//! let result = apply_guardian(program, &options);
//! for note in &result.notes.corrections {
//!     println!("{note}");
//! }
//! ```

/// Configuration management for the guardian and the load engine
pub mod config;

/// Fitness intelligence: guardian, muscle mapping, adaptive load and fatigue
pub mod intelligence;

/// Structured logging setup for embedding applications
pub mod logging;

// Re-export the foundation crate modules under familiar paths
pub use pierre_training_core::{constants, errors, models};

pub use intelligence::adaptive_load::{
    calculate_adaptive_load, estimate_one_rep_max, AdaptiveLoadCalculator, LoadRecommendation,
};
pub use intelligence::fatigue::{
    analyze_rpe_trend, determine_deload_need, track_cumulative_fatigue, DeloadRecommendation,
    DeloadTrigger, FatigueTracker,
};
pub use intelligence::guardian::{
    apply_guardian, expected_volume, GuardianNotes, GuardianResult, MuscleVolumeCalculator,
    ProgramGuardian,
};
pub use intelligence::muscle_mapper::map_exercise_to_muscles;
