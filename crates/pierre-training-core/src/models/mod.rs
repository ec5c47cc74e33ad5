// ABOUTME: Core data models for training programs, muscles and recovery inputs
// ABOUTME: Re-exports TrainingProgram, Muscle, GuardianOptions and other fundamental types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! This module contains the data structures consumed and produced by the
//! training engine.
//!
//! ## Design Principles
//!
//! - **Generator Agnostic**: Programs deserialize straight from LLM-produced JSON
//! - **Serializable**: All models support JSON serialization
//! - **Type Safe**: Closed enums for muscles, focus and experience level
//!
//! ## Core Models
//!
//! - `TrainingProgram`: Ordered list of workouts, one per training day
//! - `Muscle`: Closed enumeration of trained muscle groups
//! - `GuardianOptions`: Read-only inputs steering program correction
//! - `RecoveryProfile` / `SessionFeedback`: Inputs to the adaptive load engine

mod muscle;
mod options;
mod program;
mod recovery;

pub use muscle::{Muscle, MuscleMapping, MuscleSplit};
pub use options::{ExperienceLevel, GuardianOptions, PrimaryFocus, VolumeRange};
pub use program::{Exercise, TrainingProgram, Workout};
pub use recovery::{RecoveryProfile, RpeTrend, SessionFeedback};
