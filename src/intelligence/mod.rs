// ABOUTME: Training intelligence modules: muscle mapping, program guardian, load and fatigue
// ABOUTME: Pure computations over caller-supplied programs, profiles and feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Rule-based correction of generated training programs and autoregulated
//! load recommendations. Nothing in this module performs I/O or keeps state
//! between calls.

/// Adaptive per-session load recommendations and e1RM estimation
pub mod adaptive_load;
/// Cumulative fatigue, RPE trend and deload recommendations
pub mod fatigue;
/// Program guardian: template, volume and substitution corrections
pub mod guardian;
/// Exercise name to muscle group mapping
pub mod muscle_mapper;

pub use adaptive_load::{AdaptiveLoadCalculator, LoadRecommendation};
pub use fatigue::{DeloadRecommendation, DeloadTrigger, FatigueTracker};
pub use guardian::{GuardianNotes, GuardianResult, ProgramGuardian};
pub use muscle_mapper::map_exercise_to_muscles;
