// ABOUTME: Core types and constants for the Pierre training engine
// ABOUTME: Foundation crate with error handling, program models, and volume constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Training Core
//!
//! Foundation crate providing shared types and constants for the Pierre
//! training engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Weekly volume targets and load-engine defaults
//! - **models**: Training program, muscle, recovery and recommendation types

/// Unified error handling system with standard error codes
pub mod errors;

/// Training constants organized by domain
pub mod constants;

/// Core data models (`TrainingProgram`, `Muscle`, `RecoveryProfile`, etc.)
pub mod models;
