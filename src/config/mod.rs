// ABOUTME: Configuration module for the Pierre training engine
// ABOUTME: Re-exports guardian and adaptive load configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Training engine configuration (guardian taxonomy, load model parameters)
pub mod training;

pub use training::TrainingConfig;
