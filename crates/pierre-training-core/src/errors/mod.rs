// ABOUTME: Unified error types for the training engine with stable error codes
// ABOUTME: Provides AppError, ErrorCode, and the AppResult alias used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the training engine returns [`AppResult`].
//! Error codes are grouped by category and serialize to stable
//! `SCREAMING_SNAKE_CASE` names so embedding services can surface them as-is.

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Standard error codes used throughout the training engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Generic invalid input (non-positive weight, RPE out of scale, ...)
    InvalidInput = 3000,
    /// Recovery rate was zero, negative or not finite
    InvalidRecoveryRate = 3004,

    // Configuration (6000-6999)
    /// Configuration failed validation
    ConfigInvalid = 6002,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidRecoveryRate => "The recovery rate must be a positive, finite number",
            Self::ConfigInvalid => "Configuration is invalid",
        }
    }

    /// Whether the error was caused by caller-supplied input
    #[must_use]
    pub const fn is_validation(self) -> bool {
        matches!(self, Self::InvalidInput | Self::InvalidRecoveryRate)
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Additional key-value context
    pub details: Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            details: Value::Object(Map::new()),
        }
    }
}

/// Unified error type for the training engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Recovery rate that would divide by zero or flip the sign of a formula
    #[must_use]
    pub fn invalid_recovery_rate(recovery_rate: f64) -> Self {
        Self::new(
            ErrorCode::InvalidRecoveryRate,
            format!("Recovery rate must be positive and finite, got {recovery_rate}"),
        )
        .with_details(serde_json::json!({ "recovery_rate": recovery_rate }))
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
