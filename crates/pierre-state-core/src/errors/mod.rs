// ABOUTME: Unified error type and reported-condition taxonomy for the derived-state engine
// ABOUTME: Defines ErrorCode, AppError, and re-exports the non-fatal condition records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! The engine reports problems as values. Pure computations return their result
//! together with any [`Condition`]s they observed; only callers that need a hard
//! failure convert a condition into an [`AppError`].

/// Reported conditions (warnings, violations, step hints)
pub mod condition;

pub use condition::{
    Condition, DraftSaveFailed, FailingStep, InvariantViolation, Severity, StepIncomplete,
    ValidationWarning,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input could not be interpreted
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field is absent
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A wizard step predicate does not hold
    #[serde(rename = "STEP_INCOMPLETE")]
    StepIncomplete = 3100,

    // Data integrity (4000-4999)
    /// Upstream data breaks an engine invariant
    #[serde(rename = "INVARIANT_VIOLATION")]
    InvariantViolation = 4000,
    /// The requested status change is not allowed
    #[serde(rename = "ILLEGAL_TRANSITION")]
    IllegalTransition = 4001,

    // External collaborators (5000-5999)
    /// The caller-supplied draft sink failed
    #[serde(rename = "DRAFT_SINK_ERROR")]
    DraftSinkError = 5000,

    // Configuration (6000-6999)
    /// Configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::StepIncomplete => "The current step is not complete",
            Self::InvariantViolation => "The data violates an engine invariant",
            Self::IllegalTransition => "The requested status change is not allowed",
            Self::DraftSinkError => "The draft could not be saved",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
        }
    }
}

/// Unified error type for the engine
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Invalid configuration
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationWarning> for AppError {
    fn from(warning: ValidationWarning) -> Self {
        Self::new(ErrorCode::MissingRequiredField, warning.to_string())
    }
}

impl From<InvariantViolation> for AppError {
    fn from(violation: InvariantViolation) -> Self {
        let code = match violation {
            InvariantViolation::IllegalStatusTransition { .. } => ErrorCode::IllegalTransition,
            _ => ErrorCode::InvariantViolation,
        };
        Self::new(code, violation.to_string())
    }
}

impl From<StepIncomplete> for AppError {
    fn from(incomplete: StepIncomplete) -> Self {
        Self::new(ErrorCode::StepIncomplete, incomplete.hint())
    }
}

impl From<DraftSaveFailed> for AppError {
    fn from(failure: DraftSaveFailed) -> Self {
        Self::new(ErrorCode::DraftSinkError, failure.to_string())
    }
}

impl From<Condition> for AppError {
    fn from(condition: Condition) -> Self {
        match condition {
            Condition::Validation(warning) => warning.into(),
            Condition::Invariant(violation) => violation.into(),
            Condition::Incomplete(incomplete) => incomplete.into(),
            Condition::DraftNotSaved(failure) => failure.into(),
        }
    }
}
