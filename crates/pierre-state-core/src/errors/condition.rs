// ABOUTME: Reported conditions emitted by the derived-state engine instead of panics
// ABOUTME: Validation warnings, invariant violations, incomplete steps, and failed draft saves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Reported Conditions
//!
//! Conditions are returned alongside results. They come in three flavours that the
//! presentation layer renders differently:
//! - [`ValidationWarning`] and [`DraftSaveFailed`]: optional data was missing or a
//!   best-effort side effect failed; the computation still completed
//! - [`InvariantViolation`]: upstream data is corrupt or an operation is not
//!   allowed in the current state
//! - [`StepIncomplete`]: the expected, common-path hint listing unmet wizard steps

use crate::models::WizardStatus;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a condition should be surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Inline hint, expected during normal use
    Hint,
    /// Non-blocking warning
    Warning,
    /// Upstream data corruption or a refused operation
    Violation,
}

/// An item was missing numeric fields that strict aggregation expects
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("item `{item_id}` is missing {fields}", fields = .missing_fields.join(", "))]
pub struct ValidationWarning {
    /// Identifier of the offending item
    pub item_id: String,
    /// Names of the absent fields, zero was substituted for each
    pub missing_fields: Vec<String>,
}

/// Data or an operation broke one of the engine's invariants
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "violation", rename_all = "snake_case")]
pub enum InvariantViolation {
    /// `registered_count > capacity`
    #[error("entity `{entity_id}` has {registered} registrations for {capacity} places")]
    CapacityExceeded {
        /// Entity identifier
        entity_id: String,
        /// Declared capacity
        capacity: u32,
        /// Observed registrations
        registered: u32,
    },
    /// Registration closes after the event has already started
    #[error("entity `{entity_id}` closes registration after it starts")]
    DeadlineAfterStart {
        /// Entity identifier
        entity_id: String,
    },
    /// The event ends before it starts
    #[error("entity `{entity_id}` ends before it starts")]
    EndBeforeStart {
        /// Entity identifier
        entity_id: String,
    },
    /// Steps were added or removed after submission
    #[error("wizard steps cannot change while the wizard is {status}")]
    StepsLocked {
        /// Status at the time of the attempt
        status: WizardStatus,
    },
    /// A status change that the wizard lifecycle does not allow
    #[error("wizard cannot move from {from} to {to}")]
    IllegalStatusTransition {
        /// Current status
        from: WizardStatus,
        /// Requested status
        to: WizardStatus,
    },
    /// A wizard needs at least one step
    #[error("a wizard needs at least one step")]
    EmptyWizard,
    /// Removing the step would leave the wizard empty
    #[error("the last remaining step cannot be removed")]
    LastStepRemoval,
    /// A step index outside `0..len`
    #[error("step index {index} is outside a wizard of {len} steps")]
    StepIndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of steps
        len: usize,
    },
    /// `submit` was called before reaching the final step
    #[error("submit requires the final step, currently on step {index} of {len}")]
    NotOnFinalStep {
        /// Current index
        index: usize,
        /// Number of steps
        len: usize,
    },
}

/// A wizard step whose completion predicate does not hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailingStep {
    /// Zero-based position in the wizard
    pub index: usize,
    /// Stable step identifier
    pub id: String,
    /// Title shown to the user
    pub title: String,
}

/// One or more wizard steps are incomplete
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{completed} of {total} steps complete")]
pub struct StepIncomplete {
    /// Steps that failed their predicate, in wizard order
    pub failing: Vec<FailingStep>,
    /// Number of steps that are complete
    pub completed: usize,
    /// Number of steps evaluated
    pub total: usize,
}

impl StepIncomplete {
    /// Inline hint such as "2 of 3 steps complete"
    #[must_use]
    pub fn hint(&self) -> String {
        self.to_string()
    }

    /// Titles of the failing steps, for checklist rendering
    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        self.failing.iter().map(|step| step.title.as_str()).collect()
    }
}

/// The draft sink reported a failure; navigation is unaffected
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("draft not saved: {reason}")]
pub struct DraftSaveFailed {
    /// Message from the sink
    pub reason: String,
}

/// Any condition the engine can report
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum Condition {
    /// Missing optional numeric data
    #[error(transparent)]
    Validation(ValidationWarning),
    /// Corrupt data or refused operation
    #[error(transparent)]
    Invariant(InvariantViolation),
    /// Unmet wizard steps
    #[error(transparent)]
    Incomplete(StepIncomplete),
    /// Best-effort draft persistence failed
    #[error(transparent)]
    DraftNotSaved(DraftSaveFailed),
}

impl Condition {
    /// How the presentation layer should surface this condition
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Incomplete(_) => Severity::Hint,
            Self::Validation(_) | Self::DraftNotSaved(_) => Severity::Warning,
            Self::Invariant(_) => Severity::Violation,
        }
    }

    /// Text suitable for an inline UI hint
    #[must_use]
    pub fn hint(&self) -> String {
        self.to_string()
    }

    /// Whether this condition prevented the requested operation
    #[must_use]
    pub const fn is_blocking(&self) -> bool {
        matches!(self, Self::Invariant(_) | Self::Incomplete(_))
    }
}

impl From<ValidationWarning> for Condition {
    fn from(warning: ValidationWarning) -> Self {
        Self::Validation(warning)
    }
}

impl From<InvariantViolation> for Condition {
    fn from(violation: InvariantViolation) -> Self {
        Self::Invariant(violation)
    }
}

impl From<StepIncomplete> for Condition {
    fn from(incomplete: StepIncomplete) -> Self {
        Self::Incomplete(incomplete)
    }
}

impl From<DraftSaveFailed> for Condition {
    fn from(failure: DraftSaveFailed) -> Self {
        Self::DraftNotSaved(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_incomplete_hint() {
        let incomplete = StepIncomplete {
            failing: vec![FailingStep {
                index: 1,
                id: "modules".into(),
                title: "Modules".into(),
            }],
            completed: 2,
            total: 3,
        };
        assert_eq!(incomplete.hint(), "2 of 3 steps complete");
        assert_eq!(incomplete.titles(), vec!["Modules"]);
        assert_eq!(Condition::from(incomplete).severity(), Severity::Hint);
    }

    #[test]
    fn test_validation_warning_display() {
        let warning = ValidationWarning {
            item_id: "squat".into(),
            missing_fields: vec!["durationSeconds".into(), "restSeconds".into()],
        };
        assert_eq!(
            warning.to_string(),
            "item `squat` is missing durationSeconds, restSeconds"
        );
        assert!(!Condition::from(warning).is_blocking());
    }
}
