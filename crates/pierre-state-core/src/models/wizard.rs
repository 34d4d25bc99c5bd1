// ABOUTME: Lifecycle status of a step wizard (course creation, plan builder)
// ABOUTME: Ordered so that forward transitions can be checked for monotonicity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a wizard
///
/// Variants are declared in lifecycle order; `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStatus {
    /// Resting state before any submission
    #[default]
    Draft,
    /// The user has moved past the first step
    InProgress,
    /// Submitted and awaiting review
    UnderReview,
    /// Review approved, content is live
    Published,
}

impl WizardStatus {
    /// Whether the wizard has been submitted
    #[must_use]
    pub const fn is_submitted(self) -> bool {
        matches!(self, Self::UnderReview | Self::Published)
    }

    /// Whether steps may still be added or removed: `Draft` and `InProgress` only
    #[must_use]
    pub const fn allows_step_changes(self) -> bool {
        !self.is_submitted()
    }

    /// Stable identifier used in logs and serialized output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::InProgress => "in_progress",
            Self::UnderReview => "under_review",
            Self::Published => "published",
        }
    }
}

impl fmt::Display for WizardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
