// ABOUTME: Status classification for temporal entities and wizard-driven content
// ABOUTME: Maps deadlines, capacity, and schedule to a status tag with a label and color key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Status Classification
//!
//! Classification is evaluated fresh on every call from the entity and an
//! injected `now`; nothing is cached. Registration status follows a fixed
//! precedence: closed, full, open, then the explicit upcoming fallback.

use crate::logging::log_condition;
use chrono::{DateTime, Utc};
use pierre_state_core::constants::status::{
    COLOR_ERROR, COLOR_INFO, COLOR_MUTED, COLOR_SUCCESS, COLOR_WARNING, LABEL_CLOSED,
    LABEL_DRAFT, LABEL_FINISHED, LABEL_FULL, LABEL_IN_PROGRESS, LABEL_LIVE, LABEL_OPEN,
    LABEL_PUBLISHED, LABEL_SCHEDULED, LABEL_UNDER_REVIEW, LABEL_UPCOMING,
};
use pierre_state_core::errors::{Condition, InvariantViolation};
use pierre_state_core::models::{TemporalEntity, WizardStatus};
use serde::{Deserialize, Serialize};

/// Registration status of a temporal entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTag {
    /// The registration deadline has passed
    Closed,
    /// Every place is taken
    Full,
    /// Accepting registrations
    Open,
    /// None of the above strictly holds (deadline exactly now)
    Upcoming,
}

/// Schedule status of a temporal entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    /// Not started yet
    Scheduled,
    /// Between start and end
    Live,
    /// Ended
    Finished,
}

/// A status tag with its display label and color key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification<S> {
    /// Status tag
    pub status: S,
    /// Display label
    pub label: &'static str,
    /// Theme color key
    pub color_key: &'static str,
}

/// Classification plus any invariant violations found in the entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckedClassification {
    /// Registration status
    pub classification: Classification<StatusTag>,
    /// Violations, empty for consistent data
    pub violations: Vec<InvariantViolation>,
}

/// Stateless classifier for temporal entities
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusClassifier;

impl StatusClassifier {
    /// Create a classifier
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Registration status at `now`
    #[must_use]
    pub fn classify(
        &self,
        entity: &TemporalEntity,
        now: DateTime<Utc>,
    ) -> Classification<StatusTag> {
        let status = if now > entity.registration_deadline_at {
            StatusTag::Closed
        } else if entity.registered_count >= entity.capacity {
            StatusTag::Full
        } else if now < entity.registration_deadline_at {
            StatusTag::Open
        } else {
            StatusTag::Upcoming
        };

        let (label, color_key) = match status {
            StatusTag::Closed => (LABEL_CLOSED, COLOR_ERROR),
            StatusTag::Full => (LABEL_FULL, COLOR_WARNING),
            StatusTag::Open => (LABEL_OPEN, COLOR_SUCCESS),
            StatusTag::Upcoming => (LABEL_UPCOMING, COLOR_INFO),
        };

        Classification {
            status,
            label,
            color_key,
        }
    }

    /// Registration status together with any invariant violations
    ///
    /// Violations are reported, never corrected: an over-capacity entity is
    /// still classified from its raw counts.
    #[must_use]
    pub fn classify_checked(
        &self,
        entity: &TemporalEntity,
        now: DateTime<Utc>,
    ) -> CheckedClassification {
        let violations = self.check_invariants(entity);
        for violation in &violations {
            log_condition("status", &Condition::Invariant(violation.clone()));
        }
        CheckedClassification {
            classification: self.classify(entity, now),
            violations,
        }
    }

    /// Consistency checks on capacity and schedule
    #[must_use]
    pub fn check_invariants(&self, entity: &TemporalEntity) -> Vec<InvariantViolation> {
        let mut violations = Vec::new();
        if entity.registered_count > entity.capacity {
            violations.push(InvariantViolation::CapacityExceeded {
                entity_id: entity.id.clone(),
                capacity: entity.capacity,
                registered: entity.registered_count,
            });
        }
        if entity.end_at < entity.start_at {
            violations.push(InvariantViolation::EndBeforeStart {
                entity_id: entity.id.clone(),
            });
        }
        if entity.registration_deadline_at > entity.start_at {
            violations.push(InvariantViolation::DeadlineAfterStart {
                entity_id: entity.id.clone(),
            });
        }
        violations
    }

    /// Whether the entity is scheduled, live, or finished at `now`
    ///
    /// Start is inclusive and end is exclusive.
    #[must_use]
    pub fn classify_schedule(
        &self,
        entity: &TemporalEntity,
        now: DateTime<Utc>,
    ) -> Classification<ScheduleStatus> {
        let (status, label, color_key) = if now < entity.start_at {
            (ScheduleStatus::Scheduled, LABEL_SCHEDULED, COLOR_INFO)
        } else if now < entity.end_at {
            (ScheduleStatus::Live, LABEL_LIVE, COLOR_SUCCESS)
        } else {
            (ScheduleStatus::Finished, LABEL_FINISHED, COLOR_MUTED)
        };
        Classification {
            status,
            label,
            color_key,
        }
    }

    /// Display classification for wizard-built content such as courses
    #[must_use]
    pub const fn classify_publication(&self, status: WizardStatus) -> Classification<WizardStatus> {
        let (label, color_key) = match status {
            WizardStatus::Draft => (LABEL_DRAFT, COLOR_MUTED),
            WizardStatus::InProgress => (LABEL_IN_PROGRESS, COLOR_INFO),
            WizardStatus::UnderReview => (LABEL_UNDER_REVIEW, COLOR_WARNING),
            WizardStatus::Published => (LABEL_PUBLISHED, COLOR_SUCCESS),
        };
        Classification {
            status,
            label,
            color_key,
        }
    }
}
