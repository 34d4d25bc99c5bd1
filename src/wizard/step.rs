// ABOUTME: Wizard step definition with a completion predicate over the draft data
// ABOUTME: Also defines the checklist view rendered as "N of M steps complete"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_state_core::errors::{FailingStep, StepIncomplete};
use pierre_state_core::models::Progress;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Completion predicate shared between clones of a step
pub type StepPredicate<D> = Arc<dyn Fn(&D) -> bool + Send + Sync>;

/// One page of a wizard
pub struct Step<D> {
    id: String,
    title: String,
    predicate: StepPredicate<D>,
}

impl<D> Step<D> {
    /// Create a step whose completion is decided by `predicate`
    #[must_use]
    pub fn new<F>(id: impl Into<String>, title: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&D) -> bool + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            title: title.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// A step that is always complete, e.g. a review page
    #[must_use]
    pub fn informational(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(id, title, |_| true)
    }

    /// Stable identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Title shown to the user
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the draft satisfies this step
    #[must_use]
    pub fn is_complete(&self, draft: &D) -> bool {
        (self.predicate)(draft)
    }

    pub(crate) fn failing(&self, index: usize) -> FailingStep {
        FailingStep {
            index,
            id: self.id.clone(),
            title: self.title.clone(),
        }
    }
}

impl<D> Clone for Step<D> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<D> fmt::Debug for Step<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// Completion of a single step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Position in the wizard
    pub index: usize,
    /// Step identifier
    pub id: String,
    /// Step title
    pub title: String,
    /// Whether the predicate holds
    pub complete: bool,
}

/// Publish checklist: every step with its completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    /// One entry per step, in wizard order
    pub items: Vec<ChecklistItem>,
    /// Completed versus total steps
    pub progress: Progress,
}

impl Checklist {
    /// Whether every step is complete
    #[must_use]
    pub const fn is_satisfied(&self) -> bool {
        self.progress.completed == self.progress.total
    }

    /// Inline hint such as "3 of 6 steps complete"
    #[must_use]
    pub fn hint(&self) -> String {
        format!(
            "{} of {} steps complete",
            self.progress.completed, self.progress.total
        )
    }

    /// Failing steps as a reportable condition, `None` when satisfied
    #[must_use]
    pub fn incomplete(&self) -> Option<StepIncomplete> {
        if self.is_satisfied() {
            return None;
        }
        Some(StepIncomplete {
            failing: self
                .items
                .iter()
                .filter(|item| !item.complete)
                .map(|item| FailingStep {
                    index: item.index,
                    id: item.id.clone(),
                    title: item.title.clone(),
                })
                .collect(),
            completed: self.progress.completed,
            total: self.progress.total,
        })
    }
}
