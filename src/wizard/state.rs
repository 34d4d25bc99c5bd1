// ABOUTME: Wizard state and its gated transitions (next, back, jump, submit, publish)
// ABOUTME: Refused transitions return the unchanged state plus structured conditions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::sink::DraftSink;
use super::step::{Checklist, ChecklistItem, Step};
use crate::logging::log_condition;
use crate::metrics::compute_progress;
use pierre_state_core::errors::{
    AppResult, Condition, DraftSaveFailed, InvariantViolation, StepIncomplete,
};
use pierre_state_core::models::WizardStatus;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::{debug, info};
use uuid::Uuid;

/// What a transition did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The requested change was made
    Applied,
    /// The request was valid but there was nothing to change
    Unchanged,
    /// The request was blocked; see the transition's conditions
    Refused,
}

/// Result of a wizard operation
#[derive(Debug, Clone)]
pub struct Transition<D> {
    /// State after the operation (the input state when refused)
    pub state: WizardState<D>,
    /// What happened
    pub outcome: Outcome,
    /// Conditions to surface, possibly non-blocking
    pub conditions: Vec<Condition>,
}

impl<D> Transition<D> {
    fn applied(state: WizardState<D>) -> Self {
        Self {
            state,
            outcome: Outcome::Applied,
            conditions: Vec::new(),
        }
    }

    fn unchanged(state: WizardState<D>) -> Self {
        Self {
            state,
            outcome: Outcome::Unchanged,
            conditions: Vec::new(),
        }
    }

    fn refused(state: WizardState<D>, conditions: Vec<Condition>) -> Self {
        for condition in &conditions {
            log_condition("wizard", condition);
        }
        Self {
            state,
            outcome: Outcome::Refused,
            conditions,
        }
    }

    /// Whether the requested change was made
    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.outcome == Outcome::Applied
    }

    /// The step-incomplete condition, if one was reported
    #[must_use]
    pub fn step_incomplete(&self) -> Option<&StepIncomplete> {
        self.conditions.iter().find_map(|condition| match condition {
            Condition::Incomplete(incomplete) => Some(incomplete),
            _ => None,
        })
    }

    /// Invariant violations that were reported
    #[must_use]
    pub fn violations(&self) -> Vec<&InvariantViolation> {
        self.conditions
            .iter()
            .filter_map(|condition| match condition {
                Condition::Invariant(violation) => Some(violation),
                _ => None,
            })
            .collect()
    }

    /// Discard the conditions and keep the state
    #[must_use]
    pub fn into_state(self) -> WizardState<D> {
        self.state
    }

    /// The state, or the first blocking condition as an error
    ///
    /// # Errors
    ///
    /// Returns the first blocking condition converted to an `AppError`
    pub fn into_result(self) -> AppResult<WizardState<D>> {
        match self.conditions.into_iter().find(Condition::is_blocking) {
            Some(condition) => Err(condition.into()),
            None => Ok(self.state),
        }
    }
}

/// A wizard session: steps, cursor, draft data, and lifecycle status
///
/// `0 <= current_index < steps.len()` holds for every reachable state.
#[derive(Debug)]
pub struct WizardState<D> {
    session_id: Uuid,
    steps: Vec<Step<D>>,
    current_index: usize,
    draft: D,
    status: WizardStatus,
}

impl<D: Clone> Clone for WizardState<D> {
    fn clone(&self) -> Self {
        Self {
            session_id: self.session_id,
            steps: self.steps.clone(),
            current_index: self.current_index,
            draft: self.draft.clone(),
            status: self.status,
        }
    }
}

impl<D> WizardState<D> {
    /// Start a wizard at the first step in `draft` status
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation::EmptyWizard` when `steps` is empty
    pub fn new(steps: Vec<Step<D>>, draft: D) -> Result<Self, InvariantViolation> {
        if steps.is_empty() {
            return Err(InvariantViolation::EmptyWizard);
        }
        let session_id = Uuid::new_v4();
        debug!(wizard.session = %session_id, steps = steps.len(), "Wizard started");
        Ok(Self {
            session_id,
            steps,
            current_index: 0,
            draft,
            status: WizardStatus::Draft,
        })
    }

    /// Session identifier passed to the draft sink
    #[must_use]
    pub const fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Steps in order
    #[must_use]
    pub fn steps(&self) -> &[Step<D>] {
        &self.steps
    }

    /// Zero-based position of the cursor
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Step under the cursor
    #[must_use]
    pub fn current_step(&self) -> &Step<D> {
        &self.steps[self.current_index]
    }

    /// Draft data
    #[must_use]
    pub const fn draft(&self) -> &D {
        &self.draft
    }

    /// Lifecycle status
    #[must_use]
    pub const fn status(&self) -> WizardStatus {
        self.status
    }

    /// Whether the cursor is on the final step
    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.current_index + 1 == self.steps.len()
    }

    /// Replace the draft data
    #[must_use]
    pub fn with_draft(mut self, draft: D) -> Self {
        self.draft = draft;
        self
    }

    /// Edit the draft data in place
    #[must_use]
    pub fn update_draft(mut self, edit: impl FnOnce(&mut D)) -> Self {
        edit(&mut self.draft);
        self
    }

    /// Completion of every step against the current draft
    #[must_use]
    pub fn checklist(&self) -> Checklist {
        let items: Vec<ChecklistItem> = self
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| ChecklistItem {
                index,
                id: step.id().to_owned(),
                title: step.title().to_owned(),
                complete: step.is_complete(&self.draft),
            })
            .collect();
        let completed = items.iter().filter(|item| item.complete).count();
        let progress = compute_progress(completed, items.len());
        Checklist { items, progress }
    }

    /// Failing steps within `range` of step indices
    fn incomplete_in(&self, range: Range<usize>) -> Option<StepIncomplete> {
        let failing: Vec<_> = range
            .clone()
            .filter(|&index| !self.steps[index].is_complete(&self.draft))
            .map(|index| self.steps[index].failing(index))
            .collect();
        if failing.is_empty() {
            return None;
        }
        let total = range.len();
        Some(StepIncomplete {
            completed: total - failing.len(),
            total,
            failing,
        })
    }

    /// Advance one step when the current step is complete
    ///
    /// Leaving the first step moves a `draft` wizard to `in_progress`. On the
    /// final step there is nowhere to go; use [`Self::submit`].
    #[must_use]
    pub fn next(mut self) -> Transition<D> {
        if self.is_last_step() {
            return Transition::unchanged(self);
        }
        let index = self.current_index;
        if let Some(incomplete) = self.incomplete_in(index..index + 1) {
            return Transition::refused(self, vec![incomplete.into()]);
        }

        self.current_index += 1;
        if self.status == WizardStatus::Draft {
            self.set_status(WizardStatus::InProgress);
        }
        debug!(
            wizard.session = %self.session_id,
            step.index = self.current_index,
            "Wizard advanced"
        );
        Transition::applied(self)
    }

    /// Go back one step; no validation, clamped at the first step
    #[must_use]
    pub fn back(mut self) -> Transition<D> {
        if self.current_index == 0 {
            return Transition::unchanged(self);
        }
        self.current_index -= 1;
        debug!(
            wizard.session = %self.session_id,
            step.index = self.current_index,
            "Wizard moved back"
        );
        Transition::applied(self)
    }

    /// Move the cursor to `index`
    ///
    /// Moving backward always succeeds. Moving forward requires every step from
    /// the current one up to (not including) the target to be complete.
    #[must_use]
    pub fn jump_to(mut self, index: usize) -> Transition<D> {
        let len = self.steps.len();
        if index >= len {
            return Transition::refused(
                self,
                vec![InvariantViolation::StepIndexOutOfRange { index, len }.into()],
            );
        }
        if index == self.current_index {
            return Transition::unchanged(self);
        }
        if index > self.current_index {
            if let Some(incomplete) = self.incomplete_in(self.current_index..index) {
                return Transition::refused(self, vec![incomplete.into()]);
            }
            if self.status == WizardStatus::Draft {
                self.set_status(WizardStatus::InProgress);
            }
        }
        self.current_index = index;
        Transition::applied(self)
    }

    /// Submit for review from the final step once every step is complete
    ///
    /// A refused submit lists every failing step so the checklist can be shown.
    #[must_use]
    pub fn submit(mut self) -> Transition<D> {
        if self.status.is_submitted() {
            let violation = InvariantViolation::IllegalStatusTransition {
                from: self.status,
                to: WizardStatus::UnderReview,
            };
            return Transition::refused(self, vec![violation.into()]);
        }

        let mut conditions: Vec<Condition> = Vec::new();
        if !self.is_last_step() {
            conditions.push(
                InvariantViolation::NotOnFinalStep {
                    index: self.current_index,
                    len: self.steps.len(),
                }
                .into(),
            );
        }
        if let Some(incomplete) = self.checklist().incomplete() {
            conditions.push(incomplete.into());
        }
        if !conditions.is_empty() {
            return Transition::refused(self, conditions);
        }

        self.set_status(WizardStatus::UnderReview);
        Transition::applied(self)
    }

    /// Approve a submission: `under_review -> published`
    #[must_use]
    pub fn publish(mut self) -> Transition<D> {
        if self.status != WizardStatus::UnderReview {
            let violation = InvariantViolation::IllegalStatusTransition {
                from: self.status,
                to: WizardStatus::Published,
            };
            return Transition::refused(self, vec![violation.into()]);
        }
        self.set_status(WizardStatus::Published);
        Transition::applied(self)
    }

    /// Explicitly reopen the wizard for editing; the cursor is kept
    #[must_use]
    pub fn return_to_draft(mut self) -> Transition<D> {
        if self.status == WizardStatus::Draft {
            return Transition::unchanged(self);
        }
        self.set_status(WizardStatus::Draft);
        Transition::applied(self)
    }

    /// Append a step (e.g. "add module"); refused once submitted
    #[must_use]
    pub fn add_step(self, step: Step<D>) -> Transition<D> {
        let index = self.steps.len();
        self.insert_step(index, step)
    }

    /// Insert a step at `index`; the cursor stays on the same step
    #[must_use]
    pub fn insert_step(mut self, index: usize, step: Step<D>) -> Transition<D> {
        if let Err(violation) = self.ensure_steps_mutable() {
            return Transition::refused(self, vec![violation.into()]);
        }
        let len = self.steps.len();
        if index > len {
            return Transition::refused(
                self,
                vec![InvariantViolation::StepIndexOutOfRange { index, len }.into()],
            );
        }

        self.steps.insert(index, step);
        if index <= self.current_index {
            self.current_index += 1;
        }
        debug!(
            wizard.session = %self.session_id,
            step.index = index,
            steps = self.steps.len(),
            "Wizard step inserted"
        );
        Transition::applied(self)
    }

    /// Remove the step at `index`, keeping the cursor in range
    #[must_use]
    pub fn remove_step(mut self, index: usize) -> Transition<D> {
        if let Err(violation) = self.ensure_steps_mutable() {
            return Transition::refused(self, vec![violation.into()]);
        }
        let len = self.steps.len();
        if index >= len {
            return Transition::refused(
                self,
                vec![InvariantViolation::StepIndexOutOfRange { index, len }.into()],
            );
        }
        if len == 1 {
            return Transition::refused(self, vec![InvariantViolation::LastStepRemoval.into()]);
        }

        self.steps.remove(index);
        if index < self.current_index {
            self.current_index -= 1;
        }
        self.current_index = self.current_index.min(self.steps.len() - 1);
        debug!(
            wizard.session = %self.session_id,
            step.index = index,
            steps = self.steps.len(),
            "Wizard step removed"
        );
        Transition::applied(self)
    }

    /// Persist the draft through `sink` without touching cursor or status
    ///
    /// A sink failure yields an `Unchanged` transition carrying a non-blocking
    /// `DraftSaveFailed` condition.
    pub async fn save_draft<S>(self, sink: &S) -> Transition<D>
    where
        S: DraftSink<D> + ?Sized,
        D: Sync,
    {
        match sink.persist(self.session_id, &self.draft).await {
            Ok(()) => {
                debug!(wizard.session = %self.session_id, "Wizard draft saved");
                Transition::applied(self)
            }
            Err(e) => {
                let condition = Condition::DraftNotSaved(DraftSaveFailed {
                    reason: e.message,
                });
                log_condition("wizard", &condition);
                Transition {
                    state: self,
                    outcome: Outcome::Unchanged,
                    conditions: vec![condition],
                }
            }
        }
    }

    /// Step edits are refused once submitted
    ///
    /// `Draft` becomes `InProgress` on the first forward move, so edits stay
    /// open while `InProgress` too. Locking there would freeze the step list as
    /// soon as the user left the first step.
    fn ensure_steps_mutable(&self) -> Result<(), InvariantViolation> {
        if self.status.allows_step_changes() {
            Ok(())
        } else {
            Err(InvariantViolation::StepsLocked {
                status: self.status,
            })
        }
    }

    fn set_status(&mut self, status: WizardStatus) {
        info!(
            wizard.session = %self.session_id,
            wizard.from = %self.status,
            wizard.to = %status,
            "Wizard status changed"
        );
        self.status = status;
    }
}
