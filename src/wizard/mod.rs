// ABOUTME: Linear step wizard with per-step completion gating, draft saving, and submission
// ABOUTME: Drives course creation and plan builders without owning any persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Wizard State Machine
//!
//! A wizard is an ordered list of [`Step`]s over caller-owned draft data `D`.
//! Every operation consumes the current [`WizardState`] and returns a
//! [`Transition`] carrying the next state, what happened, and any conditions
//! the UI should render. A refused operation returns the state unchanged.
//!
//! Status lifecycle: `draft -> in_progress -> under_review -> published`, with
//! `return_to_draft` as the only backward move.

/// Draft persistence seam
pub mod sink;
/// Wizard state and transitions
pub mod state;
/// Steps and checklist records
pub mod step;

pub use sink::{DraftSink, MemoryDraftSink};
pub use state::{Outcome, Transition, WizardState};
pub use step::{Checklist, ChecklistItem, Step};
