// ABOUTME: Value records consumed by the derived-state engine
// ABOUTME: Items and totals, temporal entities, settings profiles, and wizard status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models
//!
//! All records are immutable values. Builders consume `self` and return a new
//! record, so a caller holding the original never observes a change.

/// Leaf items and aggregate totals
pub mod item;
/// Settings profiles fed into scoring
pub mod settings;
/// Tournaments and sessions with registration windows
pub mod temporal;
/// Wizard lifecycle status
pub mod wizard;

pub use item::{Item, Progress, Totals};
pub use settings::SettingsProfile;
pub use temporal::{TemporalEntity, TemporalKind};
pub use wizard::WizardStatus;
