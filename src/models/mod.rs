// ABOUTME: Core data models re-exported from pierre-state-core
// ABOUTME: Re-exports Item, TemporalEntity, SettingsProfile, and wizard status types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Item`: leaf record aggregated by the metrics calculator
//! - `TemporalEntity`: tournament or session classified by the status classifier
//! - `SettingsProfile`: feature flags and enum settings read by feature rules
//! - `WizardStatus`: lifecycle status of wizard-created content

pub use pierre_state_core::models::*;
