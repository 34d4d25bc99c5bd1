// ABOUTME: Main library entry point for the Pierre derived-state engine
// ABOUTME: Metrics, filtering, status classification, scoring, and wizard state for client screens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre State Engine
//!
//! Pure, synchronous computations that screens use to turn raw collections and
//! settings into display-ready derived state. Every operation is a function of
//! its inputs plus an injected `now`; the engine owns no storage and performs
//! no I/O besides the caller-supplied draft sink.
//!
//! ## Components
//!
//! - **Metrics**: totals and progress for workouts, courses, and meals
//! - **Filtering**: filter-then-sort pipeline with per-domain sort defaults
//! - **Status**: registration, schedule, and publication status with label and color key
//! - **Scoring**: boolean checklists reduced to a 0-100 score and tier
//! - **Wizard**: linear step wizard with completion gating and submission
//!
//! ## Example Usage
//!
//! ```rust
//! use pierre_state_engine::metrics::MetricsCalculator;
//! use pierre_state_engine::models::Item;
//!
//! let items = vec![
//!     Item::new("squat").with_duration(300).with_rest(60),
//!     Item::new("lunge").with_duration(540),
//! ];
//! let totals = MetricsCalculator::new().compute_totals(&items);
//! assert_eq!(totals.total_duration_minutes, 15);
//! assert_eq!(totals.total_calories, 135);
//! ```

/// Engine configuration with environment overrides
pub mod config;
/// Engine constants
pub mod constants;
/// Facade bundling every component behind one configuration
pub mod engine;
/// Error and reported-condition types
pub mod errors;
/// Filter/sort pipeline
pub mod filtering;
/// Structured logging setup
pub mod logging;
/// Collection totals and progress
pub mod metrics;
/// Core data models
pub mod models;
/// Plans whose totals are derived from their items
pub mod plan;
/// Checklist scoring
pub mod scoring;
/// Status classification
pub mod status;
/// Wizard state machine
pub mod wizard;

pub use engine::Engine;
