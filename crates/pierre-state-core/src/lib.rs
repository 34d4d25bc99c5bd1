// ABOUTME: Core types and constants for the Pierre derived-state engine
// ABOUTME: Foundation crate with data model, reported conditions, errors, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre State Core
//!
//! Foundation crate providing the plain value types consumed by the derived-state
//! engine. Screens build these records from their local collections and hand them
//! to the engine; nothing in here owns state or performs I/O.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the reported-condition taxonomy
//!   (`ValidationWarning`, `InvariantViolation`, `StepIncomplete`, `DraftSaveFailed`)
//! - **constants**: Domain defaults (calorie rate, score tiers, status labels)
//! - **models**: Items, totals, temporal entities, settings profiles, wizard status

/// Unified error handling and reported conditions
pub mod errors;

/// Engine defaults organized by domain
pub mod constants;

/// Immutable value records (items, temporal entities, settings)
pub mod models;
