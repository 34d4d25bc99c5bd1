// ABOUTME: Multi-criteria filter and stable multi-key sort pipeline for in-memory collections
// ABOUTME: Shared by tournament lists, exercise libraries, course catalogues, and meal pickers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Filter/Sort Pipeline
//!
//! A collection is narrowed by an AND-combined list of [`FilterCriterion`]s and
//! then ordered by a [`SortSpec`]. Records expose their fields through the
//! [`Filterable`] trait, which is implemented for the core models and for
//! loosely-shaped `serde_json::Value` records.

/// Filter predicates
pub mod criteria;
/// Field values and field lookup
pub mod field;
/// The pipeline itself
pub mod pipeline;
/// Sort specifications and comparators
pub mod sort;

pub use criteria::FilterCriterion;
pub use field::{normalize_key, parse_date, FieldValue, Filterable};
pub use pipeline::{DomainProfile, FilterSortPipeline};
pub use sort::{SortDirection, SortSpec};
