// ABOUTME: Leaf item record (exercise, course module, meal component) and derived totals
// ABOUTME: Optional numeric fields tolerate loosely-shaped mock data from screens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A leaf unit inside a collection-bearing parent
///
/// Numeric fields are optional because screen-local data frequently omits them.
/// Aggregation substitutes zero for any missing value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Identifier, unique within its parent
    pub id: String,
    /// Working time in seconds
    #[serde(default, alias = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    /// Rest time following the item, in seconds
    #[serde(default, alias = "rest", skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,
    /// Declared energy content or expenditure (kcal)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Load or portion weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Free-form tags used by filters
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Item {
    /// Create an item with only an identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the working time
    #[must_use]
    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration_seconds = Some(seconds);
        self
    }

    /// Set the rest time
    #[must_use]
    pub fn with_rest(mut self, seconds: u32) -> Self {
        self.rest_seconds = Some(seconds);
        self
    }

    /// Set declared calories
    #[must_use]
    pub fn with_calories(mut self, calories: f64) -> Self {
        self.calories = Some(calories);
        self
    }

    /// Set the weight
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Add a tag
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Working plus rest time, missing values counted as zero
    #[must_use]
    pub fn total_seconds(&self) -> u64 {
        u64::from(self.duration_seconds.unwrap_or(0)) + u64::from(self.rest_seconds.unwrap_or(0))
    }
}

/// Aggregate totals derived from a list of items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Rounded minutes of work plus rest
    pub total_duration_minutes: u64,
    /// Rounded calories
    pub total_calories: u64,
    /// Number of items aggregated
    pub item_count: usize,
}

/// Completion progress for a plan or checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Completed units, never greater than `total`
    pub completed: usize,
    /// Units overall
    pub total: usize,
    /// Rounded completion percentage in `0..=100`
    pub percent: u8,
}

impl Progress {
    /// Whether every unit is complete (an empty total is never complete)
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}
