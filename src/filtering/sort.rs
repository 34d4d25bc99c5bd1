// ABOUTME: Sort specification and comparator chain (key, tie-break key, input order)
// ABOUTME: Descending order reverses the comparison so ties keep their input order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::field::FieldValue;
use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first
    #[default]
    Asc,
    /// Largest first
    Desc,
}

impl SortDirection {
    /// Apply the direction to an ascending comparison
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            other => Err(ConfigError::Parse(format!("unknown sort direction `{other}`"))),
        }
    }
}

/// Primary key, direction, and optional tie-break key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    /// Primary sort key
    pub key: String,
    /// Direction of the primary key
    #[serde(default)]
    pub direction: SortDirection,
    /// Key compared when primary values are equal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tie_break_key: Option<String>,
    /// Direction of the tie-break key, defaults to `direction`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tie_break_direction: Option<SortDirection>,
}

impl SortSpec {
    /// Ascending sort on `key`
    #[must_use]
    pub fn asc(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    /// Descending sort on `key`
    #[must_use]
    pub fn desc(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Desc)
    }

    /// Sort on `key` in `direction`
    #[must_use]
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
            tie_break_key: None,
            tie_break_direction: None,
        }
    }

    /// Add a tie-break key sorted in the primary direction
    #[must_use]
    pub fn then_by(mut self, key: impl Into<String>) -> Self {
        self.tie_break_key = Some(key.into());
        self
    }

    /// Add a tie-break key with its own direction
    #[must_use]
    pub fn then_by_with(mut self, key: impl Into<String>, direction: SortDirection) -> Self {
        self.tie_break_key = Some(key.into());
        self.tie_break_direction = Some(direction);
        self
    }

    /// Direction used for the tie-break key
    #[must_use]
    pub fn effective_tie_break_direction(&self) -> SortDirection {
        self.tie_break_direction.unwrap_or(self.direction)
    }
}

/// Ascending comparison of optional values; a missing value sorts first
#[must_use]
pub fn compare_optional(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.compare(b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
