// ABOUTME: Filter predicates combined with logical AND by the pipeline
// ABOUTME: Substring search, set membership, equality, and a relative "last N days" window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::field::{FieldValue, Filterable};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// A single predicate over one or more fields
///
/// Serialized with a `kind` tag, e.g.
/// `{"kind": "equals", "field": "sport", "value": "Football"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterCriterion {
    /// Case-insensitive substring match over any of `fields`; a blank query matches everything
    Contains {
        /// Text fields to search
        fields: Vec<String>,
        /// Search text
        query: String,
    },
    /// Field value is one of `values`; an empty set matches everything
    OneOf {
        /// Field to test
        field: String,
        /// Accepted values
        values: Vec<FieldValue>,
    },
    /// Field value equals `value`; use a boolean value for flag filters
    Equals {
        /// Field to test
        field: String,
        /// Expected value
        value: FieldValue,
    },
    /// Date field within `days` days before `now`, inclusive, and not in the future
    WithinLastDays {
        /// Date field to test
        field: String,
        /// Window length in days
        days: u32,
    },
}

impl FilterCriterion {
    /// Substring search over several text fields
    #[must_use]
    pub fn contains<I, S>(fields: I, query: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Contains {
            fields: fields.into_iter().map(Into::into).collect(),
            query: query.into(),
        }
    }

    /// Set membership
    #[must_use]
    pub fn one_of<I, V>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        Self::OneOf {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Equality
    #[must_use]
    pub fn equals(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Boolean equality
    #[must_use]
    pub fn flag(field: impl Into<String>, expected: bool) -> Self {
        Self::equals(field, expected)
    }

    /// Relative date window
    #[must_use]
    pub fn within_last_days(field: impl Into<String>, days: u32) -> Self {
        Self::WithinLastDays {
            field: field.into(),
            days,
        }
    }

    /// Short description for logs
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Contains { fields, query } => format!("{} contains {query:?}", fields.join("|")),
            Self::OneOf { field, values } => format!("{field} in {} values", values.len()),
            Self::Equals { field, value } => format!("{field} == {value:?}"),
            Self::WithinLastDays { field, days } => format!("{field} within {days}d"),
        }
    }

    /// Whether `record` satisfies this predicate at `now`
    ///
    /// A record without the tested field never matches, except for the
    /// identity cases (blank query, empty value set).
    #[must_use]
    pub fn matches<T: Filterable>(&self, record: &T, now: DateTime<Utc>) -> bool {
        match self {
            Self::Contains { fields, query } => {
                let needle = query.trim().to_lowercase();
                if needle.is_empty() {
                    return true;
                }
                fields.iter().any(|field| {
                    record.field(field).is_some_and(|value| {
                        value
                            .text_fragments()
                            .iter()
                            .any(|text| text.to_lowercase().contains(&needle))
                    })
                })
            }
            Self::OneOf { field, values } => {
                if values.is_empty() {
                    return true;
                }
                record
                    .field(field)
                    .is_some_and(|actual| values.iter().any(|wanted| actual.matches(wanted)))
            }
            Self::Equals { field, value } => {
                record.field(field).is_some_and(|actual| actual.matches(value))
            }
            Self::WithinLastDays { field, days } => {
                // Windows reaching past the representable range are unbounded
                let earliest = TimeDelta::try_days(i64::from(*days))
                    .and_then(|window| now.checked_sub_signed(window))
                    .unwrap_or(DateTime::<Utc>::MIN_UTC);
                record
                    .field(field)
                    .and_then(|value| value.as_date())
                    .is_some_and(|date| date >= earliest && date <= now)
            }
        }
    }
}
