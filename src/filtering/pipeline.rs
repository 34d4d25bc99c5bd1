// ABOUTME: Filter-then-sort pipeline over homogeneous, fully materialized collections
// ABOUTME: Falls back to the domain profile's default key when a requested sort key is unknown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::criteria::FilterCriterion;
use super::field::{FieldValue, Filterable};
use super::sort::{compare_optional, SortDirection, SortSpec};
use crate::config::FilteringConfig;
use chrono::{DateTime, Utc};
use pierre_state_core::constants::filtering::{DEFAULT_PARALLEL_THRESHOLD, DEFAULT_SORT_KEY};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Per-domain sorting defaults supplied by the calling screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainProfile {
    /// Key used when the requested key is unknown for the collection
    pub default_sort_key: String,
    /// Direction paired with the default key
    pub default_direction: SortDirection,
}

impl DomainProfile {
    /// Create a profile
    #[must_use]
    pub fn new(default_sort_key: impl Into<String>, default_direction: SortDirection) -> Self {
        Self {
            default_sort_key: default_sort_key.into(),
            default_direction,
        }
    }
}

impl Default for DomainProfile {
    fn default() -> Self {
        Self::new(DEFAULT_SORT_KEY, SortDirection::Desc)
    }
}

/// Sort keys after unknown-key resolution
#[derive(Debug, Clone, PartialEq, Eq)]
struct ResolvedSort {
    key: String,
    direction: SortDirection,
    tie_break: Option<(String, SortDirection)>,
}

/// Filter/sort pipeline
#[derive(Debug, Clone)]
pub struct FilterSortPipeline {
    profile: DomainProfile,
    parallel_threshold: usize,
}

impl Default for FilterSortPipeline {
    fn default() -> Self {
        Self::new(DomainProfile::default())
    }
}

impl FilterSortPipeline {
    /// Create a pipeline for a domain
    #[must_use]
    pub const fn new(profile: DomainProfile) -> Self {
        Self {
            profile,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Create a pipeline from configuration
    #[must_use]
    pub fn from_config(config: &FilteringConfig) -> Self {
        Self {
            profile: DomainProfile::new(
                config.default_sort_key.clone(),
                config.default_direction,
            ),
            parallel_threshold: config.parallel_threshold,
        }
    }

    /// Replace the domain profile, keeping other settings
    #[must_use]
    pub fn with_profile(mut self, profile: DomainProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Domain profile in use
    #[must_use]
    pub const fn profile(&self) -> &DomainProfile {
        &self.profile
    }

    /// Filter `collection` with `criteria`, then sort with `sort`
    ///
    /// The input is never modified; a new vector is returned. Applying the
    /// pipeline to its own output yields the same output.
    #[must_use]
    pub fn apply<T>(
        &self,
        collection: &[T],
        criteria: &[FilterCriterion],
        sort: &SortSpec,
        now: DateTime<Utc>,
    ) -> Vec<T>
    where
        T: Filterable + Clone + Send + Sync,
    {
        let filtered = self.filter(collection, criteria, now);
        self.sort(filtered, sort)
    }

    /// Keep the records matching every criterion, in input order
    #[must_use]
    pub fn filter<T>(
        &self,
        collection: &[T],
        criteria: &[FilterCriterion],
        now: DateTime<Utc>,
    ) -> Vec<T>
    where
        T: Filterable + Clone + Send + Sync,
    {
        if criteria.is_empty() {
            return collection.to_vec();
        }

        let keep = |record: &&T| criteria.iter().all(|criterion| criterion.matches(*record, now));
        let filtered: Vec<T> = if collection.len() >= self.parallel_threshold {
            collection.par_iter().filter(keep).cloned().collect()
        } else {
            collection.iter().filter(keep).cloned().collect()
        };

        debug!(
            input = collection.len(),
            output = filtered.len(),
            criteria = ?criteria.iter().map(FilterCriterion::describe).collect::<Vec<_>>(),
            "Applied filter criteria"
        );
        filtered
    }

    /// Stable sort: key, then tie-break key, then input order
    #[must_use]
    pub fn sort<T: Filterable>(&self, records: Vec<T>, sort: &SortSpec) -> Vec<T> {
        let Some(resolved) = self.resolve(&records, sort) else {
            return records;
        };

        let mut keyed: Vec<(Option<FieldValue>, Option<FieldValue>, T)> = records
            .into_iter()
            .map(|record| {
                let primary = record.field(&resolved.key);
                let secondary = resolved
                    .tie_break
                    .as_ref()
                    .and_then(|(key, _)| record.field(key));
                (primary, secondary, record)
            })
            .collect();

        keyed.sort_by(|a, b| {
            let primary = resolved
                .direction
                .apply(compare_optional(a.0.as_ref(), b.0.as_ref()));
            primary.then_with(|| {
                resolved.tie_break.as_ref().map_or(Ordering::Equal, |(_, direction)| {
                    direction.apply(compare_optional(a.1.as_ref(), b.1.as_ref()))
                })
            })
        });

        keyed.into_iter().map(|(_, _, record)| record).collect()
    }

    /// Resolve unknown keys against the records; `None` keeps input order
    fn resolve<T: Filterable>(&self, records: &[T], sort: &SortSpec) -> Option<ResolvedSort> {
        let known = |key: &str| records.iter().any(|record| record.field(key).is_some());

        let (key, direction) = if known(&sort.key) {
            (sort.key.clone(), sort.direction)
        } else if known(&self.profile.default_sort_key) {
            debug!(
                requested = %sort.key,
                fallback = %self.profile.default_sort_key,
                "Unknown sort key, using domain default"
            );
            (
                self.profile.default_sort_key.clone(),
                self.profile.default_direction,
            )
        } else {
            debug!(
                requested = %sort.key,
                fallback = %self.profile.default_sort_key,
                "Neither requested nor default sort key present, keeping input order"
            );
            return None;
        };

        let tie_break = sort
            .tie_break_key
            .as_ref()
            .filter(|tie_key| known(tie_key))
            .map(|tie_key| (tie_key.clone(), sort.effective_tie_break_direction()));

        Some(ResolvedSort {
            key,
            direction,
            tie_break,
        })
    }
}
