// ABOUTME: Metrics aggregation over item collections (workout exercises, course modules, meals)
// ABOUTME: Computes duration, calorie, and count totals plus clamped completion progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metrics calculation for collection-bearing entities
//!
//! Totals are a pure function of the item list. Sums are performed on integers
//! (seconds) or on sorted values (declared calories), so the result does not
//! depend on item order.

use crate::config::{CalorieMode, MetricsConfig};
use crate::logging::log_condition;
use pierre_state_core::constants::metrics::{
    DEFAULT_CALORIE_RATE, DEFAULT_PARALLEL_THRESHOLD, FIELD_CALORIES, FIELD_DURATION, FIELD_REST,
    MAX_PERCENT,
};
use pierre_state_core::constants::time::SECONDS_PER_MINUTE_F64;
use pierre_state_core::errors::{Condition, ValidationWarning};
use pierre_state_core::models::{Item, Progress, Totals};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Totals together with any warnings raised in strict mode
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Aggregated totals
    pub totals: Totals,
    /// One warning per item with missing expected fields
    pub warnings: Vec<ValidationWarning>,
}

/// Metrics calculator for item collections
#[derive(Debug, Clone)]
pub struct MetricsCalculator {
    calorie_rate: f64,
    calorie_mode: CalorieMode,
    strict_mode: bool,
    parallel_threshold: usize,
}

impl Default for MetricsCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsCalculator {
    /// Create a calculator with the workout defaults
    #[must_use]
    pub const fn new() -> Self {
        Self {
            calorie_rate: DEFAULT_CALORIE_RATE,
            calorie_mode: CalorieMode::EstimateFromDuration,
            strict_mode: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Create a calculator from configuration
    #[must_use]
    pub const fn from_config(config: &MetricsConfig) -> Self {
        Self {
            calorie_rate: config.calorie_rate,
            calorie_mode: config.calorie_mode,
            strict_mode: config.strict_mode,
            parallel_threshold: config.parallel_threshold,
        }
    }

    /// Override the calories-per-second rate used in estimate mode
    ///
    /// Non-finite or negative rates are replaced by zero.
    #[must_use]
    pub fn with_calorie_rate(mut self, rate: f64) -> Self {
        self.calorie_rate = if rate.is_finite() { rate.max(0.0) } else { 0.0 };
        self
    }

    /// Choose how calories are derived
    #[must_use]
    pub const fn with_calorie_mode(mut self, mode: CalorieMode) -> Self {
        self.calorie_mode = mode;
        self
    }

    /// Enable or disable strict mode
    #[must_use]
    pub const fn strict(mut self, strict_mode: bool) -> Self {
        self.strict_mode = strict_mode;
        self
    }

    /// Whether strict mode is enabled
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict_mode
    }

    /// Aggregate items into totals
    ///
    /// Missing numeric fields count as zero. An empty slice yields all-zero totals.
    #[must_use]
    pub fn compute_totals(&self, items: &[Item]) -> Totals {
        let total_seconds = self.sum_seconds(items);
        let total_duration_minutes = (total_seconds as f64 / SECONDS_PER_MINUTE_F64).round() as u64;

        let total_calories = match self.calorie_mode {
            CalorieMode::EstimateFromDuration => {
                (total_seconds as f64 * self.calorie_rate).round() as u64
            }
            CalorieMode::SumDeclared => sum_declared_calories(items).round() as u64,
        };

        debug!(
            item_count = items.len(),
            total_seconds,
            total_calories,
            calorie_mode = ?self.calorie_mode,
            "Computed collection totals"
        );

        Totals {
            total_duration_minutes,
            total_calories,
            item_count: items.len(),
        }
    }

    /// Aggregate items and, in strict mode, report items with missing fields
    ///
    /// Warnings never change the totals: zero is substituted either way.
    #[must_use]
    pub fn compute_totals_checked(&self, items: &[Item]) -> MetricsReport {
        let totals = self.compute_totals(items);
        if !self.strict_mode {
            return MetricsReport {
                totals,
                warnings: Vec::new(),
            };
        }

        let warnings: Vec<ValidationWarning> = items
            .iter()
            .filter_map(|item| self.missing_fields(item))
            .collect();

        for warning in &warnings {
            log_condition("metrics", &Condition::Validation(warning.clone()));
        }

        MetricsReport { totals, warnings }
    }

    fn sum_seconds(&self, items: &[Item]) -> u64 {
        if items.len() >= self.parallel_threshold {
            items.par_iter().map(Item::total_seconds).sum()
        } else {
            items.iter().map(Item::total_seconds).sum()
        }
    }

    fn missing_fields(&self, item: &Item) -> Option<ValidationWarning> {
        let mut missing = Vec::new();
        match self.calorie_mode {
            CalorieMode::EstimateFromDuration => {
                if item.duration_seconds.is_none() {
                    missing.push(FIELD_DURATION.to_owned());
                }
                if item.rest_seconds.is_none() {
                    missing.push(FIELD_REST.to_owned());
                }
            }
            CalorieMode::SumDeclared => {
                if item.calories.is_none() {
                    missing.push(FIELD_CALORIES.to_owned());
                }
            }
        }

        (!missing.is_empty()).then(|| ValidationWarning {
            item_id: item.id.clone(),
            missing_fields: missing,
        })
    }
}

/// Sum declared calories in ascending order so the result ignores item order
///
/// Negative and non-finite values are treated as zero.
fn sum_declared_calories(items: &[Item]) -> f64 {
    let mut values: Vec<f64> = items
        .iter()
        .filter_map(|item| item.calories)
        .filter(|value| value.is_finite())
        .map(|value| value.max(0.0))
        .collect();
    values.sort_by(f64::total_cmp);
    values.iter().sum()
}

/// `round(100 * part / whole)` in integer arithmetic, halves rounding up
///
/// Exact halves such as 23 of 40 (57.5) round to 58. A zero `whole` yields 0
/// and `part` is clamped to `whole`.
#[must_use]
pub fn rounded_percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let (part, whole) = (part.min(whole) as u128, whole as u128);
    let scale = u128::from(MAX_PERCENT);
    let percent = (2 * scale * part + whole) / (2 * whole);
    u8::try_from(percent).unwrap_or(MAX_PERCENT)
}

/// Completion progress with `completed` clamped to `total`
///
/// A zero total yields zero percent.
#[must_use]
pub fn compute_progress(completed: usize, total: usize) -> Progress {
    let completed = completed.min(total);
    let percent = rounded_percent(completed, total);

    Progress {
        completed,
        total,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_sum_ignores_invalid_values() {
        let items = vec![
            Item::new("a").with_calories(120.4),
            Item::new("b").with_calories(-50.0),
            Item::new("c").with_calories(f64::NAN),
            Item::new("d"),
        ];
        assert!((sum_declared_calories(&items) - 120.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_rounding() {
        assert_eq!(compute_progress(1, 3).percent, 33);
        assert_eq!(compute_progress(2, 3).percent, 67);
        assert_eq!(compute_progress(0, 0).percent, 0);
        assert_eq!(compute_progress(23, 40).percent, 58);
        assert_eq!(compute_progress(113, 200).percent, 57);
    }
}
