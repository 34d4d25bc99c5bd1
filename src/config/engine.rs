// ABOUTME: Engine configuration for metrics, scoring, and filtering with environment overrides
// ABOUTME: Replaces domain magic numbers (calorie rate, tier thresholds) with validated defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration
//!
//! Defaults come from [`pierre_state_core::constants`]. Every value can be
//! overridden through environment variables:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `ENGINE_CALORIE_RATE` | `metrics.calorie_rate` |
//! | `ENGINE_CALORIE_MODE` | `metrics.calorie_mode` (`estimate` or `declared`) |
//! | `ENGINE_METRICS_STRICT` | `metrics.strict_mode` |
//! | `ENGINE_SCORE_STRONG` | `scoring.thresholds.strong` |
//! | `ENGINE_SCORE_MODERATE` | `scoring.thresholds.moderate` |
//! | `ENGINE_DEFAULT_SORT_KEY` | `filtering.default_sort_key` |
//! | `ENGINE_DEFAULT_SORT_DIRECTION` | `filtering.default_direction` (`asc` or `desc`) |
//! | `ENGINE_PARALLEL_THRESHOLD` | both parallel thresholds |

use super::error::ConfigError;
use crate::filtering::SortDirection;
use crate::scoring::TierThresholds;
use pierre_state_core::constants::{filtering, metrics, scoring};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// How calories are derived from a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalorieMode {
    /// `round(total_seconds * calorie_rate)`, the workout estimate
    #[default]
    EstimateFromDuration,
    /// Sum of each item's declared calories, the nutrition view
    SumDeclared,
}

impl FromStr for CalorieMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "estimate" | "estimate_from_duration" => Ok(Self::EstimateFromDuration),
            "declared" | "sum_declared" => Ok(Self::SumDeclared),
            other => Err(ConfigError::Parse(format!("unknown calorie mode `{other}`"))),
        }
    }
}

/// Metrics aggregation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Calories per second of work in estimate mode
    pub calorie_rate: f64,
    /// Estimate from duration or sum declared values
    pub calorie_mode: CalorieMode,
    /// Emit validation warnings for missing numeric fields
    pub strict_mode: bool,
    /// Collection size from which sums run on the rayon pool
    pub parallel_threshold: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            calorie_rate: metrics::DEFAULT_CALORIE_RATE,
            calorie_mode: CalorieMode::default(),
            strict_mode: false,
            parallel_threshold: metrics::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Score engine settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Tier boundaries
    pub thresholds: TierThresholds,
}

/// Filter/sort pipeline settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilteringConfig {
    /// Sort key used when a requested key is unknown
    pub default_sort_key: String,
    /// Direction paired with the default key
    pub default_direction: SortDirection,
    /// Collection size from which predicates run on the rayon pool
    pub parallel_threshold: usize,
}

impl Default for FilteringConfig {
    fn default() -> Self {
        Self {
            default_sort_key: filtering::DEFAULT_SORT_KEY.to_owned(),
            default_direction: SortDirection::Desc,
            parallel_threshold: filtering::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Metrics calculator settings
    pub metrics: MetricsConfig,
    /// Score engine settings
    pub scoring: ScoringConfig,
    /// Filter/sort pipeline settings
    pub filtering: FilteringConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::from_env().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable cannot be parsed or the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(rate) = env_override::<f64>("ENGINE_CALORIE_RATE")? {
            self.metrics.calorie_rate = rate;
        }
        if let Some(mode) = env_override::<CalorieMode>("ENGINE_CALORIE_MODE")? {
            self.metrics.calorie_mode = mode;
        }
        if let Some(strict) = env_flag("ENGINE_METRICS_STRICT")? {
            self.metrics.strict_mode = strict;
        }
        if let Some(strong) = env_override::<u8>("ENGINE_SCORE_STRONG")? {
            self.scoring.thresholds.strong = strong;
        }
        if let Some(moderate) = env_override::<u8>("ENGINE_SCORE_MODERATE")? {
            self.scoring.thresholds.moderate = moderate;
        }
        if let Ok(key) = env::var("ENGINE_DEFAULT_SORT_KEY") {
            self.filtering.default_sort_key = key.trim().to_owned();
        }
        if let Some(direction) = env_override::<SortDirection>("ENGINE_DEFAULT_SORT_DIRECTION")? {
            self.filtering.default_direction = direction;
        }
        if let Some(threshold) = env_override::<usize>("ENGINE_PARALLEL_THRESHOLD")? {
            self.metrics.parallel_threshold = threshold;
            self.filtering.parallel_threshold = threshold;
        }
        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.metrics.calorie_rate.is_finite() || self.metrics.calorie_rate < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "calorie_rate must be a finite, non-negative number",
            ));
        }

        let thresholds = &self.scoring.thresholds;
        if thresholds.strong > scoring::MAX_SCORE || thresholds.moderate > scoring::MAX_SCORE {
            return Err(ConfigError::ValueOutOfRange(
                "score thresholds must be within 0..=100",
            ));
        }
        if thresholds.moderate > thresholds.strong {
            return Err(ConfigError::InvalidRange(
                "moderate threshold must be <= strong threshold",
            ));
        }

        if self.filtering.default_sort_key.trim().is_empty() {
            return Err(ConfigError::MissingField("filtering.default_sort_key"));
        }

        Ok(())
    }
}

/// Parse an optional environment override
fn env_override<T>(key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    env::var(key).map_or(Ok(None), |raw| {
        raw.trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::Parse(format!("{key}={raw}: {e}")))
    })
}

/// Parse an optional boolean flag (`true`/`false`/`1`/`0`/`yes`/`no`)
fn env_flag(key: &'static str) -> Result<Option<bool>, ConfigError> {
    env::var(key).map_or(Ok(None), |raw| match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(ConfigError::Parse(format!("{key}={raw}: expected a boolean"))),
    })
}
