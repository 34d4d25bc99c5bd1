// ABOUTME: Engine facade that builds every component from one EngineConfig
// ABOUTME: Screens hold an Engine and ask it for calculators, pipelines, and classifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{ConfigError, EngineConfig};
use crate::filtering::{DomainProfile, FilterSortPipeline};
use crate::metrics::MetricsCalculator;
use crate::scoring::ScoreEngine;
use crate::status::StatusClassifier;
use tracing::info;

/// Configured set of engine components
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    metrics: MetricsCalculator,
    pipeline: FilterSortPipeline,
    scores: ScoreEngine,
    status: StatusClassifier,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    /// Build components from `config`
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            metrics: MetricsCalculator::from_config(&config.metrics),
            pipeline: FilterSortPipeline::from_config(&config.filtering),
            scores: ScoreEngine::from_config(&config.scoring),
            status: StatusClassifier::new(),
            config,
        }
    }

    /// Build components from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = EngineConfig::from_env()?;
        info!(
            calorie_rate = config.metrics.calorie_rate,
            calorie_mode = ?config.metrics.calorie_mode,
            strict = config.metrics.strict_mode,
            strong = config.scoring.thresholds.strong,
            moderate = config.scoring.thresholds.moderate,
            default_sort_key = %config.filtering.default_sort_key,
            "Engine configured from environment"
        );
        Ok(Self::new(config))
    }

    /// Configuration the components were built from
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Metrics calculator
    #[must_use]
    pub const fn metrics(&self) -> &MetricsCalculator {
        &self.metrics
    }

    /// Pipeline using the configured default sort
    #[must_use]
    pub const fn pipeline(&self) -> &FilterSortPipeline {
        &self.pipeline
    }

    /// Pipeline for a screen with its own sort defaults
    #[must_use]
    pub fn pipeline_for(&self, profile: DomainProfile) -> FilterSortPipeline {
        self.pipeline.clone().with_profile(profile)
    }

    /// Score engine
    #[must_use]
    pub const fn scores(&self) -> &ScoreEngine {
        &self.scores
    }

    /// Status classifier
    #[must_use]
    pub const fn status(&self) -> &StatusClassifier {
        &self.status
    }
}
