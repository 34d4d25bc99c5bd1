// ABOUTME: Configuration module for the derived-state engine
// ABOUTME: Re-exports engine configuration types and the configuration error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Engine configuration (metrics, scoring, filtering) with environment overrides
pub mod engine;
/// Configuration error types
pub mod error;

pub use engine::{CalorieMode, EngineConfig, FilteringConfig, MetricsConfig, ScoringConfig};
pub use error::ConfigError;
