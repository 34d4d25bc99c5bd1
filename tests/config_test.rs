// ABOUTME: Integration tests for engine and logging configuration loading
// ABOUTME: Exercises environment overrides, validation failures, and the engine facade
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use pierre_state_engine::config::{CalorieMode, ConfigError, EngineConfig};
use pierre_state_engine::errors::{AppError, ErrorCode};
use pierre_state_engine::filtering::{DomainProfile, SortDirection, SortSpec};
use pierre_state_engine::logging::{LogFormat, LoggingConfig};
use pierre_state_engine::scoring::ScoreTier;
use pierre_state_engine::Engine;
use serial_test::serial;
use std::env;

const ENGINE_VARS: [&str; 8] = [
    "ENGINE_CALORIE_RATE",
    "ENGINE_CALORIE_MODE",
    "ENGINE_METRICS_STRICT",
    "ENGINE_SCORE_STRONG",
    "ENGINE_SCORE_MODERATE",
    "ENGINE_DEFAULT_SORT_KEY",
    "ENGINE_DEFAULT_SORT_DIRECTION",
    "ENGINE_PARALLEL_THRESHOLD",
];

fn clear_engine_env() {
    for var in ENGINE_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_engine_env();

    let config = EngineConfig::from_env().unwrap();

    assert!((config.metrics.calorie_rate - 0.15).abs() < f64::EPSILON);
    assert_eq!(config.metrics.calorie_mode, CalorieMode::EstimateFromDuration);
    assert!(!config.metrics.strict_mode);
    assert_eq!(config.scoring.thresholds.strong, 80);
    assert_eq!(config.scoring.thresholds.moderate, 60);
    assert_eq!(config.filtering.default_sort_key, "lastUsedAt");
    assert_eq!(config.filtering.default_direction, SortDirection::Desc);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_engine_env();
    env::set_var("ENGINE_CALORIE_RATE", "0.2");
    env::set_var("ENGINE_CALORIE_MODE", "declared");
    env::set_var("ENGINE_METRICS_STRICT", "yes");
    env::set_var("ENGINE_SCORE_STRONG", "90");
    env::set_var("ENGINE_SCORE_MODERATE", "50");
    env::set_var("ENGINE_DEFAULT_SORT_KEY", "startAt");
    env::set_var("ENGINE_DEFAULT_SORT_DIRECTION", "asc");
    env::set_var("ENGINE_PARALLEL_THRESHOLD", "128");

    let config = EngineConfig::from_env().unwrap();
    clear_engine_env();

    assert!((config.metrics.calorie_rate - 0.2).abs() < f64::EPSILON);
    assert_eq!(config.metrics.calorie_mode, CalorieMode::SumDeclared);
    assert!(config.metrics.strict_mode);
    assert_eq!(config.scoring.thresholds.strong, 90);
    assert_eq!(config.scoring.thresholds.moderate, 50);
    assert_eq!(config.filtering.default_sort_key, "startAt");
    assert_eq!(config.filtering.default_direction, SortDirection::Asc);
    assert_eq!(config.metrics.parallel_threshold, 128);
    assert_eq!(config.filtering.parallel_threshold, 128);
}

#[test]
#[serial]
fn test_unparseable_override_is_an_error() {
    clear_engine_env();
    env::set_var("ENGINE_CALORIE_RATE", "lots");

    let result = EngineConfig::from_env();
    clear_engine_env();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_inverted_thresholds_fail_validation() {
    clear_engine_env();
    env::set_var("ENGINE_SCORE_STRONG", "50");
    env::set_var("ENGINE_SCORE_MODERATE", "70");

    let result = Engine::from_env();
    clear_engine_env();

    let error = AppError::from(result.unwrap_err());
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_validation_rejects_bad_values() {
    let mut config = EngineConfig::default();
    config.metrics.calorie_rate = f64::NAN;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = EngineConfig::default();
    config.scoring.thresholds.strong = 120;
    assert!(config.validate().is_err());

    let mut config = EngineConfig::default();
    config.filtering.default_sort_key = "  ".into();
    assert!(matches!(config.validate(), Err(ConfigError::MissingField(_))));

    assert!(EngineConfig::default().validate().is_ok());
}

#[test]
fn test_engine_components_share_configuration() {
    common::init_test_logging();
    let mut config = EngineConfig::default();
    config.scoring.thresholds.strong = 70;
    config.metrics.calorie_rate = 0.1;
    let engine = Engine::new(config);

    let score = engine.scores().compute_score(&[true, true, true, false]);
    assert_eq!(score.tier, ScoreTier::Strong);

    let totals = engine.metrics().compute_totals(&common::sample_workout());
    assert_eq!(totals.total_calories, 90);

    let pipeline = engine.pipeline_for(DomainProfile::new("startAt", SortDirection::Asc));
    let sorted = pipeline.sort(
        vec![
            common::tournament("late", "Late", "Padel", 9),
            common::tournament("early", "Early", "Padel", 2),
        ],
        &SortSpec::asc("unknown"),
    );
    assert_eq!(sorted[0].id, "early");
    assert_eq!(engine.pipeline().profile().default_sort_key, "lastUsedAt");
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "course-screens");

    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("SERVICE_NAME");

    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.include_thread);
    assert_eq!(config.service_name, "course-screens");
}

#[test]
fn test_logging_config_defaults() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.service_name, "pierre-state-engine");
}
