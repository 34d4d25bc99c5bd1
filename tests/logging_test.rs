// ABOUTME: Integration tests for global subscriber installation
// ABOUTME: Runs in its own binary so no other test has installed a subscriber first
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_state_engine::errors::{Condition, InvariantViolation};
use pierre_state_engine::logging::{self, log_condition, LogFormat, LoggingConfig};

#[test]
fn test_format_names_parse_case_insensitively() {
    assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::parse(" compact "), LogFormat::Compact);
    assert_eq!(LogFormat::parse("verbose"), LogFormat::Pretty);
    assert_eq!(LogFormat::Json.as_str(), "json");
}

#[test]
fn test_subscriber_installs_once() {
    let config = LoggingConfig {
        level: "warn".into(),
        format: LogFormat::Json,
        ..LoggingConfig::default()
    };

    config.init().unwrap();
    log_condition(
        "logging_test",
        &Condition::Invariant(InvariantViolation::LastStepRemoval),
    );

    let again = logging::init_default().unwrap_err();
    assert!(again.to_string().contains("pretty"), "{again:#}");
    let compact = LoggingConfig {
        format: LogFormat::Compact,
        ..LoggingConfig::default()
    };
    assert!(compact.init().is_err());
}
