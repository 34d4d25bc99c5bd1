// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, a fixed clock, and sample items, tournaments, and drafts
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `pierre_state_engine`

use chrono::{DateTime, Duration, TimeZone, Utc};
use pierre_state_engine::models::{Item, TemporalEntity};
use pierre_state_engine::wizard::Step;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed reference instant used as `now` across tests
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 20, 12, 0, 0).unwrap()
}

/// Two exercises totalling 900 seconds of work and rest
pub fn sample_workout() -> Vec<Item> {
    vec![
        Item::new("squat").with_duration(300).with_rest(60),
        Item::new("lunge").with_duration(540),
    ]
}

/// Tournament with registration open for another week
pub fn open_tournament(id: &str, capacity: u32, registered: u32) -> TemporalEntity {
    let now = fixed_now();
    TemporalEntity::new(
        id,
        format!("Tournament {id}"),
        now + Duration::days(14),
        now + Duration::days(15),
        now + Duration::days(7),
    )
    .with_capacity(capacity, registered)
}

/// Tournament starting `start_in_days` from now with the given sport
pub fn tournament(id: &str, title: &str, sport: &str, start_in_days: i64) -> TemporalEntity {
    let now = fixed_now();
    TemporalEntity::new(
        id,
        title,
        now + Duration::days(start_in_days),
        now + Duration::days(start_in_days) + Duration::hours(6),
        now + Duration::days(start_in_days - 1),
    )
    .with_sport(sport)
    .with_capacity(16, 4)
}

/// Course draft edited through the creation wizard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseDraft {
    pub title: String,
    pub modules: Vec<String>,
    pub price_cents: Option<u32>,
}

/// Draft satisfying the first step only
pub fn titled_draft() -> CourseDraft {
    CourseDraft {
        title: "Strength Basics".into(),
        ..CourseDraft::default()
    }
}

/// Draft satisfying every step
pub fn complete_draft() -> CourseDraft {
    CourseDraft {
        title: "Strength Basics".into(),
        modules: vec!["Warm-up".into(), "Squats".into()],
        price_cents: Some(4900),
    }
}

/// Basics, modules, pricing: each step requires its own field
pub fn course_steps() -> Vec<Step<CourseDraft>> {
    vec![
        Step::new("basics", "Basics", |draft: &CourseDraft| {
            !draft.title.trim().is_empty()
        }),
        Step::new("modules", "Modules", |draft: &CourseDraft| {
            !draft.modules.is_empty()
        }),
        Step::new("pricing", "Pricing", |draft: &CourseDraft| {
            draft.price_cents.is_some()
        }),
    ]
}
