// ABOUTME: Integration tests for registration, schedule, and publication status classification
// ABOUTME: Verifies precedence at deadline boundaries and reported data-integrity violations
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{fixed_now, open_tournament};
use pierre_state_engine::errors::InvariantViolation;
use pierre_state_engine::models::{TemporalEntity, WizardStatus};
use pierre_state_engine::status::{ScheduleStatus, StatusClassifier, StatusTag};

#[test]
fn test_full_tournament_before_deadline() {
    common::init_test_logging();
    let entity = open_tournament("cup", 32, 32);

    let classification = StatusClassifier::new().classify(&entity, fixed_now());

    assert_eq!(classification.status, StatusTag::Full);
    assert_eq!(classification.label, "Full");
    assert_eq!(classification.color_key, "warning");
}

#[test]
fn test_open_tournament_with_spots_left() {
    let entity = open_tournament("cup", 32, 10);

    let classification = StatusClassifier::new().classify(&entity, fixed_now());

    assert_eq!(classification.status, StatusTag::Open);
    assert_eq!(classification.color_key, "success");
    assert_eq!(entity.spots_remaining(), 22);
}

#[test]
fn test_closed_takes_precedence_over_full() {
    let entity = open_tournament("cup", 32, 32);
    let deadline = entity.registration_deadline_at;
    let classifier = StatusClassifier::new();

    let before = classifier.classify(&entity, deadline - Duration::seconds(1));
    let after = classifier.classify(&entity, deadline + Duration::seconds(1));

    assert_eq!(before.status, StatusTag::Full);
    assert_eq!(after.status, StatusTag::Closed);
    assert_eq!(after.label, "Registration Closed");
    assert_eq!(after.color_key, "error");
}

#[test]
fn test_exact_deadline_falls_back_to_upcoming() {
    let entity = open_tournament("cup", 32, 10);

    let classification =
        StatusClassifier::new().classify(&entity, entity.registration_deadline_at);

    assert_eq!(classification.status, StatusTag::Upcoming);
    assert_eq!(classification.color_key, "info");
}

#[test]
fn test_zero_capacity_reads_as_full() {
    let entity = open_tournament("invite-only", 0, 0);

    let classification = StatusClassifier::new().classify(&entity, fixed_now());

    assert_eq!(classification.status, StatusTag::Full);
    assert!((entity.fill_ratio() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_classification_is_recomputed_for_each_now() {
    let entity = open_tournament("cup", 32, 10);
    let classifier = StatusClassifier::new();

    let early = classifier.classify(&entity, fixed_now());
    let late = classifier.classify(&entity, fixed_now() + Duration::days(30));

    assert_eq!(early.status, StatusTag::Open);
    assert_eq!(late.status, StatusTag::Closed);
}

#[test]
fn test_over_capacity_is_reported_and_still_classified() {
    common::init_test_logging();
    let entity = open_tournament("cup", 16, 20);

    let checked = StatusClassifier::new().classify_checked(&entity, fixed_now());

    assert_eq!(checked.classification.status, StatusTag::Full);
    assert_eq!(
        checked.violations,
        vec![InvariantViolation::CapacityExceeded {
            entity_id: "cup".into(),
            capacity: 16,
            registered: 20,
        }]
    );
    assert_eq!(entity.spots_remaining(), 0);
}

#[test]
fn test_inconsistent_dates_are_reported() {
    let now = fixed_now();
    let entity = TemporalEntity::new(
        "broken",
        "Broken Dates",
        now + Duration::days(5),
        now + Duration::days(4),
        now + Duration::days(6),
    )
    .with_capacity(10, 1);

    let violations = StatusClassifier::new().check_invariants(&entity);

    assert_eq!(
        violations,
        vec![
            InvariantViolation::EndBeforeStart {
                entity_id: "broken".into()
            },
            InvariantViolation::DeadlineAfterStart {
                entity_id: "broken".into()
            },
        ]
    );
}

#[test]
fn test_consistent_entity_has_no_violations() {
    let entity = open_tournament("cup", 32, 10);
    assert!(StatusClassifier::new().check_invariants(&entity).is_empty());
}

#[test]
fn test_schedule_status_boundaries() {
    let entity = open_tournament("cup", 32, 10);
    let classifier = StatusClassifier::new();

    let scheduled = classifier.classify_schedule(&entity, entity.start_at - Duration::seconds(1));
    let live_at_start = classifier.classify_schedule(&entity, entity.start_at);
    let finished_at_end = classifier.classify_schedule(&entity, entity.end_at);

    assert_eq!(scheduled.status, ScheduleStatus::Scheduled);
    assert_eq!(live_at_start.status, ScheduleStatus::Live);
    assert_eq!(live_at_start.label, "Live");
    assert_eq!(finished_at_end.status, ScheduleStatus::Finished);
}

#[test]
fn test_publication_status_labels() {
    let classifier = StatusClassifier::new();

    let draft = classifier.classify_publication(WizardStatus::Draft);
    let review = classifier.classify_publication(WizardStatus::UnderReview);
    let published = classifier.classify_publication(WizardStatus::Published);

    assert_eq!(draft.color_key, "muted");
    assert_eq!(review.label, "Under Review");
    assert_eq!(published.color_key, "success");
}

#[test]
fn test_classification_serializes_for_screens() {
    let entity = open_tournament("cup", 32, 32);
    let classification = StatusClassifier::new().classify(&entity, fixed_now());

    let json = serde_json::to_value(classification).unwrap();

    assert_eq!(json["status"], "full");
    assert_eq!(json["colorKey"], "warning");
}
