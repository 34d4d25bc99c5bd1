// ABOUTME: Integration tests for checklist scoring and tier assignment
// ABOUTME: Covers plain and weighted vectors, configurable thresholds, and settings feature rules
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_state_engine::config::ScoringConfig;
use pierre_state_engine::models::SettingsProfile;
use pierre_state_engine::scoring::{
    feature_vector, FeatureRule, ScoreEngine, ScoreTier, TierThresholds, WeightedFeature,
};

#[test]
fn test_three_of_four_is_moderate() {
    let score = ScoreEngine::new().compute_score(&[true, true, false, true]);

    assert_eq!(score.score, 75);
    assert_eq!(score.tier, ScoreTier::Moderate);
    assert_eq!(score.satisfied, 3);
    assert_eq!(score.total, 4);
}

#[test]
fn test_empty_vector_is_undetermined() {
    let score = ScoreEngine::new().compute_score(&[]);

    assert_eq!(score.score, 0);
    assert_eq!(score.tier, ScoreTier::Undetermined);
    assert_eq!(score.tier.label(), "Not Enough Data");
}

#[test]
fn test_score_bounds() {
    let engine = ScoreEngine::new();

    let none = engine.compute_score(&[false; 5]);
    let all = engine.compute_score(&[true; 5]);

    assert_eq!(none.score, 0);
    assert_eq!(none.tier, ScoreTier::Weak);
    assert_eq!(all.score, 100);
    assert_eq!(all.tier, ScoreTier::Strong);
}

#[test]
fn test_default_tier_boundaries() {
    let engine = ScoreEngine::new();

    assert_eq!(engine.tier_for(80), ScoreTier::Strong);
    assert_eq!(engine.tier_for(79), ScoreTier::Moderate);
    assert_eq!(engine.tier_for(60), ScoreTier::Moderate);
    assert_eq!(engine.tier_for(59), ScoreTier::Weak);
}

#[test]
fn test_rounding_to_nearest_integer() {
    let engine = ScoreEngine::new();

    assert_eq!(engine.compute_score(&[true, false, false]).score, 33);
    assert_eq!(engine.compute_score(&[true, true, false]).score, 67);
}

#[test]
fn test_exact_halves_round_up() {
    let engine = ScoreEngine::new();
    let checklist = |satisfied: usize, total: usize| -> Vec<bool> {
        (0..total).map(|index| index < satisfied).collect()
    };

    assert_eq!(engine.compute_score(&checklist(23, 40)).score, 58);
    assert_eq!(engine.compute_score(&checklist(46, 80)).score, 58);
    assert_eq!(engine.compute_score(&checklist(29, 200)).score, 15);
    assert_eq!(engine.compute_score(&checklist(57, 200)).score, 29);
    assert_eq!(engine.compute_score(&checklist(1, 2)).score, 50);
}

#[test]
fn test_custom_thresholds_from_config() {
    let config = ScoringConfig {
        thresholds: TierThresholds {
            strong: 90,
            moderate: 70,
        },
    };
    let engine = ScoreEngine::from_config(&config);

    let score = engine.compute_score(&[true, true, true, true, false]);

    assert_eq!(score.score, 80);
    assert_eq!(score.tier, ScoreTier::Moderate);
    assert_eq!(engine.thresholds().strong, 90);
}

#[test]
fn test_weighted_score() {
    let engine = ScoreEngine::new();
    let features = [
        WeightedFeature::new(true, 3.0),
        WeightedFeature::new(false, 1.0),
    ];

    let score = engine.compute_weighted_score(&features);

    assert_eq!(score.score, 75);
    assert_eq!(score.satisfied, 1);
    assert_eq!(score.total, 2);
}

#[test]
fn test_weighted_score_without_positive_weight_is_undetermined() {
    let engine = ScoreEngine::new();
    let features = [
        WeightedFeature::new(true, 0.0),
        WeightedFeature::new(true, -2.0),
        WeightedFeature::new(true, f64::NAN),
    ];

    assert_eq!(
        engine.compute_weighted_score(&features).tier,
        ScoreTier::Undetermined
    );
}

#[test]
fn test_privacy_profile_through_feature_rules() {
    let profile = SettingsProfile::new()
        .with_feature("twoFactorEnabled", true)
        .with_feature("shareLocation", false)
        .with_feature("publicProfile", true)
        .with_enum("activityVisibility", "followers");
    let rules = [
        FeatureRule::enabled("twoFactorEnabled"),
        FeatureRule::disabled("shareLocation"),
        FeatureRule::disabled("publicProfile"),
        FeatureRule::enum_not_equals("activityVisibility", "everyone"),
    ];

    assert_eq!(
        feature_vector(&profile, &rules),
        vec![true, true, false, true]
    );

    let score = ScoreEngine::new().score_profile(&profile, &rules);
    assert_eq!(score.score, 75);
    assert_eq!(score.tier, ScoreTier::Moderate);
}

#[test]
fn test_missing_settings_never_satisfy_a_rule() {
    let profile = SettingsProfile::new();
    let rules = [
        FeatureRule::enabled("twoFactorEnabled"),
        FeatureRule::disabled("shareLocation"),
        FeatureRule::enum_equals("activityVisibility", "private"),
        FeatureRule::enum_not_equals("activityVisibility", "everyone"),
    ];

    assert_eq!(feature_vector(&profile, &rules), vec![false; 4]);
}
