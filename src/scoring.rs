// ABOUTME: Domain-agnostic checklist scoring that reduces boolean feature vectors to 0-100
// ABOUTME: Used for privacy scores, plan completeness, and other weighted checklists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Score Engine
//!
//! The engine only sees booleans. Screens decide which settings count as a
//! satisfied feature, either by building the vector themselves or through
//! [`FeatureRule`]s evaluated against a [`SettingsProfile`].

use crate::config::ScoringConfig;
use crate::metrics::rounded_percent;
use pierre_state_core::constants::scoring::{
    DEFAULT_MODERATE_THRESHOLD, DEFAULT_STRONG_THRESHOLD, MAX_SCORE,
};
use pierre_state_core::models::SettingsProfile;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Minimum scores for each tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TierThresholds {
    /// Scores at or above this are strong
    pub strong: u8,
    /// Scores at or above this (and below strong) are moderate
    pub moderate: u8,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            strong: DEFAULT_STRONG_THRESHOLD,
            moderate: DEFAULT_MODERATE_THRESHOLD,
        }
    }
}

/// Qualitative tier of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    /// At or above the strong threshold
    Strong,
    /// At or above the moderate threshold
    Moderate,
    /// Below the moderate threshold
    Weak,
    /// No features to score
    Undetermined,
}

impl ScoreTier {
    /// Stable identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
            Self::Undetermined => "undetermined",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Weak => "Needs Attention",
            Self::Undetermined => "Not Enough Data",
        }
    }
}

/// Result of scoring a feature vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    /// Score in `0..=100`
    pub score: u8,
    /// Qualitative tier
    pub tier: ScoreTier,
    /// Number of satisfied features
    pub satisfied: usize,
    /// Number of features considered
    pub total: usize,
}

/// A feature with a relative weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedFeature {
    /// Whether the feature is satisfied
    pub enabled: bool,
    /// Relative weight; negative or non-finite weights count as zero
    pub weight: f64,
}

impl WeightedFeature {
    /// Create a weighted feature
    #[must_use]
    pub const fn new(enabled: bool, weight: f64) -> Self {
        Self { enabled, weight }
    }

    fn effective_weight(&self) -> f64 {
        if self.weight.is_finite() {
            self.weight.max(0.0)
        } else {
            0.0
        }
    }
}

/// Maps one setting of a [`SettingsProfile`] to a satisfied/unsatisfied feature
///
/// Missing keys always map to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum FeatureRule {
    /// Satisfied when the toggle is on (e.g. two-factor enabled)
    Enabled {
        /// Toggle name
        key: String,
    },
    /// Satisfied when the toggle is off (e.g. profile not public)
    Disabled {
        /// Toggle name
        key: String,
    },
    /// Satisfied when the enumerated setting has `value`
    EnumEquals {
        /// Setting name
        key: String,
        /// Required value
        value: String,
    },
    /// Satisfied when the enumerated setting is present and differs from `value`
    EnumNotEquals {
        /// Setting name
        key: String,
        /// Rejected value
        value: String,
    },
}

impl FeatureRule {
    /// Toggle must be on
    #[must_use]
    pub fn enabled(key: impl Into<String>) -> Self {
        Self::Enabled { key: key.into() }
    }

    /// Toggle must be off
    #[must_use]
    pub fn disabled(key: impl Into<String>) -> Self {
        Self::Disabled { key: key.into() }
    }

    /// Enumerated setting must equal `value`
    #[must_use]
    pub fn enum_equals(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::EnumEquals {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Enumerated setting must be set to something other than `value`
    #[must_use]
    pub fn enum_not_equals(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::EnumNotEquals {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Evaluate the rule against a profile
    #[must_use]
    pub fn evaluate(&self, profile: &SettingsProfile) -> bool {
        match self {
            Self::Enabled { key } => profile.feature(key) == Some(true),
            Self::Disabled { key } => profile.feature(key) == Some(false),
            Self::EnumEquals { key, value } => profile.enum_value(key) == Some(value.as_str()),
            Self::EnumNotEquals { key, value } => profile
                .enum_value(key)
                .is_some_and(|actual| actual != value),
        }
    }
}

/// Build a feature vector from a profile, one entry per rule
#[must_use]
pub fn feature_vector(profile: &SettingsProfile, rules: &[FeatureRule]) -> Vec<bool> {
    rules.iter().map(|rule| rule.evaluate(profile)).collect()
}

/// Checklist score engine
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEngine {
    thresholds: TierThresholds,
}

impl ScoreEngine {
    /// Create an engine with default thresholds (80 strong, 60 moderate)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine from configuration
    #[must_use]
    pub const fn from_config(config: &ScoringConfig) -> Self {
        Self {
            thresholds: config.thresholds,
        }
    }

    /// Use custom thresholds
    #[must_use]
    pub const fn with_thresholds(mut self, thresholds: TierThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> TierThresholds {
        self.thresholds
    }

    /// Tier for a score in `0..=100`
    #[must_use]
    pub const fn tier_for(&self, score: u8) -> ScoreTier {
        if score >= self.thresholds.strong {
            ScoreTier::Strong
        } else if score >= self.thresholds.moderate {
            ScoreTier::Moderate
        } else {
            ScoreTier::Weak
        }
    }

    /// `round(100 * satisfied / total)`; an empty vector scores 0 and is undetermined
    #[must_use]
    pub fn compute_score(&self, features: &[bool]) -> Score {
        let satisfied = features.iter().filter(|enabled| **enabled).count();
        let total = features.len();
        if total == 0 {
            return undetermined();
        }

        let score = rounded_percent(satisfied, total);
        debug!(satisfied, total, score, "Computed checklist score");
        Score {
            score,
            tier: self.tier_for(score),
            satisfied,
            total,
        }
    }

    /// Weighted variant; a zero total weight is undetermined
    #[must_use]
    pub fn compute_weighted_score(&self, features: &[WeightedFeature]) -> Score {
        let total_weight: f64 = features.iter().map(WeightedFeature::effective_weight).sum();
        if features.is_empty() || total_weight <= 0.0 {
            return undetermined();
        }

        let satisfied_weight: f64 = features
            .iter()
            .filter(|feature| feature.enabled)
            .map(WeightedFeature::effective_weight)
            .sum();
        let score = weighted_percent(satisfied_weight, total_weight);
        Score {
            score,
            tier: self.tier_for(score),
            satisfied: features.iter().filter(|feature| feature.enabled).count(),
            total: features.len(),
        }
    }

    /// Score a settings profile through feature rules
    #[must_use]
    pub fn score_profile(&self, profile: &SettingsProfile, rules: &[FeatureRule]) -> Score {
        self.compute_score(&feature_vector(profile, rules))
    }
}

const fn undetermined() -> Score {
    Score {
        score: 0,
        tier: ScoreTier::Undetermined,
        satisfied: 0,
        total: 0,
    }
}

fn weighted_percent(part: f64, whole: f64) -> u8 {
    (part * f64::from(MAX_SCORE) / whole)
        .round()
        .clamp(0.0, f64::from(MAX_SCORE)) as u8
}
