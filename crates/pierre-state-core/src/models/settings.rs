// ABOUTME: Settings profile record holding boolean toggles and enumerated choices
// ABOUTME: Input to feature-vector mapping for privacy and completeness scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A user's settings, e.g. privacy preferences
///
/// The score derived from a profile is never stored on it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SettingsProfile {
    /// Boolean toggles keyed by feature name
    #[serde(default)]
    pub features: BTreeMap<String, bool>,
    /// Enumerated settings keyed by setting name
    #[serde(default)]
    pub enums: BTreeMap<String, String>,
}

impl SettingsProfile {
    /// Create an empty profile
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a boolean feature
    #[must_use]
    pub fn with_feature(mut self, key: impl Into<String>, enabled: bool) -> Self {
        self.features.insert(key.into(), enabled);
        self
    }

    /// Set an enumerated value
    #[must_use]
    pub fn with_enum(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.enums.insert(key.into(), value.into());
        self
    }

    /// Look up a boolean feature
    #[must_use]
    pub fn feature(&self, key: &str) -> Option<bool> {
        self.features.get(key).copied()
    }

    /// Look up an enumerated value
    #[must_use]
    pub fn enum_value(&self, key: &str) -> Option<&str> {
        self.enums.get(key).map(String::as_str)
    }
}
