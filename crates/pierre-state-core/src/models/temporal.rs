// ABOUTME: Temporal entity record for tournaments and sessions with registration windows
// ABOUTME: Carries schedule, deadline, and capacity fields read by status classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of temporal entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalKind {
    /// Competitive event with brackets
    #[default]
    Tournament,
    /// Class or training session
    Session,
}

impl TemporalKind {
    /// Stable identifier used by filters
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tournament => "tournament",
            Self::Session => "session",
        }
    }
}

/// A tournament or session with a schedule and limited places
///
/// `registered_count <= capacity` is expected but not enforced here. The status
/// classifier reports violations instead of clamping them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalEntity {
    /// Identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Tournament or session
    #[serde(default)]
    pub kind: TemporalKind,
    /// Sport or discipline, e.g. "Football"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,
    /// Venue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Scheduled start
    pub start_at: DateTime<Utc>,
    /// Scheduled end
    pub end_at: DateTime<Utc>,
    /// Last moment registrations are accepted
    pub registration_deadline_at: DateTime<Utc>,
    /// Maximum number of participants
    pub capacity: u32,
    /// Current number of participants
    #[serde(default)]
    pub registered_count: u32,
    /// Free-form tags used by filters
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TemporalEntity {
    /// Create an entity with no capacity and no registrations
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
        registration_deadline_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind: TemporalKind::default(),
            sport: None,
            location: None,
            start_at,
            end_at,
            registration_deadline_at,
            capacity: 0,
            registered_count: 0,
            tags: Vec::new(),
        }
    }

    /// Set capacity and current registrations
    #[must_use]
    pub fn with_capacity(mut self, capacity: u32, registered_count: u32) -> Self {
        self.capacity = capacity;
        self.registered_count = registered_count;
        self
    }

    /// Set the kind
    #[must_use]
    pub fn with_kind(mut self, kind: TemporalKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the sport
    #[must_use]
    pub fn with_sport(mut self, sport: impl Into<String>) -> Self {
        self.sport = Some(sport.into());
        self
    }

    /// Set the venue
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Add a tag
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Places left, zero when at or over capacity
    #[must_use]
    pub const fn spots_remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.registered_count)
    }

    /// Registrations as a fraction of capacity; zero capacity reads as full
    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        if self.capacity == 0 {
            return 1.0;
        }
        f64::from(self.registered_count) / f64::from(self.capacity)
    }
}
