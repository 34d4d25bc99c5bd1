// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default rates, thresholds, and display keys for the derived-state engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Every value here is a default. Callers override them through `EngineConfig`
//! rather than patching literals at call sites.

/// Time conversion constants
pub mod time {
    /// Seconds in one minute
    pub const SECONDS_PER_MINUTE: u64 = 60;
    /// Seconds in one minute as f64
    pub const SECONDS_PER_MINUTE_F64: f64 = 60.0;
}

/// Metrics aggregation defaults
pub mod metrics {
    /// Estimated calories burned per second of work (workout domain)
    pub const DEFAULT_CALORIE_RATE: f64 = 0.15;
    /// Collections at or above this size are summed on the rayon pool
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4_096;
    /// Field name reported when an item has no duration
    pub const FIELD_DURATION: &str = "durationSeconds";
    /// Field name reported when an item has no rest time
    pub const FIELD_REST: &str = "restSeconds";
    /// Field name reported when an item has no declared calories
    pub const FIELD_CALORIES: &str = "calories";
    /// Upper bound for percentages
    pub const MAX_PERCENT: u8 = 100;
}

/// Score tier defaults
pub mod scoring {
    /// Minimum score for the "strong" tier
    pub const DEFAULT_STRONG_THRESHOLD: u8 = 80;
    /// Minimum score for the "moderate" tier
    pub const DEFAULT_MODERATE_THRESHOLD: u8 = 60;
    /// Maximum score
    pub const MAX_SCORE: u8 = 100;
}

/// Filtering and sorting defaults
pub mod filtering {
    /// Default sort key when a requested key is unknown
    pub const DEFAULT_SORT_KEY: &str = "lastUsedAt";
    /// Criteria at or above this collection size are evaluated on the rayon pool
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4_096;
}

/// Status display keys shared by every classifier
pub mod status {
    /// Label for entities whose registration deadline has passed
    pub const LABEL_CLOSED: &str = "Registration Closed";
    /// Label for entities at capacity
    pub const LABEL_FULL: &str = "Full";
    /// Label for entities accepting registrations
    pub const LABEL_OPEN: &str = "Open";
    /// Label for the explicit fallback state
    pub const LABEL_UPCOMING: &str = "Upcoming";
    /// Label for sessions that have not started yet
    pub const LABEL_SCHEDULED: &str = "Scheduled";
    /// Label for sessions in progress
    pub const LABEL_LIVE: &str = "Live";
    /// Label for sessions that have ended
    pub const LABEL_FINISHED: &str = "Finished";
    /// Label for unsubmitted drafts
    pub const LABEL_DRAFT: &str = "Draft";
    /// Label for drafts being edited
    pub const LABEL_IN_PROGRESS: &str = "In Progress";
    /// Label for submissions awaiting review
    pub const LABEL_UNDER_REVIEW: &str = "Under Review";
    /// Label for published content
    pub const LABEL_PUBLISHED: &str = "Published";

    /// Color key for error-like states
    pub const COLOR_ERROR: &str = "error";
    /// Color key for warning-like states
    pub const COLOR_WARNING: &str = "warning";
    /// Color key for positive states
    pub const COLOR_SUCCESS: &str = "success";
    /// Color key for informational states
    pub const COLOR_INFO: &str = "info";
    /// Color key for inactive states
    pub const COLOR_MUTED: &str = "muted";
}
