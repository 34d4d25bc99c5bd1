// ABOUTME: Engine constants re-exported from pierre-state-core
// ABOUTME: Default rates, thresholds, field names, and status labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use pierre_state_core::constants::*;
