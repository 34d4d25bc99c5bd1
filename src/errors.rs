// ABOUTME: Error and condition types re-exported from pierre-state-core
// ABOUTME: Provides AppError, ErrorCode, and the reported-condition taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use pierre_state_core::errors::*;
