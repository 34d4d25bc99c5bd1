// ABOUTME: Caller-supplied draft persistence capability awaited by the wizard
// ABOUTME: Includes an in-memory sink for callers without storage and for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use pierre_state_core::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// Where wizard drafts are persisted
///
/// Persistence is best-effort: a failed save is reported to the caller as a
/// non-fatal condition and never blocks navigation.
#[async_trait]
pub trait DraftSink<D: Sync>: Send + Sync {
    /// Store the draft for a wizard session, overwriting any previous draft
    async fn persist(&self, session_id: Uuid, draft: &D) -> AppResult<()>;
}

/// Draft sink that keeps the latest draft per session in memory
#[derive(Debug)]
pub struct MemoryDraftSink<D> {
    drafts: Mutex<HashMap<Uuid, D>>,
    saves: Mutex<usize>,
}

impl<D> Default for MemoryDraftSink<D> {
    fn default() -> Self {
        Self {
            drafts: Mutex::new(HashMap::new()),
            saves: Mutex::new(0),
        }
    }
}

impl<D: Clone> MemoryDraftSink<D> {
    /// Create an empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest draft stored for a session
    #[must_use]
    pub fn latest(&self, session_id: Uuid) -> Option<D> {
        self.drafts
            .lock()
            .ok()
            .and_then(|drafts| drafts.get(&session_id).cloned())
    }

    /// Number of successful saves across all sessions
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.lock().map_or(0, |saves| *saves)
    }
}

#[async_trait]
impl<D> DraftSink<D> for MemoryDraftSink<D>
where
    D: Clone + Send + Sync,
{
    async fn persist(&self, session_id: Uuid, draft: &D) -> AppResult<()> {
        self.drafts
            .lock()
            .map_err(|e| AppError::internal(format!("draft store poisoned: {e}")))?
            .insert(session_id, draft.clone());
        *self
            .saves
            .lock()
            .map_err(|e| AppError::internal(format!("save counter poisoned: {e}")))? += 1;
        Ok(())
    }
}
