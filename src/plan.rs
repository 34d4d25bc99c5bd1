// ABOUTME: Collection-bearing plans (workout, course, meal) with totals derived from their items
// ABOUTME: Every item change recomputes totals so the stored totals can never drift
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::metrics::{compute_progress, MetricsCalculator, MetricsReport};
use pierre_state_core::models::{Item, Progress, Totals};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Domain of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    /// Exercises with work and rest times
    Workout,
    /// Course modules
    Course,
    /// Meal components with declared calories
    Meal,
}

/// A plan whose totals are always `calculator.compute_totals(items)`
///
/// There is no totals setter. Item changes go through the `with_*`/`without_*`
/// methods, which return a new plan with recomputed totals.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    id: String,
    kind: PlanKind,
    items: Vec<Item>,
    totals: Totals,
    #[serde(skip)]
    calculator: MetricsCalculator,
}

impl Plan {
    /// Build a plan and derive its totals
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        kind: PlanKind,
        items: Vec<Item>,
        calculator: MetricsCalculator,
    ) -> Self {
        let totals = calculator.compute_totals(&items);
        Self {
            id: id.into(),
            kind,
            items,
            totals,
            calculator,
        }
    }

    /// Plan identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Plan domain
    #[must_use]
    pub const fn kind(&self) -> PlanKind {
        self.kind
    }

    /// Items in plan order
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Totals derived from the current items
    #[must_use]
    pub const fn totals(&self) -> Totals {
        self.totals
    }

    /// Totals plus strict-mode warnings for the current items
    #[must_use]
    pub fn report(&self) -> MetricsReport {
        self.calculator.compute_totals_checked(&self.items)
    }

    /// Append an item
    #[must_use]
    pub fn with_item(&self, item: Item) -> Self {
        let mut items = self.items.clone();
        items.push(item);
        self.with_items(items)
    }

    /// Remove every item with the given id
    #[must_use]
    pub fn without_item(&self, item_id: &str) -> Self {
        let items = self
            .items
            .iter()
            .filter(|item| item.id != item_id)
            .cloned()
            .collect();
        self.with_items(items)
    }

    /// Replace all items
    #[must_use]
    pub fn with_items(&self, items: Vec<Item>) -> Self {
        Self::new(self.id.clone(), self.kind, items, self.calculator.clone())
    }

    /// Share of items whose id appears in `completed_ids`
    ///
    /// Ids that do not belong to the plan are ignored.
    #[must_use]
    pub fn progress(&self, completed_ids: &[&str]) -> Progress {
        let completed: HashSet<&str> = completed_ids.iter().copied().collect();
        let done = self
            .items
            .iter()
            .filter(|item| completed.contains(item.id.as_str()))
            .count();
        compute_progress(done, self.items.len())
    }
}
