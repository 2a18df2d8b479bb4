// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory ordered collection of activities.
//!
//! Insertion order is creation order and survives persistence round-trips.
//! An id index keeps `find_by_id` O(1); id uniqueness is an invariant
//! guaranteed by the factory's id generation, not re-checked here.

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::Activity;

/// Ordered activity collection with an id index.
#[derive(Debug, Default)]
pub struct ActivityStore {
    activities: Vec<Activity>,
    index: HashMap<Uuid, usize>,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from persisted records, keeping their original order.
    pub fn from_records(records: Vec<Activity>) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(position, activity)| (activity.id, position))
            .collect();
        Self {
            activities: records,
            index,
        }
    }

    /// Append an activity. Content is never deduplicated; only ids are
    /// assumed unique.
    pub fn add(&mut self, activity: Activity) {
        self.index.insert(activity.id, self.activities.len());
        self.activities.push(activity);
    }

    /// Remove an activity by id.
    ///
    /// Returns the removed activity, or `None` when the id is absent. Never
    /// panics: deleting an unknown id is a signal, not an error.
    pub fn remove(&mut self, id: &Uuid) -> Option<Activity> {
        let position = self.index.remove(id)?;
        let removed = self.activities.remove(position);
        // Everything after the removal point shifted down by one.
        for entry in self.index.values_mut() {
            if *entry > position {
                *entry -= 1;
            }
        }
        Some(removed)
    }

    /// All activities, in creation order. Read-only view.
    pub fn all(&self) -> &[Activity] {
        &self.activities
    }

    pub fn find_by_id(&self, id: &Uuid) -> Option<&Activity> {
        self.index.get(id).map(|&position| &self.activities[position])
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}
