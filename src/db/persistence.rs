// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Snapshot persistence for the activity store.
//!
//! The whole store round-trips through a single key as a versioned JSON
//! snapshot. Saving happens after every mutating operation; there is no
//! batching, so the durable state never lags the in-memory state.

use serde::{Deserialize, Serialize};

use crate::db::KeyValueStorage;
use crate::error::StorageError;
use crate::models::Activity;
use crate::store::ActivityStore;

/// Storage key holding the activity snapshot.
pub const ACTIVITIES_KEY: &str = "activities";

/// Current snapshot schema version. Bump on any persisted-field change.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    schema_version: u32,
    activities: Vec<Activity>,
}

/// Round-trips the store's contents to and from durable storage.
pub struct PersistenceAdapter<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> PersistenceAdapter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Serialize the whole store under the activities key.
    pub fn save(&mut self, store: &ActivityStore) -> Result<(), StorageError> {
        let snapshot = Snapshot {
            schema_version: SCHEMA_VERSION,
            activities: store.all().to_vec(),
        };
        let payload = serde_json::to_string(&snapshot)?;
        self.storage.set(ACTIVITIES_KEY, &payload)
    }

    /// Load the persisted records, in their original order.
    ///
    /// Returns `Ok(None)` when the key has never been written, and also when
    /// the payload is malformed or carries an unknown schema version:
    /// corrupt persisted state must never block startup.
    pub fn load(&self) -> Result<Option<Vec<Activity>>, StorageError> {
        let Some(payload) = self.storage.get(ACTIVITIES_KEY)? else {
            return Ok(None);
        };

        let snapshot: Snapshot = match serde_json::from_str(&payload) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding malformed activity snapshot");
                return Ok(None);
            }
        };

        if snapshot.schema_version != SCHEMA_VERSION {
            tracing::warn!(
                found = snapshot.schema_version,
                expected = SCHEMA_VERSION,
                "Discarding activity snapshot with unknown schema version"
            );
            return Ok(None);
        }

        Ok(Some(snapshot.activities))
    }

    /// Erase the persisted snapshot. Used by the explicit reset action only.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.storage.delete(ACTIVITIES_KEY)
    }
}
