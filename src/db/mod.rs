// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Durable storage layer.

pub mod persistence;
pub mod storage;

pub use persistence::{PersistenceAdapter, ACTIVITIES_KEY, SCHEMA_VERSION};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
