// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trail-Journal: log hikes and scenic highlights on a map.
//!
//! The core is the activity data model plus the coordinator that keeps map
//! markers, list rows, and the persisted snapshot mutually consistent. UI
//! concerns sit behind collaborator traits so front-ends and test doubles
//! plug in the same way; the bundled console shell is one such front-end.

pub mod config;
pub mod console;
pub mod coordinator;
pub mod db;
pub mod error;
pub mod factory;
pub mod models;
pub mod store;
pub mod time_utils;
