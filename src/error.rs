// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! Three tiers: `ValidationError` is user-correctable and surfaced to the
//! user without touching any state; `StorageError` wraps failures of the
//! durable key-value backend; `AppError` is the top-level type the
//! coordinator and the shell work with.

/// Form input rejected by the activity factory.
///
/// The messages mirror what the user is shown; `field()` gives a stable
/// machine-readable name for which input failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Fill in the hiking trail name")]
    TrailName,

    #[error("Check the distance and duration")]
    Numeric,

    #[error("Describe the highlight")]
    Description,
}

impl ValidationError {
    /// Name of the first failing input check.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::TrailName => "trailName",
            ValidationError::Numeric => "numeric",
            ValidationError::Description => "description",
        }
    }
}

/// Failure of the durable key-value backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// User-correctable form input problem. Surfaced, never logged as a fault.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Programmer/wiring error, not expected at runtime. Asserted in
    /// development builds, returned as an error in release builds.
    #[error("Precondition violated: {0}")]
    Precondition(&'static str),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;
