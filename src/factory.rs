// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Builds validated activities from raw form input.
//!
//! The form UI hands its inputs over as plain strings; this module is the
//! only place they are checked and turned into a typed [`Activity`]. Pure
//! function of its inputs plus the current clock; no I/O.

use crate::error::ValidationError;
use crate::models::{Activity, Coordinates, KindTag};

/// Raw form input exactly as the form UI hands it over.
#[derive(Debug, Clone, Default)]
pub struct RawFields {
    pub trail_name: String,
    pub distance_km: String,
    pub duration_min: String,
    pub description: String,
}

/// Validate raw input for the given kind and construct the activity.
///
/// Checks run in a fixed order (string fields before numeric fields) so the
/// reported failure is deterministic. The caller guarantees a pending
/// location exists; the factory only consumes it.
pub fn build(
    kind: KindTag,
    pending: Coordinates,
    raw: &RawFields,
) -> Result<Activity, ValidationError> {
    match kind {
        KindTag::Hiking => {
            let trail_name = raw.trail_name.trim();
            if trail_name.is_empty() {
                return Err(ValidationError::TrailName);
            }

            let distance_km = parse_positive(&raw.distance_km).ok_or(ValidationError::Numeric)?;
            let duration_min = parse_positive(&raw.duration_min).ok_or(ValidationError::Numeric)?;

            Ok(Activity::new_hiking(
                pending,
                trail_name.to_string(),
                distance_km,
                duration_min,
            ))
        }
        KindTag::Highlight => {
            let description = raw.description.trim();
            if description.is_empty() {
                return Err(ValidationError::Description);
            }

            Ok(Activity::new_highlight(pending, description.to_string()))
        }
    }
}

/// Parse a finite, strictly positive number out of raw form text.
fn parse_positive(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}
