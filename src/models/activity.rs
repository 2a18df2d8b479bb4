// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity model: one logged location plus kind-specific fields.
//!
//! An [`Activity`] is immutable after construction. Its `id` is the join key
//! across the store, the map-marker table, and the rendered list, so the
//! three views can be kept consistent by id alone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time_utils::format_date_label;

/// Hiking faster than this shows a runner instead of a walker in popups.
const WALKING_SPEED_CUTOFF_KMH: f64 = 5.5;

/// A map coordinate as (latitude, longitude).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Activity kind discriminator.
///
/// Used for the form's kind selector and as the marker icon variant. The
/// kind-specific fields live in [`ActivityKind`]; this tag is what gets
/// passed around when only the discriminator matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindTag {
    Hiking,
    Highlight,
}

impl KindTag {
    /// Display label ("Hiking" / "Highlight").
    pub fn label(&self) -> &'static str {
        match self {
            KindTag::Hiking => "Hiking",
            KindTag::Highlight => "Highlight",
        }
    }
}

/// Kind-specific payload of an activity.
///
/// Serialized with a `kind` tag so persisted records restore as the correct
/// variant, and so adding a third kind is a single compile-checked extension
/// point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActivityKind {
    Hiking {
        trail_name: String,
        distance_km: f64,
        duration_min: f64,
        /// Derived once at construction and stored; never recomputed on
        /// later reads or on restore from persistence.
        speed_kmh: f64,
    },
    Highlight {
        description: String,
    },
}

impl ActivityKind {
    pub fn tag(&self) -> KindTag {
        match self {
            ActivityKind::Hiking { .. } => KindTag::Hiking,
            ActivityKind::Highlight { .. } => KindTag::Highlight,
        }
    }
}

/// One logged activity. Fields are set once at construction and never
/// mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique id, the join key across store, marker table, and list rows.
    pub id: Uuid,
    /// Creation timestamp, captured once.
    pub created_at: DateTime<Utc>,
    /// Human date string, computed once at construction.
    pub date_label: String,
    /// Where the activity happened.
    pub coordinates: Coordinates,
    /// Kind tag plus kind-specific fields, flattened into the record.
    #[serde(flatten)]
    pub kind: ActivityKind,
}

impl Activity {
    /// Build a hiking activity. The factory has already validated the fields.
    pub(crate) fn new_hiking(
        coordinates: Coordinates,
        trail_name: String,
        distance_km: f64,
        duration_min: f64,
    ) -> Self {
        let speed_kmh = distance_km / (duration_min / 60.0);
        Self::new(
            coordinates,
            ActivityKind::Hiking {
                trail_name,
                distance_km,
                duration_min,
                speed_kmh,
            },
        )
    }

    /// Build a highlight activity. The factory has already validated the
    /// description.
    pub(crate) fn new_highlight(coordinates: Coordinates, description: String) -> Self {
        Self::new(coordinates, ActivityKind::Highlight { description })
    }

    fn new(coordinates: Coordinates, kind: ActivityKind) -> Self {
        let created_at = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at,
            date_label: format_date_label(created_at),
            coordinates,
            kind,
        }
    }

    /// The field shown as the activity's name: trail name or description.
    pub fn display_name(&self) -> &str {
        match &self.kind {
            ActivityKind::Hiking { trail_name, .. } => trail_name,
            ActivityKind::Highlight { description } => description,
        }
    }

    /// Marker popup text: an emoji for the kind (walker or runner for
    /// hiking, depending on speed) followed by the display name.
    pub fn popup_label(&self) -> String {
        let emoji = match &self.kind {
            ActivityKind::Hiking { speed_kmh, .. } => {
                if *speed_kmh <= WALKING_SPEED_CUTOFF_KMH {
                    "🚶"
                } else {
                    "🏃"
                }
            }
            ActivityKind::Highlight { .. } => "🔆",
        };
        format!("{} {}", emoji, self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords() -> Coordinates {
        Coordinates { lat: 52.1, lng: 4.8 }
    }

    #[test]
    fn test_hiking_speed_computed_at_construction() {
        let activity = Activity::new_hiking(coords(), "Ridge Trail".to_string(), 10.0, 120.0);
        match activity.kind {
            ActivityKind::Hiking { speed_kmh, .. } => assert_eq!(speed_kmh, 5.0),
            _ => panic!("expected hiking variant"),
        }
    }

    #[test]
    fn test_popup_label_walker_vs_runner() {
        let slow = Activity::new_hiking(coords(), "Easy Loop".to_string(), 5.0, 60.0);
        assert_eq!(slow.popup_label(), "🚶 Easy Loop");

        let fast = Activity::new_hiking(coords(), "Fast Loop".to_string(), 12.0, 60.0);
        assert_eq!(fast.popup_label(), "🏃 Fast Loop");
    }

    #[test]
    fn test_popup_label_highlight() {
        let activity = Activity::new_highlight(coords(), "Windmill".to_string());
        assert_eq!(activity.popup_label(), "🔆 Windmill");
    }

    #[test]
    fn test_kind_tag_mapping() {
        let hiking = Activity::new_hiking(coords(), "Trail".to_string(), 1.0, 30.0);
        assert_eq!(hiking.kind.tag(), KindTag::Hiking);

        let highlight = Activity::new_highlight(coords(), "View".to_string());
        assert_eq!(highlight.kind.tag(), KindTag::Highlight);
    }

    #[test]
    fn test_serialized_record_is_flat_and_kind_tagged() {
        let activity = Activity::new_hiking(coords(), "Ridge Trail".to_string(), 10.0, 120.0);
        let value = serde_json::to_value(&activity).expect("serializes");

        assert_eq!(value["kind"], "hiking");
        assert_eq!(value["trail_name"], "Ridge Trail");
        assert_eq!(value["distance_km"], 10.0);
        assert_eq!(value["duration_min"], 120.0);
        assert_eq!(value["speed_kmh"], 5.0);
        assert!(value["id"].is_string());
        assert!(value["date_label"].is_string());
        assert_eq!(value["coordinates"]["lat"], 52.1);
    }

    #[test]
    fn test_round_trip_restores_variant_and_speed() {
        let activity = Activity::new_hiking(coords(), "Ridge Trail".to_string(), 10.0, 120.0);
        let json = serde_json::to_string(&activity).expect("serializes");
        let restored: Activity = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(restored, activity);
    }
}
