// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Datelike, Utc};

// Month labels as shown in list rows ("Sept 4, 2026").
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "June", "July", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// Format a timestamp as the short human date label used in list rows.
pub fn format_date_label(date: DateTime<Utc>) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{} {}, {}", month, date.day(), date.year())
}
