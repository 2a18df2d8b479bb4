// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use crate::models::Coordinates;

/// Map center used when no device position is available (Amsterdam).
const FALLBACK_COORDS: Coordinates = Coordinates {
    lat: 52.354_644_8,
    lng: 4.833_749_5,
};

const DEFAULT_STORAGE_DIR: &str = "./data";
const DEFAULT_MAP_ZOOM: u8 = 13;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted journal.
    pub storage_dir: PathBuf,
    /// Map center used when no device position is available.
    pub fallback_coords: Coordinates,
    /// Initial map zoom level.
    pub map_zoom: u8,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            fallback_coords: FALLBACK_COORDS,
            map_zoom: DEFAULT_MAP_ZOOM,
        }
    }
}

impl Config {
    /// Load configuration from environment variables. Every value has a
    /// default, so an empty environment works.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let storage_dir = env::var("TRAIL_JOURNAL_STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_DIR));

        let fallback_coords = match env::var("TRAIL_JOURNAL_FALLBACK_COORDS") {
            Ok(raw) => parse_coords(&raw)
                .ok_or(ConfigError::Invalid("TRAIL_JOURNAL_FALLBACK_COORDS"))?,
            Err(_) => FALLBACK_COORDS,
        };

        let map_zoom = env::var("TRAIL_JOURNAL_MAP_ZOOM")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_MAP_ZOOM);

        Ok(Self {
            storage_dir,
            fallback_coords,
            map_zoom,
        })
    }
}

/// Parse a "lat,lng" pair.
fn parse_coords(raw: &str) -> Option<Coordinates> {
    let (lat, lng) = raw.split_once(',')?;
    Some(Coordinates {
        lat: lat.trim().parse().ok()?,
        lng: lng.trim().parse().ok()?,
    })
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
