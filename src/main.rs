// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trail-Journal console app.
//!
//! Logs hikes and scenic highlights against map coordinates, keeping the
//! journal on disk across runs.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trail_journal::config::Config;
use trail_journal::console;

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env()?;
    tracing::info!(
        storage_dir = %config.storage_dir.display(),
        "Starting trail-journal"
    );

    console::run(&config)
}

/// Initialize structured logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("trail_journal=debug".parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .with(format)
        .init();
}
