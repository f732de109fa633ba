//! Log sink for the server.
//!
//! Every event goes to the append-only log file (timestamp, level, message
//! and fields, no colors) and is echoed to stdout. The subscriber is built
//! explicitly and handed to the caller, who scopes it over the server run.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

pub fn subscriber(log_file: &Path) -> anyhow::Result<impl Subscriber + Send + Sync + 'static> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("failed to open log file {}", log_file.display()))?;

    Ok(tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(fmt::layer().with_target(false).with_level(true))
        .with(LevelFilter::INFO))
}
