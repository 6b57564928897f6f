//! Tracing setup.
//!
//! The terminal is owned by the UI while the app runs, so log output goes to
//! the `--log-file` when one is given and is discarded otherwise.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Filter from `RUST_LOG`-style directives, `warn` when none apply.
pub fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

/// Append to `path`, or drop everything when there is no log file.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn log_writer(path: Option<&Path>) -> io::Result<BoxMakeWriter> {
    match path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Ok(BoxMakeWriter::new(Mutex::new(file)))
        }
        None => Ok(BoxMakeWriter::new(io::sink)),
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let writer = log_writer(log_file).with_context(|| {
        format!(
            "Failed to open log file {}",
            log_file.map_or_else(String::new, |p| p.display().to_string())
        )
    })?;
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(())
}
