//! File-backed tracing setup for the terminal client.
//!
//! The TUI owns stdout/stderr, so log output goes exclusively to
//! `<cache dir>/logs/client.log`.
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE_NAME: &str = "client.log";

/// Install the global subscriber. Returns the log file path.
pub fn setup_logging() -> Result<PathBuf> {
    let log_dir = runtime::dirs::log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    // Leak the guard to keep file writer alive
    std::mem::forget(guard);

    let log_file = log_dir.join(LOG_FILE_NAME);
    tracing::info!("Log file: {}", log_file.display());

    Ok(log_file)
}
