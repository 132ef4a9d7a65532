//! File logging.
//!
//! The terminal player owns stdout and stderr while it runs, so logs go to
//! `${SWIFTCODE_HOME}/logs/swiftcode.log` through a non-blocking writer.
//! The filter comes from `SWIFTCODE_LOG` if set, otherwise from `[log] level`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{LogConfig, paths};

/// Environment variable overriding the configured log filter.
pub const LOG_ENV: &str = "SWIFTCODE_LOG";

/// Log file name inside the logs directory.
pub const LOG_FILE: &str = "swiftcode.log";

/// Flushes pending log lines when dropped.
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _worker: WorkerGuard,
}

/// Installs the global subscriber writing to the default logs directory.
///
/// Keep the returned guard alive for the whole process.
pub fn init(config: &LogConfig) -> Result<LogGuard> {
    init_in(&paths::logs_dir(), config)
}

/// Installs the global subscriber writing to `dir`.
pub fn init_in(dir: &Path, config: &LogConfig) -> Result<LogGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(LogGuard { _worker: guard })
}

fn filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}
