//! Logging setup.
//!
//! Logs always go to stdout (journald picks them up when running as a
//! service). When a log directory is configured, a daily-rolling file is
//! written as well through a non-blocking writer.
//!
//! The filter comes from `RUST_LOG`, defaulting to [`DEFAULT_LOG_FILTER`].

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::app::AppError;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Prefix of rolling log files (`plantmon.log.2026-10-15`).
pub const LOG_FILE_PREFIX: &str = "plantmon.log";

/// Keeps the file writer alive. Dropping it flushes pending log lines.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Install the global tracing subscriber.
///
/// Must be called before a multi-threaded runtime is started so that the
/// local UTC offset can be determined for timestamps.
pub fn init_logging(log_directory: Option<&Path>) -> Result<LoggingGuard, AppError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let stdout_layer = fmt::layer()
        .with_timer(LocalTime::rfc_3339())
        .with_target(false);

    let (file_layer, file_guard) = match log_directory {
        Some(dir) => {
            fs::create_dir_all(dir).map_err(|e| {
                AppError::Logging(format!("cannot create {}: {}", dir.display(), e))
            })?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_timer(LocalTime::rfc_3339())
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}
