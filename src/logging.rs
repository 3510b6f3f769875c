//! Logging - tracing subscriber setup
//!
//! Logs go to stdout and to a daily-rolling file in the data directory.
//! `RUST_LOG` overrides the default `info` filter.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::constants::LOG_FILE_PREFIX;
use crate::helpers::get_or_create_log_dir;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Returns the file writer guard; dropping it flushes and stops file logging.
/// When the log directory cannot be created only the stdout layer is installed.
pub fn init() -> Option<WorkerGuard> {
    let stdout_layer = fmt::layer()
        .with_target(true)
        .with_timer(LocalTime::rfc_3339());

    let (file_layer, guard) = match get_or_create_log_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_timer(LocalTime::rfc_3339())
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("File logging disabled: {e}");
            (None, None)
        }
    };

    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(stdout_layer)
        .with(file_layer)
        .try_init();

    guard
}
