//! Logging for the server binary
//!
//! Every event goes to stdout in human form and to `usersearch.log` under
//! the configured log directory as JSON lines. The log file rolls over at
//! midnight or at 10MB, keeping the nine most recent rolled files.

use anyhow::{Context, Result};
use rolling_file::{RollingConditionBasic, RollingFileAppender};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const LOG_FILE_NAME: &str = "usersearch.log";
const MAX_LOG_BYTES: u64 = 10 * 1024 * 1024;
const KEPT_LOG_FILES: usize = 9;

/// Used when `RUST_LOG` is unset or unparsable
const DEFAULT_FILTER: &str = "usersearch_server=debug,usersearch_core=debug,actix_web=info";

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop, so hold it until
/// the server exits.
pub fn init_telemetry(log_dir: impl AsRef<Path>) -> Result<WorkerGuard> {
    let log_dir = log_dir.as_ref();
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = RollingFileAppender::new(
        log_dir.join(LOG_FILE_NAME),
        RollingConditionBasic::new().daily().max_size(MAX_LOG_BYTES),
        KEPT_LOG_FILES,
    )?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // request spans are closed by TracingLogger, record them with their timing
    let json_layer = fmt::layer()
        .json()
        .with_writer(file_writer)
        .with_span_events(FmtSpan::CLOSE)
        .with_current_span(true)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(stdout_layer)
        .try_init()?;

    tracing::info!(
        log_dir = %log_dir.display(),
        file = LOG_FILE_NAME,
        "Logging initialized"
    );
    Ok(guard)
}
