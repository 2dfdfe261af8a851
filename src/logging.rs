//! File-based logging for Sublyme
//!
//! The TUI owns the terminal, so tracing output goes to a rotating file
//! instead of stdout.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const LOG_FILE_PREFIX: &str = "sublyme";
const DEFAULT_FILTER: &str = "sublyme=debug,warn";

/// Initialize the logging system.
///
/// Logs are written to `<log_dir>/sublyme.YYYY-MM-DD.log` with daily rotation.
/// `RUST_LOG` overrides the default filter (`sublyme=debug,warn`).
///
/// The returned guard flushes buffered lines on drop; keep it alive for the
/// lifetime of the application.
pub fn init_logging(log_dir: &Path) -> anyhow::Result<WorkerGuard> {
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir)?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI colors in log files
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!("Logging initialized - logs written to {}/", log_dir.display());

    Ok(guard)
}

/// Log a state operation that the controller swallows on failure
#[macro_export]
macro_rules! log_ignored {
    ($operation:expr, $result:expr) => {
        if let Err(e) = &$result {
            tracing::debug!(operation = $operation, error = %e, "Ignored state operation");
        }
    };
}
