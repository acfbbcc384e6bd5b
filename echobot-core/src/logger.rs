//! Logging initialization: one human-readable fmt layer teed to stdout and a log file.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::{FmtSpan, Writer},
    fmt::time::FormatTime,
    fmt::writer::MakeWriterExt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Log file used when none is configured.
pub const DEFAULT_LOG_FILE: &str = "logs/echo-bot.log";

/// Local time as `YYYY-MM-DD HH:MM:SS`.
struct ChronoLocal;

impl FormatTime for ChronoLocal {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{} ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

/// `configured` when it is set and not blank, else [`DEFAULT_LOG_FILE`].
pub fn resolve_log_file(configured: Option<&str>) -> PathBuf {
    configured
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_LOG_FILE)
        .into()
}

/// Opens `path` for appending, creating it and its parent directories.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global tracing subscriber and returns the log file it writes to.
///
/// Lines look like `2026-01-01 12:00:00  INFO echobot: Starting bot polling...` followed by the
/// event's fields, on stdout and appended to the file from [`resolve_log_file`]. Level comes from
/// `RUST_LOG`, default [`DEFAULT_LOG_FILTER`]. Load `.env` before calling so `RUST_LOG` from the
/// file applies.
pub fn init_tracing(log_file: Option<&str>) -> anyhow::Result<PathBuf> {
    let path = resolve_log_file(log_file);
    let file = open_log_file(&path)
        .map_err(|e| anyhow::anyhow!("Failed to open log file {}: {}", path.display(), e))?;
    let writer = io::stdout.and(Arc::new(file));

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_timer(ChronoLocal)
        .with_target(true)
        .with_span_events(FmtSpan::NONE)
        .with_ansi(false);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(path)
}
