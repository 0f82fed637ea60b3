use crate::error::{BookqlError, Result};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to log file. If None, logs only to stderr
///
/// # Errors
/// Fails if the log directory cannot be created or the log file cannot be opened.
pub fn init(verbose: bool, log_file: Option<PathBuf>) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bookql={}", default_level)));

    // stdout carries query results, so logs go to stderr
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let result = if let Some(log_path) = log_file {
        let file_layer = fmt::layer()
            .with_writer(file_appender(&log_path)?)
            .with_ansi(false)
            .json();

        subscriber.with(file_layer).try_init()
    } else {
        subscriber.try_init()
    };

    result.map_err(|e| BookqlError::Logging(e.to_string()))
}

fn file_appender(log_path: &Path) -> Result<RollingFileAppender> {
    let log_dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(log_dir).map_err(|e| {
        BookqlError::Logging(format!("Failed to create {}: {}", log_dir.display(), e))
    })?;

    let file_name = log_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "bookql.log".to_string());

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file_name)
        .build(log_dir)
        .map_err(|e| {
            BookqlError::Logging(format!(
                "Failed to open log file in {}: {}",
                log_dir.display(),
                e
            ))
        })
}
