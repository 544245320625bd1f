//! Logging Setup
//!
//! The TUI owns stdout, so logs only ever go to a file: a daily-rolling file
//! under `~/.mateapps/logs/` in debug mode, or the file named in config.

use crate::config::{LoggingConfig, mateapps_home};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "mateapps.log";

/// Default log directory: `~/.mateapps/logs/`
pub fn log_dir() -> PathBuf {
    mateapps_home().join("logs")
}

/// Where logs should be written, if anywhere
pub fn log_target(config: &LoggingConfig, debug: bool) -> Option<LogTarget> {
    match (&config.file, debug) {
        (Some(file), _) => Some(LogTarget::File(file.clone())),
        (None, true) => Some(LogTarget::Rolling(log_dir())),
        (None, false) => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Single file from configuration
    File(PathBuf),
    /// Daily-rolling files in a directory
    Rolling(PathBuf),
}

/// Filter directive: `RUST_LOG` wins, then the configured level (forced to
/// at least `debug` in debug mode)
fn filter_for(config: &LoggingConfig, debug: bool) -> EnvFilter {
    let level = if debug && !matches!(config.level.as_str(), "trace" | "debug") {
        "debug"
    } else {
        config.level.as_str()
    };
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mateapps={}", level)))
}

/// Install the global subscriber.
///
/// Returns the appender guard, which must be held until exit so buffered
/// lines are flushed. `None` means logging is off.
pub fn init(config: &LoggingConfig, debug: bool) -> Result<Option<WorkerGuard>> {
    let Some(target) = log_target(config, debug) else {
        return Ok(None);
    };

    let appender = match &target {
        LogTarget::File(path) => {
            let (dir, name) = split_file(path)?;
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory {:?}", dir))?;
            tracing_appender::rolling::never(dir, name)
        }
        LogTarget::Rolling(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {:?}", dir))?;
            tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX)
        }
    };
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter_for(config, debug))
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging to {:?}", target);
    Ok(Some(guard))
}

fn split_file(path: &Path) -> Result<(PathBuf, std::ffi::OsString)> {
    let name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {:?}", path))?
        .to_os_string();
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    Ok((dir, name))
}
