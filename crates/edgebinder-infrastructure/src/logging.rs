//! Structured logging with tracing
//!
//! Configures the global subscriber: an `EnvFilter` read from `EDGEBINDER_LOG`
//! (falling back to the configured level), a plain or JSON stdout layer, and an
//! optional daily rolling file.

use std::ffi::OsStr;
use std::path::Path;

use edgebinder_domain::error::{Error, Result};
use tracing::{Level, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub use crate::config::LoggingConfig;
use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_FILTER_ENV};
use crate::error_ext::ErrorContext;

/// Initialize logging with the provided configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = match &config.file_output {
        Some(path) => Some(file_appender(path, config.max_files)?),
        None => None,
    };

    // Layer types differ between plain and JSON output, hence the branches
    let installed = if config.json_format {
        let stdout = fmt::layer().json().with_target(true).with_thread_ids(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(stdout).with(file).try_init()
        } else {
            registry.with(stdout).try_init()
        }
    } else {
        let stdout = fmt::layer().with_target(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(stdout).with(file).try_init()
        } else {
            registry.with(stdout).try_init()
        }
    };
    installed.context("Failed to install tracing subscriber")?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

fn file_appender(path: &Path, max_files: usize) -> Result<RollingFileAppender> {
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let stem = path
        .file_stem()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_STEM))
        .to_string_lossy()
        .into_owned();

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(stem)
        .max_log_files(max_files)
        .build(directory)
        .context(format!("Failed to open log file in {}", directory.display()))
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
