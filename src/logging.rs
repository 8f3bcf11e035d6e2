//! Tracing subscriber setup
//!
//! `RUST_LOG` wins over the configured `log_level`. Logs go to the
//! configured `log_file` when there is one, otherwise to stderr. The
//! dashboard owns the terminal, so without a log file it only logs when
//! `RUST_LOG` asks for it explicitly.

use crate::config::DogfinderConfig;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt};

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Off,
}

/// Pick the log destination
#[must_use]
pub fn log_target(config: &DogfinderConfig, dashboard: bool, rust_log_set: bool) -> LogTarget {
    match &config.log_file {
        Some(path) => LogTarget::File(path.clone()),
        None if dashboard && !rust_log_set => LogTarget::Off,
        None => LogTarget::Stderr,
    }
}

/// Build the filter from `RUST_LOG`, falling back to `level`
///
/// An unparsable level falls back to `warn`.
#[must_use]
pub fn build_filter(rust_log: Option<&str>, level: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an I/O error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(config: &DogfinderConfig, dashboard: bool) -> io::Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = build_filter(rust_log.as_deref(), &config.log_level);

    match log_target(config, dashboard, rust_log.is_some()) {
        LogTarget::Off => Ok(()),
        LogTarget::Stderr => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init()
            .map_err(io::Error::other),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(io::Error::other)
        }
    }
}
