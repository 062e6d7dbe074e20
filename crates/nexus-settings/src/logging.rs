//! Logging initialization for the `nexus` binary.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `NEXUS_LOG` environment variable. When unset, the `storage.log_level`
//! config value applies.
//!
//! ```bash
//! NEXUS_LOG=debug nexus search aurora
//! NEXUS_LOG=nexus_settings=trace,warn nexus tui
//! ```
//!
//! CLI commands log to stderr. The TUI owns the terminal, so it logs to
//! `nexus.log` in the data directory instead.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "NEXUS_LOG";

/// File name of the TUI log inside the data directory.
pub const LOG_FILE: &str = "nexus.log";

fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize the tracing subscriber writing to stderr.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_stderr(default_level: &str) {
    fmt()
        .with_env_filter(filter(default_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize the tracing subscriber appending to `path`.
///
/// # Errors
///
/// Returns the I/O error if the log file cannot be opened.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_file(path: &Path, default_level: &str) -> std::io::Result<()> {
    let file = open_log_file(path)?;
    fmt()
        .with_env_filter(filter(default_level))
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        crate::config::xdg::ensure_dir(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
