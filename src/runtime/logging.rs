//! File-backed `tracing` setup.
//!
//! The terminal is owned by the TUI, so diagnostics go to a log file.
//! `LULL_LOG` takes precedence over `logging.level`.

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{self, LoggingSettings};

fn log_path(settings: &LoggingSettings) -> Option<PathBuf> {
    settings.file.clone().or_else(config::default_log_path)
}

fn open_log_file(settings: &LoggingSettings) -> Option<File> {
    let path = log_path(settings)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Install the global subscriber. Logging is silently disabled when the log
/// file cannot be opened.
pub fn init(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_env("LULL_LOG")
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(file) = open_log_file(settings) else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}
