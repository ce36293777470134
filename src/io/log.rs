use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::model::LogConfig;

use super::config_io::default_log_path;

/// Env var holding an `EnvFilter` directive; wins over `[log] level`
pub const LOG_ENV: &str = "TALLY_LOG";

/// Install the global subscriber. Output goes to the log file only; if it
/// cannot be opened, events are filtered and dropped so the terminal stays
/// clean. Returns the path that is being written, if any.
pub fn init_tracing(config: &LogConfig) -> Option<PathBuf> {
    let env_filter = build_filter(std::env::var(LOG_ENV).ok().as_deref(), &config.level);

    let target = config.file.clone().or_else(|| default_log_path().ok());
    let opened = target.and_then(|path| open_log_file(&path).ok().map(|file| (path, file)));

    match opened {
        Some((path, file)) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
            tracing::info!(path = %path.display(), "logging initialized");
            Some(path)
        }
        None => {
            tracing_subscriber::registry().with(env_filter).init();
            None
        }
    }
}

/// Filter from the env directive if valid, else the configured level, else `info`
fn build_filter(env_directive: Option<&str>, level: &str) -> EnvFilter {
    env_directive
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Open `path` for appending, creating parent directories
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
