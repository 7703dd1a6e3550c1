//! File-backed tracing setup. The terminal belongs to the TUI, so log
//! output never goes to stdout or stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::model::config::LogConfig;

/// Environment variable that overrides `log.level`
pub const LOG_ENV: &str = "MEMO_LOG";

/// Where the log goes: `log.file`, else `memo.log` beside the data file
pub fn log_path(config: &LogConfig, data_file: &Path) -> PathBuf {
    config.file.clone().unwrap_or_else(|| {
        data_file
            .parent()
            .filter(|d| !d.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .join("memo.log")
    })
}

/// Build the filter: MEMO_LOG wins, then the configured level, then `info`
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Failure to open the log file is reported
/// to the caller, which is free to carry on without logging.
pub fn init(config: &LogConfig, data_file: &Path) -> std::io::Result<PathBuf> {
    let path = log_path(config, data_file);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    Ok(path)
}
