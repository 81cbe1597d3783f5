//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so `tracing` output goes to a daily file
//! named `tickle_<date>.log` in the configured log directory (default:
//! `~/.local/share/tickle/logs/`). Nothing is installed when logging is
//! disabled, and the `tracing` macros become no-ops.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Install the global subscriber. Returns the log file path when logging is
/// enabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let level = config.level()?;
    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let filepath = log_file_path(&log_dir, chrono::Local::now().date_naive());
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&filepath)
        .with_context(|| format!("Failed to open log file {}", filepath.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!(path = %filepath.display(), "logging started");
    Ok(Some(filepath))
}

fn log_file_path(log_dir: &Path, date: chrono::NaiveDate) -> PathBuf {
    log_dir.join(format!("tickle_{}.log", date.format("%Y-%m-%d")))
}

/// Expand a leading `~` to the home directory.
fn expand_home(dir: &str) -> PathBuf {
    if let Some(rest) = dir.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest.trim_start_matches(['/', '\\']));
        }
    }
    PathBuf::from(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_carries_date() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let path = log_file_path(Path::new("/tmp/logs"), date);
        assert_eq!(path, PathBuf::from("/tmp/logs/tickle_2024-03-09.log"));
    }

    #[test]
    fn expands_tilde_only_at_start() {
        assert_eq!(expand_home("/var/log/tickle"), PathBuf::from("/var/log/tickle"));
        assert_eq!(expand_home("logs/~x"), PathBuf::from("logs/~x"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs"), home.join("logs"));
        }
    }

    #[test]
    fn disabled_logging_installs_nothing() {
        let config = LoggingConfig::default();
        assert_eq!(init(&config).unwrap(), None);
    }
}
