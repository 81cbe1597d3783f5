//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ui.notification_timeout_ms must be greater than zero")]
    ZeroTimeout,
    #[error("unknown logging.level `{0}` (expected trace, debug, info, warn or error)")]
    UnknownLogLevel(String),
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.notification_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        self.logging.level()?;
        Ok(())
    }
}

/// UI text and timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// How long a notification stays up before it clears itself.
    #[serde(default = "default_notification_timeout")]
    pub notification_timeout_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            placeholder: default_placeholder(),
            notification_timeout_ms: default_notification_timeout(),
        }
    }
}

/// Items the session starts with. Nothing is ever written back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListConfig {
    #[serde(default)]
    pub items: Vec<String>,
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    pub fn level(&self) -> Result<tracing::Level, ConfigError> {
        self.level
            .parse()
            .map_err(|_| ConfigError::UnknownLogLevel(self.level.clone()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_title() -> String {
    "Todo List".to_string()
}
fn default_placeholder() -> String {
    "Enter new item".to_string()
}
fn default_notification_timeout() -> u64 {
    3000
}
fn default_log_dir() -> String {
    "~/.local/share/tickle/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
