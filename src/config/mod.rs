pub mod model;

use anyhow::{Context, Result};
use std::path::PathBuf;

pub use model::{AppConfig, LoggingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tickle")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config = parse_config(&contents)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig =
        toml::from_str(contents).with_context(|| "Failed to parse config file")?;
    config.validate()?;
    Ok(config)
}
