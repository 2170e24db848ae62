use super::settings::ConfigError;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the doer directory: ~/.doer
pub fn get_doer_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".doer"))
}

/// Ensure the doer directory exists
pub fn ensure_doer_dir() -> Result<PathBuf> {
    let dir = get_doer_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Default path to config.json
pub fn config_file() -> Result<PathBuf, ConfigError> {
    Ok(get_doer_dir()?.join("config.json"))
}

/// Path to the log file (creates the directory)
pub fn log_file() -> Result<PathBuf> {
    Ok(ensure_doer_dir()?.join("doer.log"))
}
