use crate::domain::ThemeMode;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default event-poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;
const MIN_TICK_MS: u64 = 16;
const MAX_TICK_MS: u64 = 2000;

/// Errors raised while locating or reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine home directory")]
    NoHomeDir,
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Which theme to start in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Follow the terminal's reported colour scheme
    #[default]
    System,
    Light,
    Dark,
}

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemePreference,
    pub tick_rate_ms: u64,
    pub show_hints: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::System,
            tick_rate_ms: DEFAULT_TICK_MS,
            show_hints: true,
        }
    }
}

impl Settings {
    /// Poll interval, clamped to a sane range
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.clamp(MIN_TICK_MS, MAX_TICK_MS))
    }
}

/// Load settings from a JSON file. A missing file yields the defaults.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Pick the starting theme: CLI flag, then config file, then the platform signal.
///
/// `platform` is `None` when the terminal gave no usable hint; that falls back to light.
pub fn resolve_theme(
    cli: Option<ThemePreference>,
    settings: &Settings,
    platform: Option<ThemeMode>,
) -> ThemeMode {
    let preference = match cli {
        Some(pref) => pref,
        None => settings.theme,
    };

    match preference {
        ThemePreference::Light => ThemeMode::Light,
        ThemePreference::Dark => ThemeMode::Dark,
        ThemePreference::System => platform.unwrap_or_default(),
    }
}
