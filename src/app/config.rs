// SPDX-License-Identifier: MPL-2.0
//! Persisted user preferences, stored as `settings.toml`.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ICED_SHELL_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! Loading is lenient: a missing or unparsable file yields the defaults plus
//! a warning string the caller may surface; the next save rewrites a clean
//! file.

use crate::error::Result;
use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application name used for directory naming.
const APP_NAME: &str = "IcedShell";

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_SHELL_CONFIG_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Theme preference (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,

    /// Whether the sidebar was expanded when the app last closed.
    #[serde(default = "default_sidebar_expanded")]
    pub sidebar_expanded: bool,

    /// View to restore on startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startup_view: Option<String>,
}

fn default_sidebar_expanded() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            sidebar_expanded: true,
            startup_view: None,
        }
    }
}

fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|dir| dir.join(APP_NAME))
}

fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration, degrading to defaults. The second tuple element
/// carries a human-readable warning when an existing file could not be read.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = config_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("failed to load {}: {err}", path.display())),
        ),
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves to the resolved config location, creating the directory if needed.
/// A machine without a resolvable config directory is treated as success.
pub fn save(config: &Config) -> Result<()> {
    let Some(path) = config_path() else {
        return Ok(());
    };
    save_to_path(config, &path)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string(config)
        .map_err(|err| crate::error::Error::Config(err.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}
