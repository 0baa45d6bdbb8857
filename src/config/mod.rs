// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.toast.default_duration_secs = 5.0;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.toast.default_duration_secs, 5.0);
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;
mod duration;

pub use defaults::*;
pub use duration::ToastDuration;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToast";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub toast: ToastConfig,
}

/// The `[toast]` section of `settings.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Delay before a toast auto-hides when the caller passes no duration.
    pub default_duration_secs: f32,
    /// Length of the fade-in played on the hidden-to-visible edge.
    pub fade_millis: u64,
    /// Distance between the toast and the bottom of the host view.
    pub bottom_offset: f32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_duration_secs: DEFAULT_TOAST_DURATION_SECS,
            fade_millis: DEFAULT_FADE_MILLIS,
            bottom_offset: DEFAULT_BOTTOM_OFFSET,
        }
    }
}

impl ToastConfig {
    /// Returns the configured default duration, clamped to
    /// [`MIN_TOAST_DURATION_SECS`]..=[`MAX_TOAST_DURATION_SECS`].
    ///
    /// Durations passed to individual `show` calls are not clamped.
    #[must_use]
    pub fn default_duration(&self) -> ToastDuration {
        if self.default_duration_secs.is_finite() {
            ToastDuration::from_secs(
                self.default_duration_secs
                    .clamp(MIN_TOAST_DURATION_SECS, MAX_TOAST_DURATION_SECS),
            )
        } else {
            ToastDuration::default()
        }
    }

    /// Returns the fade-in length, capped at [`MAX_FADE_MILLIS`].
    #[must_use]
    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_millis.min(MAX_FADE_MILLIS))
    }

    /// Returns the bottom offset, never negative.
    #[must_use]
    pub fn bottom_offset(&self) -> f32 {
        if self.bottom_offset.is_finite() {
            self.bottom_offset.max(0.0)
        } else {
            DEFAULT_BOTTOM_OFFSET
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a config file. Malformed TOML falls back to defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
