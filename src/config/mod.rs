// SPDX-License-Identifier: MPL-2.0
//! This module handles toast configuration: the global defaults every toast
//! resolves against, the type → icon table, and loading both from a
//! `toast.toml` file.
//!
//! The configuration is process-wide. It is read at resolution time, so a
//! change only affects toasts constructed afterwards.
//!
//! # Examples
//!
//! ```no_run
//! use corner_toast::config::{self, ToastConfig};
//! use std::path::PathBuf;
//!
//! // Load the user's configuration and make it the process-wide one
//! let loaded = config::load().unwrap_or_default();
//! config::install(loaded);
//!
//! // Tweak a single default
//! let mut defaults = config::defaults();
//! defaults.duration_ms = 5000;
//! config::set_defaults(defaults);
//!
//! // Persist a configuration to a specific path
//! let path = PathBuf::from("./toast.toml");
//! config::save_to_path(&config::current(), &path).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use crate::icons;
use crate::toast::{Position, ToastType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, PoisonError, RwLock};
use tracing::{debug, warn};

const CONFIG_FILE: &str = "toast.toml";
const APP_NAME: &str = "CornerToast";

/// Values unset toast options fall back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub auto_close: bool,
    pub colourful: bool,
    pub duration_ms: u64,
    pub position: Position,
    pub show_close: bool,
    #[serde(rename = "type")]
    pub toast_type: ToastType,
    /// Icon used when the type table has no entry for a toast's type.
    pub icon: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            auto_close: defaults::DEFAULT_AUTO_CLOSE,
            colourful: defaults::DEFAULT_COLOURFUL,
            duration_ms: defaults::DEFAULT_DURATION_MS,
            position: Position::from(defaults::DEFAULT_POSITION),
            show_close: defaults::DEFAULT_SHOW_CLOSE,
            toast_type: ToastType::from(defaults::DEFAULT_TYPE),
            icon: icons::DEFAULT_ICON.to_string(),
        }
    }
}

/// Complete toast configuration: defaults plus the type → icon table.
///
/// A `[types]` table in a config file replaces the built-in presets rather
/// than extending them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub defaults: Defaults,
    pub types: BTreeMap<String, String>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            types: icons::presets(),
        }
    }
}

static CONFIG: LazyLock<RwLock<ToastConfig>> =
    LazyLock::new(|| RwLock::new(ToastConfig::default()));

/// Returns a snapshot of the process-wide configuration.
#[must_use]
pub fn current() -> ToastConfig {
    CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replaces the process-wide configuration, returning the previous one.
pub fn install(config: ToastConfig) -> ToastConfig {
    let mut slot = CONFIG.write().unwrap_or_else(PoisonError::into_inner);
    debug!(position = %config.defaults.position, types = config.types.len(), "installing toast config");
    std::mem::replace(&mut *slot, config)
}

/// Returns the process-wide defaults.
#[must_use]
pub fn defaults() -> Defaults {
    current().defaults
}

/// Replaces the process-wide defaults, leaving the type table untouched.
pub fn set_defaults(defaults: Defaults) {
    CONFIG
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .defaults = defaults;
}

/// Returns the process-wide type → icon table.
#[must_use]
pub fn type_icons() -> BTreeMap<String, String> {
    current().types
}

/// Registers (or replaces) the preset icon for a toast type.
pub fn set_type_icon(toast_type: impl Into<ToastType>, icon: impl Into<String>) {
    let toast_type = toast_type.into();
    CONFIG
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .types
        .insert(toast_type.as_str().to_string(), icon.into());
}

/// Installs `config` until the returned guard is dropped, then restores the
/// configuration that was active before.
#[must_use = "the previous configuration is restored when the guard is dropped"]
pub fn override_config(config: ToastConfig) -> ConfigGuard {
    ConfigGuard {
        previous: Some(install(config)),
    }
}

/// Restores the previously active configuration on drop.
#[derive(Debug)]
pub struct ConfigGuard {
    previous: Option<ToastConfig>,
}

impl Drop for ConfigGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            install(previous);
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

/// Loads the configuration from the platform config directory, falling back
/// to the built-in defaults when no file exists.
pub fn load() -> Result<ToastConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(ToastConfig::default())
}

/// Loads the configuration from `path`. A file that is not valid TOML
/// degrades to the default configuration.
pub fn load_from_path(path: &Path) -> Result<ToastConfig> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "invalid toast config, using defaults");
            Ok(ToastConfig::default())
        }
    }
}

pub fn save_to_path(config: &ToastConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
