//! Configuration service implementation.
//!
//! This module provides a `ConfigService` that loads the application
//! configuration from the configuration file (`~/.config/zooscore/config.toml`).

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::RwLock;

use zooscore_core::error::{Result, ZooscoreError};

use crate::paths::ZooscorePaths;

/// Application configuration.
///
/// Currently this only carries the snapshot key prefix; the fixed `"store"`
/// suffix is appended to it to form the durable storage key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Prefix prepended to the snapshot key suffix.
    pub snapshot_key_prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            snapshot_key_prefix: "zooscore.".to_string(),
        }
    }
}

/// Configuration service that loads and caches the application configuration.
///
/// The configuration is read lazily on first access and cached afterwards. A
/// missing or empty config file yields the defaults; a present but
/// unparseable file is a configuration error.
#[derive(Debug, Default)]
pub struct ConfigService {
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: RwLock<Option<StoreConfig>>,
}

impl ConfigService {
    /// Creates a new `ConfigService`. The file is not touched until the
    /// first call to [`get_config`](Self::get_config).
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the configuration, loading it from file if not cached. Load
    /// failures are logged and replaced with defaults so a broken config
    /// file never prevents startup.
    pub fn get_config(&self) -> StoreConfig {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = Self::load_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            StoreConfig::default()
        });

        {
            let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    /// Loads the configuration from the default config file path.
    fn load_config() -> Result<StoreConfig> {
        let config_path = ZooscorePaths::config_file()?;
        Self::load_config_from(&config_path)
    }

    /// Loads the configuration from an explicit path.
    ///
    /// # Returns
    ///
    /// - `Ok(StoreConfig)`: Parsed configuration; defaults if the file does
    ///   not exist or is empty.
    /// - `Err(ZooscoreError)`: The file exists but cannot be read or parsed.
    fn load_config_from(config_path: &Path) -> Result<StoreConfig> {
        if !config_path.exists() {
            return Ok(StoreConfig::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            ZooscoreError::io(format!("Failed to read config file {:?}: {}", config_path, e))
        })?;

        if content.trim().is_empty() {
            return Ok(StoreConfig::default());
        }

        Ok(toml::from_str(&content)?)
    }
}
