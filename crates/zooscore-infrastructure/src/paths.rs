//! Unified path management for zooscore files.
//!
//! All configuration and snapshot data live under a single application
//! directory inside the platform config directory, resolved via the `dirs`
//! crate. This keeps the layout consistent across Linux, macOS, and Windows.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/zooscore/          # Config directory (platform-dependent root)
//! ├── config.toml              # Application configuration
//! └── snapshots/               # Session snapshot files (JsonFileStorage)
//!     └── <key>.json
//! ```

use std::path::PathBuf;

use zooscore_core::error::{Result, ZooscoreError};

/// Unified path management for zooscore.
pub struct ZooscorePaths;

impl ZooscorePaths {
    /// Returns the zooscore configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to the config directory (e.g. `~/.config/zooscore/`)
    /// - `Err(ZooscoreError::Config)`: The platform config directory could not
    ///   be determined
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("zooscore"))
            .ok_or_else(|| ZooscoreError::config("Cannot find config directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the directory session snapshots are stored in.
    pub fn snapshot_dir() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("snapshots"))
    }
}
