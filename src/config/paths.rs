//! Path management for subtrack
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `SUBTRACK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/subtrack` or `~/.config/subtrack`
//! 3. Windows: `%APPDATA%\subtrack`

use std::path::PathBuf;

use crate::error::SubtrackError;

/// Manages all paths used by subtrack
#[derive(Debug, Clone)]
pub struct SubtrackPaths {
    /// Base directory for all subtrack data
    base_dir: PathBuf,
}

impl SubtrackPaths {
    /// Create a new SubtrackPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SubtrackError> {
        let base_dir = if let Ok(custom) = std::env::var("SUBTRACK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SubtrackPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/subtrack/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/subtrack/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to costs.json
    pub fn costs_file(&self) -> PathBuf {
        self.data_dir().join("costs.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), SubtrackError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SubtrackError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SubtrackError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SubtrackError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| SubtrackError::Config("HOME environment variable not set".into()))
        })?;
    Ok(config_base.join("subtrack"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SubtrackError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SubtrackError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("subtrack"))
}
