//! Path management for spendview
//!
//! Provides XDG-compliant path resolution for the settings file.
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDVIEW_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/spendview` or `~/.config/spendview`
//! 3. Windows: `%APPDATA%\spendview`

use std::path::PathBuf;

use crate::error::SpendviewError;

/// Manages all paths used by spendview
#[derive(Debug, Clone)]
pub struct SpendviewPaths {
    /// Base directory for all spendview data
    base_dir: PathBuf,
}

impl SpendviewPaths {
    /// Create a new SpendviewPaths instance
    ///
    /// Path resolution:
    /// 1. `SPENDVIEW_CONFIG_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/spendview` or `~/.config/spendview`
    /// 3. Windows: `%APPDATA%\spendview`
    ///
    /// # Errors
    ///
    /// Fails when no home directory can be determined.
    pub fn new() -> Result<Self, SpendviewError> {
        let base_dir = if let Ok(custom) = std::env::var("SPENDVIEW_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SpendviewPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/spendview/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Location of the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SpendviewError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SpendviewError::Io(format!("Failed to create config directory: {}", e)))?;
        Ok(())
    }
}

/// Resolve the default config directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SpendviewError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| {
                    SpendviewError::Config("Could not determine home directory".into())
                })
        })?;
    Ok(config_base.join("spendview"))
}

/// Resolve the default config directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SpendviewError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SpendviewError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("spendview"))
}
