//! Path management for dirbackup
//!
//! Provides resolution of the configuration directory holding `config.json`.
//!
//! ## Path Resolution Order
//!
//! 1. `DIRBACKUP_CONFIG_DIR` environment variable (if set)
//! 2. The platform configuration directory from `directories`
//!    (`$XDG_CONFIG_HOME/dirbackup` or `~/.config/dirbackup` on Linux,
//!    `~/Library/Application Support/dirbackup` on macOS,
//!    `%APPDATA%\dirbackup\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BackupError;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "DIRBACKUP_CONFIG_DIR";

/// Manages all paths used by dirbackup
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Base directory for dirbackup configuration
    base_dir: PathBuf,
}

impl AppPaths {
    /// Create a new AppPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BackupError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create AppPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the configuration directory exists
    pub fn ensure_directories(&self) -> Result<(), BackupError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            BackupError::Config(format!(
                "Failed to create config directory {}: {}",
                self.base_dir.display(),
                e
            ))
        })
    }

    /// Check if dirbackup has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, BackupError> {
    ProjectDirs::from("", "", "dirbackup")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BackupError::Config("Could not determine home directory".into()))
}
