//! User settings for dirbackup
//!
//! Holds the backup retention limit. The file is read on every CLI
//! invocation, so a changed limit takes effect on the next rotation.

use serde::{Deserialize, Serialize};

use super::paths::AppPaths;
use crate::error::BackupError;

/// Number of backup generations kept when nothing else is configured
pub const DEFAULT_RETENTION_LIMIT: usize = 5;

/// User settings for dirbackup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Maximum number of backup generations kept per target
    #[serde(default = "default_retention_limit")]
    pub retention_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_retention_limit() -> usize {
    DEFAULT_RETENTION_LIMIT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            retention_limit: default_retention_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &AppPaths) -> Result<Self, BackupError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
            BackupError::Config(format!("Failed to read settings file: {}", e))
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            BackupError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AppPaths) -> Result<(), BackupError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BackupError::Json(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            BackupError::Config(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Reject settings that rotation cannot honor
    pub fn validate(&self) -> Result<(), BackupError> {
        validate_retention_limit(self.retention_limit)
    }
}

/// A retention limit must keep at least one generation
pub fn validate_retention_limit(limit: usize) -> Result<(), BackupError> {
    if limit == 0 {
        return Err(BackupError::Validation(
            "retention limit must be at least 1".into(),
        ));
    }
    Ok(())
}
