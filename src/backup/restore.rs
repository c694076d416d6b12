//! Restoring a backup generation
//!
//! Moves a generation back into the target path and renumbers the older
//! generations so they stay contiguous from 0.

use std::path::PathBuf;

use tracing::debug;

use super::generation::generation_name;
use super::rotator::Rotator;
use crate::error::{BackupError, BackupResult};
use crate::fs::Filesystem;

/// Result of a restore operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreResult {
    /// Generation directory the data came from
    pub restored_from: PathBuf,
    /// Target directory the data now lives in
    pub target: PathBuf,
    /// Number of older generations renumbered to close the gap
    pub shifted: usize,
}

impl RestoreResult {
    /// Get a summary of what was restored
    pub fn summary(&self) -> String {
        format!(
            "Restored {} to {} ({} older generation(s) renumbered)",
            self.restored_from.display(),
            self.target.display(),
            self.shifted
        )
    }
}

impl<F: Filesystem> Rotator<F> {
    /// Move generation `index` back to the target path
    ///
    /// The target must not exist; rotate it first to keep its contents.
    /// Stat failures other than "not found" are returned as errors.
    /// Like rotation this is not transactional: a failed rename stops the
    /// renumbering where it is.
    pub fn restore(&self, index: usize) -> BackupResult<RestoreResult> {
        let target = self.target_path();
        if self.fs.exists(&target)? {
            return Err(BackupError::TargetExists(target));
        }

        let generations = self.scan_generations()?;
        let chosen = generations.get(index).ok_or_else(|| {
            BackupError::generation_not_found(generation_name(&self.target_name, index))
        })?;

        self.fs.rename(&chosen.path, &target)?;
        debug!(from = %chosen.path.display(), "restored generation");

        // Lowest index first: each rename fills the slot freed by the previous one.
        let older = &generations[index..];
        for pair in older.windows(2) {
            self.fs.rename(&pair[1].path, &pair[0].path)?;
        }

        Ok(RestoreResult {
            restored_from: chosen.path.clone(),
            target,
            shifted: older.len() - 1,
        })
    }
}
