//! Backup rotation for a data directory
//!
//! Before a component wipes its data directory, [`Rotator::rotate`] moves the
//! directory aside as generation 0, shifting the older generations up by one
//! and discarding the oldest once the retention limit is reached.
//!
//! Rotation is not transactional. A failing rename or remove aborts the call
//! and leaves the generations partially shifted; nothing is rolled back.
//! Callers must not run two rotations on the same target at once.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use super::generation::{Generation, GenerationInfo};
use crate::config::settings::validate_retention_limit;
use crate::error::{BackupError, BackupResult};
use crate::fs::{Filesystem, StdFilesystem};

/// Result of a rotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotateOutcome {
    /// The target did not exist, so there was nothing to back up
    Skipped,
    /// The target became generation 0
    Rotated {
        /// Number of generations on disk after the rotation
        generations: usize,
        /// The oldest generation, deleted to stay within the limit
        discarded: Option<PathBuf>,
    },
}

/// Rotates one target directory into numbered backup generations
#[derive(Debug, Clone)]
pub struct Rotator<F: Filesystem = StdFilesystem> {
    /// Directory holding the target and all of its generations
    pub(super) parent_dir: PathBuf,
    /// Base name of the target directory
    pub(super) target_name: String,
    pub(super) fs: F,
}

impl Rotator {
    /// Create a rotator for `target` on the real filesystem
    pub fn new(target: impl AsRef<Path>) -> BackupResult<Self> {
        Self::with_filesystem(target, StdFilesystem)
    }
}

impl<F: Filesystem> Rotator<F> {
    /// Create a rotator for `target` using the given filesystem
    ///
    /// The parent directory and base name are derived from `target`. A bare
    /// name like `store` lives in the current directory.
    pub fn with_filesystem(target: impl AsRef<Path>, fs: F) -> BackupResult<Self> {
        let target = target.as_ref();

        let target_name = target
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                BackupError::Validation(format!(
                    "cannot derive a directory name from '{}'",
                    target.display()
                ))
            })?
            .to_string();

        let parent_dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok(Self {
            parent_dir,
            target_name,
            fs,
        })
    }

    /// Directory holding the target and its generations
    pub fn parent_dir(&self) -> &Path {
        &self.parent_dir
    }

    /// Base name of the target directory
    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// Full path of the target directory
    pub fn target_path(&self) -> PathBuf {
        self.parent_dir.join(&self.target_name)
    }

    /// The generation slot at `index`, whether or not it exists
    pub fn generation(&self, index: usize) -> Generation {
        Generation::new(&self.parent_dir, &self.target_name, index)
    }

    /// Stat check used by rotation: only "not found" counts as missing
    ///
    /// Any other stat failure reads as present, so the rename or remove that
    /// follows reports the real error.
    fn present(&self, path: &Path) -> bool {
        self.fs.exists(path).unwrap_or(true)
    }

    /// Existing generations, starting at 0 and stopping at the first gap
    ///
    /// At most `limit` generations are reported.
    pub fn list_generations(&self, limit: usize) -> Vec<Generation> {
        let mut generations = Vec::new();
        for index in 0..limit {
            let generation = self.generation(index);
            if !self.present(&generation.path) {
                break;
            }
            generations.push(generation);
        }
        generations
    }

    /// Existing generations, starting at 0 and stopping at the first gap
    ///
    /// Unlike [`Rotator::list_generations`] this is not capped, so it also
    /// finds generations left behind after the retention limit was lowered.
    /// A stat failure other than "not found" ends the scan with an error.
    pub fn scan_generations(&self) -> BackupResult<Vec<Generation>> {
        let mut generations = Vec::new();
        loop {
            let generation = self.generation(generations.len());
            if !self.fs.exists(&generation.path)? {
                return Ok(generations);
            }
            generations.push(generation);
        }
    }

    /// Existing generations with their metadata, for display
    pub fn describe_generations(&self, limit: usize) -> BackupResult<Vec<GenerationInfo>> {
        let generations = self.scan_generations()?;
        Ok(generations
            .into_iter()
            .map(|generation| GenerationInfo {
                modified: self
                    .fs
                    .modified(&generation.path)
                    .ok()
                    .map(DateTime::<Utc>::from),
                beyond_limit: generation.index >= limit,
                index: generation.index,
                path: generation.path,
            })
            .collect())
    }

    /// Move the target directory into generation 0
    ///
    /// Keeps at most `limit` generations. A missing target is not an error.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a zero limit. Any filesystem failure is
    /// returned as-is; generations may then be left partially shifted.
    pub fn rotate(&self, limit: usize) -> BackupResult<RotateOutcome> {
        validate_retention_limit(limit)?;

        let target = self.target_path();
        if !self.present(&target) {
            debug!(path = %target.display(), "nothing to backup");
            return Ok(RotateOutcome::Skipped);
        }

        self.fs.create_dir_all(&self.parent_dir)?;

        // The last slot of this list is always free once this block is done:
        // either its contents were discarded or it was never created.
        let mut generations = self.list_generations(limit);
        let discarded = if generations.len() >= limit {
            let oldest = generations[generations.len() - 1].path.clone();
            self.fs.remove_dir_all(&oldest)?;
            Some(oldest)
        } else {
            generations.push(self.generation(generations.len()));
            None
        };

        // Highest index first, so no rename lands on a generation that has
        // not moved yet.
        for index in (1..generations.len()).rev() {
            self.fs
                .rename(&generations[index - 1].path, &generations[index].path)?;
        }

        self.fs.rename(&target, &generations[0].path)?;

        Ok(RotateOutcome::Rotated {
            generations: generations.len(),
            discarded,
        })
    }

    /// Delete generations at or beyond `limit`
    ///
    /// Removal starts from the highest index so an interrupted prune still
    /// leaves a contiguous run of generations. Returns the removed paths.
    pub fn prune(&self, limit: usize) -> BackupResult<Vec<PathBuf>> {
        validate_retention_limit(limit)?;

        let mut removed = Vec::new();
        for generation in self.scan_generations()?.into_iter().skip(limit).rev() {
            self.fs.remove_dir_all(&generation.path)?;
            debug!(path = %generation.path.display(), "pruned generation");
            removed.push(generation.path);
        }
        Ok(removed)
    }
}
