//! Filesystem capability for dirbackup
//!
//! Rotation only needs a handful of primitives: stat, mkdir, rename and
//! recursive remove. They are collected behind the [`Filesystem`] trait so
//! tests can inject failures at an exact step of the rename chain.

use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Trait for the filesystem primitives used by rotation.
///
/// Every method has the semantics of its `std::fs` namesake. Errors are
/// returned unchanged so callers see the `io::Error` from `std::fs`.
pub trait Filesystem: Send + Sync {
    /// Check if a path exists, following symlinks.
    ///
    /// Only "not found" counts as missing; any other stat failure is
    /// returned as an error.
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Create directory and parents if needed.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Rename a file or directory, replacing an empty destination directory.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Remove a directory and everything below it.
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Last modification time of a path.
    fn modified(&self, path: &Path) -> io::Result<SystemTime>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFilesystem;

impl Filesystem for StdFilesystem {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        match fs::metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir_all(path)
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        fs::metadata(path)?.modified()
    }
}
