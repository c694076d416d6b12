//! Backup generation naming
//!
//! A generation is a sibling directory of the target named
//! `<target>.old.<index>`. Index 0 is always the newest.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

const GENERATION_INFIX: &str = ".old.";

/// Directory name of generation `index` for a target named `target_name`
pub fn generation_name(target_name: &str, index: usize) -> String {
    format!("{}{}{}", target_name, GENERATION_INFIX, index)
}

/// Parse the generation index out of a directory name
///
/// Returns `None` unless `name` is exactly `<target_name>.old.<digits>`.
pub fn parse_generation_index(target_name: &str, name: &str) -> Option<usize> {
    let digits = name
        .strip_prefix(target_name)?
        .strip_prefix(GENERATION_INFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Reject "01" and friends; they never come out of generation_name.
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    digits.parse().ok()
}

/// A backup generation slot on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub index: usize,
    pub path: PathBuf,
}

impl Generation {
    pub fn new(parent_dir: &Path, target_name: &str, index: usize) -> Self {
        Self {
            index,
            path: parent_dir.join(generation_name(target_name, index)),
        }
    }
}

/// Metadata about an existing generation, for listings
#[derive(Debug, Clone, Serialize)]
pub struct GenerationInfo {
    /// Generation index (0 is newest)
    pub index: usize,
    /// Full path of the generation directory
    pub path: PathBuf,
    /// Last modification time, when the filesystem reports one
    pub modified: Option<DateTime<Utc>>,
    /// Whether the index lies at or beyond the retention limit
    pub beyond_limit: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_name() {
        assert_eq!(generation_name("store", 0), "store.old.0");
        assert_eq!(generation_name("raft", 12), "raft.old.12");
    }

    #[test]
    fn test_parse_generation_index() {
        assert_eq!(parse_generation_index("store", "store.old.0"), Some(0));
        assert_eq!(parse_generation_index("store", "store.old.42"), Some(42));
        assert_eq!(parse_generation_index("store", "store.old."), None);
        assert_eq!(parse_generation_index("store", "store.old.01"), None);
        assert_eq!(parse_generation_index("store", "store.old.1a"), None);
        assert_eq!(parse_generation_index("store", "other.old.1"), None);
        assert_eq!(parse_generation_index("store", "store"), None);
    }

    #[test]
    fn test_parse_handles_dotted_target_names() {
        assert_eq!(parse_generation_index("raft.db", "raft.db.old.3"), Some(3));
        assert_eq!(parse_generation_index("raft", "raft.db.old.3"), None);
    }

    #[test]
    fn test_generation_path() {
        let gen = Generation::new(Path::new("/data"), "store", 2);
        assert_eq!(gen.index, 2);
        assert_eq!(gen.path, PathBuf::from("/data/store.old.2"));
    }
}
