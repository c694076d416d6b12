//! Backup rotation for data directories
//!
//! Preserves a data directory as a numbered backup before its owner resets
//! it, keeping a bounded number of older copies around.
//!
//! # Layout
//!
//! Generations are siblings of the target directory:
//!
//! ```text
//! /data/store          live directory (gone after a rotation)
//! /data/store.old.0    newest backup
//! /data/store.old.1
//! /data/store.old.N-1  oldest backup kept with a retention limit of N
//! ```
//!
//! # Components
//!
//! - `Rotator`: rotation, enumeration and pruning of generations
//! - `Rotator::restore`: moving a generation back into place
//!
//! # Example
//!
//! ```rust,ignore
//! use dirbackup::backup::Rotator;
//!
//! let rotator = Rotator::new("/var/lib/app/raft")?;
//! rotator.rotate(5)?;
//! // safe to recreate /var/lib/app/raft now
//! ```

mod generation;
mod restore;
mod rotator;

pub use generation::{generation_name, parse_generation_index, Generation, GenerationInfo};
pub use restore::RestoreResult;
pub use rotator::{RotateOutcome, Rotator};
