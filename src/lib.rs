//! dirbackup - numbered backup rotation for data directories
//!
//! Before a stateful component clears its data directory, it hands the
//! directory to a [`backup::Rotator`], which keeps the current contents as
//! backup generation 0 and shifts older generations up, discarding the
//! oldest once the retention limit is reached.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `backup`: Rotation, enumeration, pruning and restore of generations
//! - `fs`: Filesystem primitives used by rotation
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `dirbackup` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use dirbackup::backup::Rotator;
//! use dirbackup::config::{AppPaths, Settings};
//!
//! let paths = AppPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! Rotator::new("/var/lib/app/raft")?.rotate(settings.retention_limit)?;
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod fs;

pub use backup::{RotateOutcome, Rotator};
pub use error::{BackupError, BackupResult};
