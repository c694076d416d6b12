//! Configuration module for dirbackup
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - Settings persistence (retention limit)

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{Settings, DEFAULT_RETENTION_LIMIT};
