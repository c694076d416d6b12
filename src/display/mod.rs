//! Display formatting for terminal output
//!
//! Provides utilities for formatting backup generations for terminal display.

pub mod generation;

pub use generation::{format_age, format_generation_list};
