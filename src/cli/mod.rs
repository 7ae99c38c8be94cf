//! CLI interface and argument parsing
//!
//! This module handles command-line interface parsing and dispatches to the
//! generator.

pub mod app;

// Re-export main types
pub use app::*;
