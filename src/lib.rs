//! zcompgen - zsh completion generator for option-specifier driven build tools
//!
//! zcompgen asks a build tool (kdesrc-build by default) for its option
//! specifiers, groups mutually exclusive flags and writes a zsh `_arguments`
//! completion script to stdout.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod ui;

// Re-export commonly used types
pub use error::{CompgenError, Result};

/// Current version of zcompgen
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
