//! Error types for zcompgen

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for zcompgen operations
pub type Result<T> = std::result::Result<T, CompgenError>;

/// Main error type for zcompgen
#[derive(Error, Debug)]
pub enum CompgenError {
    /// Tables configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors obtaining the option specifiers
    #[error("Specifier source error: {0}")]
    Source(#[from] SourceError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Tables file parsing and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to read tables file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    #[error("At least one completable command must be listed under 'commands'")]
    NoCommands,

    #[error("Conflict set #{0} is empty")]
    EmptyConflictSet(usize),

    #[error("'{flag}' in {table} is not a dash-prefixed flag name")]
    InvalidFlag { table: String, flag: String },

    #[error("No specifier source configured (add a 'source' section or pass --input)")]
    NoSource,
}

/// Errors raised while obtaining specifier text
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to run '{program}': {error}")]
    Spawn { program: String, error: String },

    #[error("Failed to read specifiers from '{path}': {error}")]
    ReadInput { path: PathBuf, error: String },

    #[error("Working directory '{0}' does not exist")]
    MissingWorkingDir(PathBuf),

    #[error("No option specifiers were obtained from {0}")]
    Empty(String),
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for specifier source operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;
