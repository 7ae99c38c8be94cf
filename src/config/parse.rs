//! Tables file parsing and discovery

use crate::config::types::Config;
use crate::error::{CompgenError, ConfigError, ConfigResult};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default tables file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["zcompgen.yml", "zcompgen.yaml"];

/// Tables used when no zcompgen.yml is found
const DEFAULT_TABLES: &str = include_str!("default.yml");

/// Find the tables file by searching current and parent directories
pub fn find_config_file() -> ConfigResult<Option<PathBuf>> {
    let current_dir = env::current_dir().map_err(|e| {
        ConfigError::Invalid(format!("Failed to get current directory: {}", e))
    })?;
    Ok(find_config_file_from(current_dir))
}

/// Find the tables file starting from a specific directory
pub fn find_config_file_from(start_dir: PathBuf) -> Option<PathBuf> {
    let mut current_dir = start_dir;

    loop {
        for file_name in CONFIG_FILE_NAMES {
            let config_path = current_dir.join(file_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Parse a tables file from a path
pub fn parse_config_file(path: &Path) -> Result<Config, CompgenError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    parse_config(&contents)
}

/// Parse tables from a string
pub fn parse_config(yaml: &str) -> Result<Config, CompgenError> {
    let config: Config = serde_yaml::from_str(yaml)?;
    Ok(config)
}

/// The bundled kdesrc-build tables
pub fn default_config() -> Result<Config, CompgenError> {
    parse_config(DEFAULT_TABLES)
}

/// Parse tables with automatic file discovery
///
/// Falls back to the bundled tables when no file is found; the returned path
/// is `None` in that case.
pub fn parse_config_auto() -> Result<(Config, Option<PathBuf>), CompgenError> {
    match find_config_file()? {
        Some(path) => {
            let config = parse_config_file(&path)?;
            Ok((config, Some(path)))
        }
        None => Ok((default_config()?, None)),
    }
}
