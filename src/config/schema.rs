//! Tables validation
//!
//! This module provides validation logic for tables files.

use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult};
use regex::Regex;

/// Accepted flag shapes: `-x` or `--long-name`
const FLAG_PATTERN: &str = r"^(-[^-\s]|--[^\s\[\]()\{\},:]+)$";

/// Validate a complete tables configuration
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    if config.commands.iter().all(|c| c.trim().is_empty()) {
        return Err(ConfigError::NoCommands);
    }

    if config.module_completer.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "module-completer must not be empty".to_string(),
        ));
    }

    if let Some(source) = &config.source {
        if source.program.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "source.program must not be empty".to_string(),
            ));
        }
    }

    let flag_re = Regex::new(FLAG_PATTERN)
        .map_err(|e| ConfigError::Invalid(format!("Bad flag pattern: {}", e)))?;

    for (index, set) in config.conflicts.iter().enumerate() {
        if set.is_empty() {
            return Err(ConfigError::EmptyConflictSet(index));
        }
        validate_flags(&flag_re, "conflicts", set)?;
    }

    validate_flags(&flag_re, "descriptions", config.descriptions.keys())?;
    validate_flags(&flag_re, "completions.files", &config.completions.files)?;
    validate_flags(&flag_re, "completions.modules", &config.completions.modules)?;

    Ok(())
}

/// Check that every name in a table looks like a flag
fn validate_flags<I, S>(flag_re: &Regex, table: &str, flags: I) -> ConfigResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for flag in flags {
        let flag = flag.as_ref();
        if !flag_re.is_match(flag) {
            return Err(ConfigError::InvalidFlag {
                table: table.to_string(),
                flag: flag.to_string(),
            });
        }
    }
    Ok(())
}
