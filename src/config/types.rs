//! Core configuration types
//!
//! This module defines the data structures that represent a zcompgen.yml tables file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level tables configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Commands the generated script completes (the `#compdef` line)
    #[serde(default, deserialize_with = "deserialize_commands")]
    pub commands: Vec<String>,

    /// Link to the option documentation, quoted in the header comment
    #[serde(rename = "docs-url", default, skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,

    /// How to obtain the option specifiers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceConfig>,

    /// zsh function completing module names
    #[serde(rename = "module-completer", default = "default_module_completer")]
    pub module_completer: String,

    /// Flags whose arguments get file or module completion
    #[serde(default)]
    pub completions: CompletionHints,

    /// Known mutually exclusive flag sets
    ///
    /// Listing one flag of an existing set is enough to merge the two.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<Vec<String>>,

    /// One-sentence descriptions keyed by flag name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub descriptions: BTreeMap<String, String>,
}

/// Invocation of the target program
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Program to run
    pub program: String,

    /// Arguments making the program print its specifiers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// Directory to run the program from (`~` is expanded)
    #[serde(rename = "working-dir", default, skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<String>,
}

/// Argument completion hints
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CompletionHints {
    /// Flags taking a file path
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,

    /// Flags taking module names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<String>,
}

impl CompletionHints {
    /// Check if any of the flags takes a file path
    pub fn wants_files<S: AsRef<str>>(&self, flags: &[S]) -> bool {
        flags
            .iter()
            .any(|f| self.files.iter().any(|h| h == f.as_ref()))
    }

    /// Check if any of the flags takes module names
    pub fn wants_modules<S: AsRef<str>>(&self, flags: &[S]) -> bool {
        flags
            .iter()
            .any(|f| self.modules.iter().any(|h| h == f.as_ref()))
    }
}

fn default_module_completer() -> String {
    "_kdesrc-build_modules".to_string()
}

/// Custom deserializer for commands that handles both a single name and a list
fn deserialize_commands<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    let value = Value::deserialize(deserializer)?;

    match value {
        Value::String(s) => Ok(vec![s]),
        Value::Sequence(seq) => seq
            .into_iter()
            .map(|item| String::deserialize(item).map_err(D::Error::custom))
            .collect(),
        Value::Null => Ok(Vec::new()),
        _ => Err(D::Error::custom("commands must be a string or array")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_tables() {
        let yaml = r#"
commands: kdesrc-build
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.commands, vec!["kdesrc-build"]);
        assert_eq!(config.module_completer, "_kdesrc-build_modules");
        assert!(config.source.is_none());
        assert!(config.conflicts.is_empty());
    }

    #[test]
    fn test_deserialize_full_tables() {
        let yaml = r#"
commands: [kdesrc-build, kdesrc-run]
docs-url: https://example.org/options.html
source:
  program: ./kdesrc-build
  args: [--show-options-specifiers]
  working-dir: ~/kde6
module-completer: _my_modules
completions:
  files: [--rc-file]
  modules: [--resume-from]
conflicts:
  - [--quiet, --verbose]
descriptions:
  --quiet: Be quiet
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.commands.len(), 2);
        assert_eq!(config.docs_url.as_deref(), Some("https://example.org/options.html"));
        let source = config.source.unwrap();
        assert_eq!(source.program, "./kdesrc-build");
        assert_eq!(source.working_dir.as_deref(), Some("~/kde6"));
        assert_eq!(config.module_completer, "_my_modules");
        assert_eq!(config.conflicts, vec![vec!["--quiet", "--verbose"]]);
        assert_eq!(config.descriptions.get("--quiet").unwrap(), "Be quiet");
    }

    #[test]
    fn test_completion_hints() {
        let hints = CompletionHints {
            files: vec!["--rc-file".to_string()],
            modules: vec!["--resume-from".to_string()],
        };
        assert!(hints.wants_files(&["--rc-file"]));
        assert!(!hints.wants_files(&["--resume-from"]));
        assert!(hints.wants_modules(&["-r", "--resume-from"]));
    }
}
