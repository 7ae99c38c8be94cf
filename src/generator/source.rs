//! Specifier source
//!
//! Runs the target program to obtain its option specifiers, or reads them
//! from a file or stdin.

use crate::config::SourceConfig;
use crate::error::{SourceError, SourceResult};
use crate::ui::Ui;
use directories::BaseDirs;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Command as StdCommand, Stdio};

/// Where the specifier text comes from
#[derive(Debug, Clone)]
pub enum SpecifierSource {
    /// Run a program and capture its stdout
    Program {
        program: String,
        args: Vec<String>,
        working_dir: Option<PathBuf>,
    },

    /// Read a file
    File(PathBuf),

    /// Read standard input
    Stdin,
}

impl SpecifierSource {
    /// Build a program source from the tables, resolving the working directory
    ///
    /// Relative working directories are taken relative to `base_dir`.
    pub fn from_config(source: &SourceConfig, base_dir: &Path) -> Self {
        SpecifierSource::Program {
            program: source.program.clone(),
            args: source.args.clone(),
            working_dir: source
                .working_dir
                .as_deref()
                .map(|dir| resolve_dir(dir, base_dir)),
        }
    }

    /// Source for an `--input` argument (`-` means stdin)
    pub fn from_input(input: &str) -> Self {
        if input == "-" {
            SpecifierSource::Stdin
        } else {
            SpecifierSource::File(PathBuf::from(input))
        }
    }

    /// Replace the working directory of a program source
    pub fn with_working_dir(self, dir: PathBuf) -> Self {
        match self {
            SpecifierSource::Program { program, args, .. } => SpecifierSource::Program {
                program,
                args,
                working_dir: Some(dir),
            },
            other => other,
        }
    }

    /// Human-readable origin, used in messages
    pub fn describe(&self) -> String {
        match self {
            SpecifierSource::Program { program, args, .. } => {
                let mut parts = vec![program.clone()];
                parts.extend(args.iter().cloned());
                format!("'{}'", parts.join(" "))
            }
            SpecifierSource::File(path) => format!("'{}'", path.display()),
            SpecifierSource::Stdin => "standard input".to_string(),
        }
    }

    /// Obtain the raw specifier text
    pub fn fetch(&self, ui: &Ui) -> SourceResult<String> {
        match self {
            SpecifierSource::Program {
                program,
                args,
                working_dir,
            } => run_program(program, args, working_dir.as_deref(), ui),
            SpecifierSource::File(path) => {
                fs::read_to_string(path).map_err(|e| SourceError::ReadInput {
                    path: path.clone(),
                    error: e.to_string(),
                })
            }
            SpecifierSource::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|e| SourceError::ReadInput {
                        path: PathBuf::from("-"),
                        error: e.to_string(),
                    })?;
                Ok(text)
            }
        }
    }
}

/// Expand `~` and anchor relative paths at `base_dir`
pub fn resolve_dir(dir: &str, base_dir: &Path) -> PathBuf {
    let home = || BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());

    let expanded = if dir == "~" {
        home().unwrap_or_else(|| PathBuf::from(dir))
    } else if let Some(rest) = dir.strip_prefix("~/") {
        match home() {
            Some(home) => home.join(rest),
            None => PathBuf::from(dir),
        }
    } else {
        PathBuf::from(dir)
    };

    if expanded.is_absolute() {
        expanded
    } else {
        base_dir.join(expanded)
    }
}

/// Run the target program and capture its stdout
fn run_program(
    program: &str,
    args: &[String],
    working_dir: Option<&Path>,
    ui: &Ui,
) -> SourceResult<String> {
    let mut command = StdCommand::new(program);
    command.args(args);

    if let Some(dir) = working_dir {
        if !dir.is_dir() {
            return Err(SourceError::MissingWorkingDir(dir.to_path_buf()));
        }
        command.current_dir(dir);
        ui.debug(&format!("Running {} in {}", program, dir.display()));
    } else {
        ui.debug(&format!("Running {}", program));
    }

    command.stdin(Stdio::null());
    command.stderr(Stdio::inherit());

    let output = command.output().map_err(|e| SourceError::Spawn {
        program: program.to_string(),
        error: e.to_string(),
    })?;

    // A failing status is not fatal as long as specifiers were printed
    if !output.status.success() {
        ui.warn(&format!(
            "'{}' exited with status {:?}",
            program,
            output.status.code()
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
