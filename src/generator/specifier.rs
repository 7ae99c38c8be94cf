//! Option specifier parsing
//!
//! A specifier is one line such as `quiet|q!` or `rc-file=s`: `|`-separated
//! aliases followed by a suffix giving the argument arity.

use crate::config::CompletionHints;

/// Prefix of synthesized negated flags
pub const NEGATION_PREFIX: &str = "--no-";

/// Number of arguments an option takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    None,
    One,
    Unlimited,
}

/// How the shell should complete an option's argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentAction {
    /// Option takes no argument
    None,
    /// Free-form single argument
    Literal,
    /// Free-form repeated arguments
    LiteralList,
    /// File path
    Files,
    /// Module name(s)
    Modules,
}

/// A decoded specifier line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    /// Aliases as written in the specifier, without dashes
    pub names: Vec<String>,

    /// Dash-prefixed flags, negated twins placed after their positive flag
    pub flags: Vec<String>,

    /// Argument arity
    pub arity: Arity,

    /// Whether `--no-` twins were synthesized
    pub negatable: bool,
}

impl OptionDescriptor {
    /// `[--name, --no-name]` pairs for every long alias of a negatable option
    pub fn negation_pairs(&self) -> Vec<[String; 2]> {
        if !self.negatable {
            return Vec::new();
        }

        self.names
            .iter()
            .filter(|name| name.chars().count() > 1)
            .map(|name| [format!("--{}", name), format!("{}{}", NEGATION_PREFIX, name)])
            .collect()
    }

    /// Pick the argument completion for this option
    pub fn argument_action(&self, hints: &CompletionHints) -> ArgumentAction {
        match self.arity {
            Arity::None => ArgumentAction::None,
            _ if hints.wants_files(&self.flags) => ArgumentAction::Files,
            _ if hints.wants_modules(&self.flags) => ArgumentAction::Modules,
            Arity::One => ArgumentAction::Literal,
            Arity::Unlimited => ArgumentAction::LiteralList,
        }
    }
}

/// Split off the arity suffix; unknown suffixes fall back to a plain switch
fn split_suffix(line: &str) -> (&str, Arity, bool) {
    if let Some(rest) = line.strip_suffix("=s") {
        (rest, Arity::One, false)
    } else if let Some(rest) = line.strip_suffix('!') {
        (rest, Arity::None, true)
    } else if let Some(rest) = line.strip_suffix("=s{,}") {
        (rest, Arity::Unlimited, false)
    } else if let Some(rest) = line.strip_suffix(":10") {
        // Numeric priority with an optional value; completed as mandatory
        (rest, Arity::One, false)
    } else {
        (line, Arity::None, false)
    }
}

/// Check whether a line carries one of the known arity suffixes
pub fn has_known_suffix(line: &str) -> bool {
    let line = line.trim();
    ["=s", "!", "=s{,}", ":10"]
        .iter()
        .any(|suffix| line.ends_with(suffix))
}

/// Decode one specifier line
pub fn parse_specifier(line: &str) -> OptionDescriptor {
    let (body, arity, negatable) = split_suffix(line.trim());

    let names: Vec<String> = body
        .split('|')
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect();

    let mut flags = Vec::with_capacity(names.len() * 2);
    for name in &names {
        if name.chars().count() == 1 {
            flags.push(format!("-{}", name));
        } else {
            flags.push(format!("--{}", name));
            if negatable {
                flags.push(format!("{}{}", NEGATION_PREFIX, name));
            }
        }
    }

    OptionDescriptor {
        names,
        flags,
        arity,
        negatable,
    }
}

/// Split raw specifier text into sorted, non-empty lines
pub fn specifier_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    lines.sort();
    lines
}
