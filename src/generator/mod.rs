//! Completion script generation
//!
//! This module turns option specifiers into a zsh completion script: parse the
//! specifier lines, merge the flags into conflict groups, attach descriptions
//! and render the groups.

pub mod conflicts;
pub mod render;
pub mod source;
pub mod specifier;

// Re-export main types
pub use conflicts::*;
pub use render::*;
pub use source::*;
pub use specifier::*;

use crate::config::Config;
use crate::error::{Result, SourceError};
use crate::ui::Ui;

/// Build the conflict groups for a set of specifier lines
pub fn build_groups<S: AsRef<str>>(lines: &[S], config: &Config, ui: &Ui) -> ConflictGroups {
    let mut groups = ConflictGroups::with_seeds(&config.conflicts);

    for line in lines {
        let line = line.as_ref();
        if !has_known_suffix(line) {
            ui.debug(&format!("'{}' has no argument suffix, treating it as a switch", line));
        }

        let descriptor = parse_specifier(line);
        if descriptor.flags.is_empty() {
            continue;
        }

        for pair in descriptor.negation_pairs() {
            groups.add(&pair);
        }

        let id = groups.add(&descriptor.flags);
        groups.set_action(id, descriptor.argument_action(&config.completions));
    }

    groups.attach_descriptions(&config.descriptions);
    groups
}

/// Generate the completion script for raw specifier text
///
/// The script is assembled in memory; nothing is produced when `text` holds no
/// specifiers. `origin` names the source in the error message.
pub fn generate(text: &str, origin: &str, config: &Config, ui: &Ui) -> Result<String> {
    let lines = specifier_lines(text);
    if lines.is_empty() {
        return Err(SourceError::Empty(origin.to_string()).into());
    }
    ui.debug(&format!("Parsing {} specifiers from {}", lines.len(), origin));

    let groups = build_groups(&lines, config, ui);
    ui.debug(&format!("Formed {} conflict groups", groups.len()));

    let header = Header {
        commands: &config.commands,
        docs_url: config.docs_url.as_deref(),
        module_completer: &config.module_completer,
    };

    let mut out = Vec::new();
    render(&groups, &header, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
