//! zsh `_arguments` rendering

use crate::generator::specifier::NEGATION_PREFIX;
use crate::generator::{ArgumentAction, ConflictGroup, ConflictGroups};
use std::collections::BTreeSet;
use std::io::{self, Write};

/// Text around the clauses of the generated script
#[derive(Debug, Clone)]
pub struct Header<'a> {
    /// Commands named on the `#compdef` line
    pub commands: &'a [String],

    /// Documentation link for the header comment
    pub docs_url: Option<&'a str>,

    /// zsh function completing module names
    pub module_completer: &'a str,
}

/// Order the members of a group: sorted positive flags, each followed by
/// its `--no-` twin, then any unpaired negative flags, sorted
pub fn ordered_flags(flags: &[String]) -> Vec<&str> {
    let (mut positive, negative): (Vec<&str>, Vec<&str>) = flags
        .iter()
        .map(String::as_str)
        .partition(|flag| !flag.starts_with(NEGATION_PREFIX));
    positive.sort_unstable();

    let mut pending: BTreeSet<&str> = negative.into_iter().collect();
    let mut ordered = Vec::with_capacity(flags.len());

    for flag in positive {
        ordered.push(flag);
        if let Some(name) = flag.strip_prefix("--") {
            let twin = format!("{}{}", NEGATION_PREFIX, name);
            if let Some(twin) = pending.take(twin.as_str()) {
                ordered.push(twin);
            }
        }
    }

    ordered.extend(pending);
    ordered
}

/// Escape text for a double-quoted `_arguments` description
fn escape_description(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '"' | '$' | '`' => {
                escaped.push('\\');
                escaped.push(c);
            }
            // Bracket escapes must survive the double quotes, hence two backslashes
            '[' | ']' => {
                escaped.push_str("\\\\");
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Completion suffix for an option argument
fn action_suffix(action: ArgumentAction, module_completer: &str) -> String {
    match action {
        ArgumentAction::None => String::new(),
        ArgumentAction::Literal => "\":argument:\"".to_string(),
        ArgumentAction::LiteralList => "\":arguments:\"".to_string(),
        ArgumentAction::Files => "\":::_files\"".to_string(),
        ArgumentAction::Modules => format!("\":::{}\"", module_completer),
    }
}

/// Render one group as an `_arguments` spec, or `None` for an empty group
pub fn render_clause(group: &ConflictGroup, module_completer: &str) -> Option<String> {
    let flags = ordered_flags(&group.flags);

    let head = match flags.as_slice() {
        [] => return None,
        [flag] => format!("\"{}\"", flag),
        _ => format!("\"({})\"{{{}}}", flags.join(" "), flags.join(",")),
    };

    let description = group
        .description
        .as_deref()
        .map(|text| format!("\"[{}]\"", escape_description(text)))
        .unwrap_or_default();

    Some(format!(
        "{}{}{}",
        head,
        description,
        action_suffix(group.action, module_completer)
    ))
}

/// Write the complete completion script
pub fn render(groups: &ConflictGroups, header: &Header, w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "#compdef {}", header.commands.join(" "))?;
    writeln!(w)?;
    writeln!(w, "# Autogenerated by zcompgen. Do not edit it manually.")?;
    if let Some(url) = header.docs_url {
        writeln!(w, "# See {} for description of options", url)?;
    }
    writeln!(w)?;
    writeln!(w, "_arguments \\")?;

    for group in groups.iter() {
        if let Some(clause) = render_clause(group, header.module_completer) {
            writeln!(w, "  {} \\", clause)?;
        }
    }

    writeln!(w, "  \\")?;
    writeln!(w, "  \"*:: :{}\"", header.module_completer)?;
    Ok(())
}
