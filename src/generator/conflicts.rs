//! Conflict grouping
//!
//! Flags are collected into disjoint mutual-exclusion groups. Groups live in an
//! arena and are identified by their index, so a group keeps its position (and
//! therefore its place in the rendered output) for the whole run.

use crate::generator::ArgumentAction;
use std::collections::BTreeMap;

/// Index of a group inside [`ConflictGroups`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(usize);

/// A set of flags of which at most one is meaningful per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictGroup {
    /// Members in insertion order
    pub flags: Vec<String>,

    /// Argument completion of the option that last landed in this group
    pub action: ArgumentAction,

    /// Description attached from the tables
    pub description: Option<String>,
}

impl ConflictGroup {
    fn new() -> Self {
        ConflictGroup {
            flags: Vec::new(),
            action: ArgumentAction::None,
            description: None,
        }
    }

    /// Check if a flag belongs to this group
    pub fn contains(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }

    /// Add a flag unless already present
    fn insert(&mut self, flag: &str) {
        if !self.contains(flag) {
            self.flags.push(flag.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }
}

/// Ordered collection of disjoint conflict groups
#[derive(Debug, Clone, Default)]
pub struct ConflictGroups {
    groups: Vec<ConflictGroup>,
}

impl ConflictGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from hand-maintained conflict sets
    pub fn with_seeds<S: AsRef<str>>(seeds: &[Vec<S>]) -> Self {
        let mut groups = Self::new();
        for seed in seeds {
            groups.add(seed);
        }
        groups
    }

    /// Merge a set of mutually exclusive flags into the groups
    ///
    /// The earliest group sharing a flag with `flags` absorbs them. Later groups
    /// sharing a flag are folded into it and left empty, so every flag stays in
    /// exactly one group. Without a shared flag a new group is appended.
    pub fn add<S: AsRef<str>>(&mut self, flags: &[S]) -> GroupId {
        let matching: Vec<usize> = self
            .groups
            .iter()
            .enumerate()
            .filter(|(_, group)| flags.iter().any(|f| group.contains(f.as_ref())))
            .map(|(index, _)| index)
            .collect();

        let target = match matching.first() {
            Some(&index) => index,
            None => {
                self.groups.push(ConflictGroup::new());
                self.groups.len() - 1
            }
        };

        for flag in flags {
            self.groups[target].insert(flag.as_ref());
        }

        for &index in matching.iter().skip(1) {
            let absorbed = std::mem::replace(&mut self.groups[index], ConflictGroup::new());
            let group = &mut self.groups[target];
            for flag in &absorbed.flags {
                group.insert(flag);
            }
            if group.action == ArgumentAction::None {
                group.action = absorbed.action;
            }
        }

        GroupId(target)
    }

    /// Record the argument completion for a group
    pub fn set_action(&mut self, id: GroupId, action: ArgumentAction) {
        self.groups[id.0].action = action;
    }

    /// Look up a group by id
    pub fn get(&self, id: GroupId) -> &ConflictGroup {
        &self.groups[id.0]
    }

    /// Find the group a flag belongs to
    pub fn group_of(&self, flag: &str) -> Option<GroupId> {
        self.groups
            .iter()
            .position(|group| group.contains(flag))
            .map(GroupId)
    }

    /// Attach descriptions: first member with a table entry wins
    pub fn attach_descriptions(&mut self, table: &BTreeMap<String, String>) {
        for group in &mut self.groups {
            group.description = group
                .flags
                .iter()
                .find_map(|flag| table.get(flag))
                .cloned();
        }
    }

    /// Non-empty groups in creation order
    pub fn iter(&self) -> impl Iterator<Item = &ConflictGroup> {
        self.groups.iter().filter(|group| !group.is_empty())
    }

    /// Number of non-empty groups
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeds() -> Vec<Vec<&'static str>> {
        vec![
            vec!["--quiet", "--really-quiet", "--verbose", "--debug"],
            vec!["--src-only", "--no-src"],
        ]
    }

    #[test]
    fn test_seeds_become_groups() {
        let groups = ConflictGroups::with_seeds(&seeds());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.group_of("--debug"), groups.group_of("--quiet"));
        assert_ne!(groups.group_of("--no-src"), groups.group_of("--quiet"));
    }

    #[test]
    fn test_add_merges_into_existing() {
        let mut groups = ConflictGroups::with_seeds(&seeds());
        let id = groups.add(&["--quiet", "--no-quiet"]);
        assert_eq!(groups.group_of("--no-quiet"), Some(id));
        assert_eq!(
            groups.get(id).flags,
            vec!["--quiet", "--really-quiet", "--verbose", "--debug", "--no-quiet"]
        );
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_add_new_singleton() {
        let mut groups = ConflictGroups::with_seeds(&seeds());
        let id = groups.add(&["--rc-file"]);
        assert_eq!(groups.get(id).flags, vec!["--rc-file"]);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups.iter().last().unwrap().flags, vec!["--rc-file"]);
    }

    #[test]
    fn test_add_is_idempotent_for_known_flags() {
        let mut groups = ConflictGroups::with_seeds(&seeds());
        let first = groups.add(&["--src-only"]);
        let second = groups.add(&["--src-only"]);
        assert_eq!(first, second);
        assert_eq!(groups.get(first).len(), 2);
    }

    #[test]
    fn test_bridging_flags_merge_all_groups() {
        let mut groups = ConflictGroups::with_seeds(&seeds());
        let id = groups.add(&["--verbose", "--src-only"]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups.group_of("--no-src"), Some(id));
        assert_eq!(groups.group_of("--debug"), Some(id));

        let all: Vec<&String> = groups.iter().flat_map(|g| g.flags.iter()).collect();
        assert_eq!(all.len(), 6);
    }

    #[test]
    fn test_absorbed_action_is_kept() {
        let mut groups = ConflictGroups::new();
        let a = groups.add(&["--a"]);
        let b = groups.add(&["--b"]);
        groups.set_action(b, ArgumentAction::Files);
        let merged = groups.add(&["--a", "--b"]);
        assert_eq!(merged, a);
        assert_eq!(groups.get(merged).action, ArgumentAction::Files);
    }

    #[test]
    fn test_attach_descriptions_first_member_wins() {
        let mut groups = ConflictGroups::with_seeds(&seeds());
        groups.add(&["--help"]);

        let mut table = BTreeMap::new();
        table.insert("--verbose".to_string(), "Be loud".to_string());
        table.insert("--quiet".to_string(), "Be quiet".to_string());
        groups.attach_descriptions(&table);

        let quiet = groups.get(groups.group_of("--debug").unwrap());
        assert_eq!(quiet.description.as_deref(), Some("Be quiet"));

        let help = groups.get(groups.group_of("--help").unwrap());
        assert_eq!(help.description, None);
    }
}
