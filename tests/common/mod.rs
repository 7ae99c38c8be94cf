//! Common test utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A representative slice of `kdesrc-build --show-options-specifiers`
pub const KDESRC_SPECIFIERS: &str = "\
help|h
version|v
pretend|dry-run|p
list-build
dependency-tree
dependency-tree-fullpath
src-only|svn-only|s
src!
refresh-build|r
rc-file=s
resume-from|from|f=s
resume-after|after|a=s
stop-before|until=s
stop-after|to=s
include-dependencies|d
D
ignore-modules=s{,}
quiet|q!
really-quiet
verbose
debug
show-info
show-options-specifiers
color!
metadata-only
metadata!
build-only
build!
install-only
install!
nice|niceness:10
set-module-option-value=s
stop-on-failure!
resume
";

/// Create a temporary directory containing a file
pub fn create_temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

/// Flags named by the head of each `_arguments` clause, one entry per clause
pub fn clause_flags(script: &str) -> Vec<Vec<String>> {
    script
        .lines()
        .filter_map(|line| line.trim().strip_prefix('"'))
        .filter(|line| !line.starts_with('*'))
        .map(|line| {
            let head = match line.strip_prefix('(') {
                Some(rest) => rest.split(')').next().unwrap_or_default(),
                None => line.split('"').next().unwrap_or_default(),
            };
            head.split_whitespace().map(str::to_string).collect()
        })
        .collect()
}
