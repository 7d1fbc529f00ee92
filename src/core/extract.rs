//! Source discovery and literal extraction.
//!
//! Source files are found by expanding a glob pattern relative to a project
//! root, then each file is read whole and run through a [`LocalizedPattern`].
//! Files are processed one at a time, in the order the glob yields them.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern, glob_with};

use super::matcher::LocalizedPattern;

/// Glob used to find Swift implementation files.
pub const DEFAULT_SOURCES: &str = "Sources/*/*.swift";

/// Distinct literals collected from a set of source files.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractedStrings {
    pub strings: BTreeSet<String>,
    pub files_scanned: usize,
}

impl ExtractedStrings {
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

/// Expand `pattern` relative to `root` into the list of source files.
///
/// Wildcards do not match names with a leading dot. Every match is returned,
/// so a directory named like a source file fails later when it is read. A root
/// without matches is not an error.
pub fn discover_sources(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let escaped_root = Pattern::escape(&root.to_string_lossy());
    let full_pattern = Path::new(&escaped_root).join(pattern);
    let full_pattern = full_pattern.to_string_lossy();

    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut files = Vec::new();
    for entry in glob_with(&full_pattern, options)
        .with_context(|| format!("Invalid source glob pattern: \"{}\"", pattern))?
    {
        files.push(entry.context("Failed to read source directory")?);
    }
    Ok(files)
}

/// Read one file and add every marked literal in it to `into`.
pub fn extract_file_into(
    path: &Path,
    pattern: &LocalizedPattern,
    into: &mut BTreeSet<String>,
) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;

    for literal in pattern.matches(&text) {
        if !into.contains(literal) {
            into.insert(literal.to_string());
        }
    }
    Ok(())
}

/// Extract from every file, stopping at the first unreadable one.
pub fn extract_strings(files: &[PathBuf], pattern: &LocalizedPattern) -> Result<ExtractedStrings> {
    let mut strings = BTreeSet::new();
    for path in files {
        extract_file_into(path, pattern, &mut strings)?;
    }
    Ok(ExtractedStrings {
        strings,
        files_scanned: files.len(),
    })
}
