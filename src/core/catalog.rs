//! Reader for the reference-language `.strings` catalog.
//!
//! Only the simple one-entry-per-line form is understood:
//!
//! ```text
//! "Hello" = "Bonjour";
//! ```
//!
//! A trimmed line is an entry when splitting it on `" = "` yields exactly two
//! parts. The key is the first part minus its opening quote; the stored value is
//! the whole trimmed line. Anything else (comments, multi-line entries, stray
//! text) is skipped without error.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Basename of the catalog inside `<language>.lproj/`.
pub const DEFAULT_TABLE: &str = "C3PRO";

/// Separator between the quoted key and the quoted value.
pub const ENTRY_SEPARATOR: &str = "\" = \"";

/// Build `<root>/<language>.lproj/<table>.strings`.
pub fn catalog_path(root: &Path, language: &str, table: &str) -> PathBuf {
    root.join(format!("{}.lproj", language))
        .join(format!("{}.strings", table))
}

/// A non-blank line that was not recognized as an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the catalog file.
    pub line: usize,
    pub text: String,
}

/// Existing catalog entries keyed by their source literal.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    entries: HashMap<String, String>,
    skipped: Vec<SkippedLine>,
}

impl Catalog {
    /// Read and parse the catalog file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        let mut catalog = Self::default();

        for (index, raw) in universal_lines(content).enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            match split_entry(line) {
                Some(key) => {
                    // Later duplicates win.
                    catalog.entries.insert(key.to_string(), line.to_string());
                }
                None => catalog.skipped.push(SkippedLine {
                    line: index + 1,
                    text: line.to_string(),
                }),
            }
        }

        catalog
    }

    /// The stored line for `key`, verbatim.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Non-blank lines that did not split into exactly two parts.
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }
}

/// Split on `\n`, `\r\n` and lone `\r`, as classic Mac catalogs use.
fn universal_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split('\n').flat_map(|line| {
        let line = line.strip_suffix('\r').unwrap_or(line);
        line.split('\r')
    })
}

/// Return the entry key of a trimmed line, if it is an entry.
fn split_entry(line: &str) -> Option<&str> {
    let mut parts = line.split(ENTRY_SEPARATOR);
    let first = parts.next()?;
    parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let mut chars = first.chars();
    chars.next();
    Some(chars.as_str())
}
