//! Merge extracted literals with the existing catalog and format the result.

use std::{collections::BTreeSet, io::Write};

use anyhow::{Context, Result};

use super::catalog::Catalog;

/// One line of the merged catalog listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLine<'a> {
    /// Line taken verbatim from the existing catalog.
    Existing(&'a str),
    /// Placeholder for a literal the catalog does not know yet.
    New(&'a str),
}

impl CatalogLine<'_> {
    pub fn is_new(&self) -> bool {
        matches!(self, CatalogLine::New(_))
    }
}

impl std::fmt::Display for CatalogLine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogLine::Existing(line) => f.write_str(line),
            CatalogLine::New(literal) => write!(f, "\"{}\" = \"{}\";", literal, literal),
        }
    }
}

/// Order literals case-insensitively and resolve each against `catalog`.
///
/// Literals that differ only in case keep their relative byte order.
pub fn merge<'a>(strings: &'a BTreeSet<String>, catalog: &'a Catalog) -> Vec<CatalogLine<'a>> {
    let mut sorted: Vec<&str> = strings.iter().map(String::as_str).collect();
    sorted.sort_by_cached_key(|s| s.to_lowercase());

    sorted
        .into_iter()
        .map(|literal| match catalog.get(literal) {
            Some(line) => CatalogLine::Existing(line),
            None => CatalogLine::New(literal),
        })
        .collect()
}

/// Write each line followed by a newline.
pub fn write_lines<W: Write>(lines: &[CatalogLine<'_>], writer: &mut W) -> Result<()> {
    for line in lines {
        writeln!(writer, "{}", line).context("Failed to write catalog output")?;
    }
    writer.flush().context("Failed to write catalog output")?;
    Ok(())
}
