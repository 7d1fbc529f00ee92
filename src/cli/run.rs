use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::args::Arguments;
use crate::config::load_config;
use crate::core::{
    Catalog, LocalizedPattern, SkippedLine, catalog_path, discover_sources, extract_strings,
    merge, write_lines,
};

/// What a run did, for verbose reporting.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub config_path: Option<PathBuf>,
    pub language: String,
    pub sources: String,
    pub catalog_path: PathBuf,
    pub files_scanned: usize,
    pub string_count: usize,
    pub catalog_entries: usize,
    pub new_count: usize,
    pub skipped_lines: Vec<SkippedLine>,
}

/// Extract, load and merge relative to `root`, writing the listing to `out`.
///
/// Nothing is written unless both extraction and catalog loading succeed.
pub fn run<W: Write>(args: &Arguments, root: &Path, out: &mut W) -> Result<RunSummary> {
    let config_dir = root
        .canonicalize()
        .with_context(|| format!("Failed to resolve project directory: {}", root.display()))?;
    let loaded = load_config(&config_dir)?;
    let config = loaded.config;

    let language = args
        .language
        .clone()
        .unwrap_or_else(|| config.reference_language.clone());
    let pattern = LocalizedPattern::new(&config.marker)?;

    let files = discover_sources(root, &config.sources)?;
    let extracted = extract_strings(&files, &pattern)?;

    let catalog_path = catalog_path(root, &language, &config.table);
    let catalog = Catalog::load(&catalog_path)?;

    let lines = merge(&extracted.strings, &catalog);
    write_lines(&lines, out)?;

    Ok(RunSummary {
        config_path: loaded.path,
        language,
        sources: config.sources,
        catalog_path,
        files_scanned: extracted.files_scanned,
        string_count: extracted.len(),
        catalog_entries: catalog.len(),
        new_count: lines.iter().filter(|line| line.is_new()).count(),
        skipped_lines: catalog.skipped().to_vec(),
    })
}
