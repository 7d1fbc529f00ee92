//! Core extraction pipeline.
//!
//! Runs in three straight-line steps:
//!
//! 1. **Extract**: find source files and collect every distinct marked literal
//! 2. **Load**: parse the reference-language catalog into a key lookup
//! 3. **Merge**: sort the literals and pair each with its catalog line or a placeholder
//!
//! ## Module Structure
//!
//! - `matcher`: Recognizes `"<literal>".c3_localized` in source text
//! - `extract`: Source discovery and per-file extraction
//! - `catalog`: `.strings` catalog reader
//! - `merge`: Merging and output formatting

pub mod catalog;
pub mod extract;
pub mod matcher;
pub mod merge;

pub use catalog::{Catalog, SkippedLine, catalog_path};
pub use extract::{ExtractedStrings, discover_sources, extract_file_into, extract_strings};
pub use matcher::LocalizedPattern;
pub use merge::{CatalogLine, merge, write_lines};
