//! c3-strings - localizable string extractor for C3PRO
//!
//! Scans Swift sources for string literals marked with `.c3_localized`,
//! merges them with the reference-language `.strings` catalog and prints the
//! updated catalog listing. Known translations are kept verbatim; new strings
//! get a placeholder entry equal to themselves.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, catalog reading and merging

pub mod cli;
pub mod config;
pub mod core;
