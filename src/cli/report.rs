//! Verbose run diagnostics.
//!
//! Everything here goes to stderr so stdout stays a clean catalog listing.

use std::io::{self, Write};

use colored::Colorize;

use super::run::RunSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(summary: &RunSummary) {
    print_to(summary, &mut io::stderr().lock());
}

/// Print the summary to a custom writer.
pub fn print_to<W: Write>(summary: &RunSummary, writer: &mut W) {
    if let Some(path) = &summary.config_path {
        let _ = writeln!(writer, "{} {}", "Using config".dimmed(), path.display());
    }

    if summary.files_scanned == 0 {
        let _ = writeln!(
            writer,
            "{} no source files matched \"{}\"",
            "warning:".bold().yellow(),
            summary.sources
        );
    }

    let catalog = summary.catalog_path.display();
    for skipped in &summary.skipped_lines {
        let _ = writeln!(
            writer,
            "{} skipped line that is not a catalog entry",
            "warning:".bold().yellow()
        );
        let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), catalog, skipped.line);
        let _ = writeln!(writer, "   {} {}", "|".blue(), skipped.text);
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {} source {}, found {} {} ({} new), {} has {} {}",
            summary.files_scanned,
            plural(summary.files_scanned, "file", "files"),
            summary.string_count,
            plural(summary.string_count, "string", "strings"),
            summary.new_count,
            catalog,
            summary.catalog_entries,
            plural(summary.catalog_entries, "entry", "entries"),
        )
        .green()
    );
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
