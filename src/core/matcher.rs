//! Recognizes localizable string literals in source text.
//!
//! A localizable literal is a double-quoted run of one or more non-quote
//! characters immediately followed by `.` and the marker member, e.g.
//! `"Start Consent".c3_localized`.
//!
//! ## Known limitations
//!
//! - Escaped quotes are not understood. `"Say \"hi\"".c3_localized` does not
//!   yield `Say \"hi\"`; the quote after the backslash ends the literal.
//! - Matching is purely textual. Marked literals inside comments are extracted
//!   like any other.
//!
//! The dot before the marker must be a literal `.`. The Python extraction
//! script this tool replaces accepted any character there, so it also picked
//! up `"Hi"?c3_localized`; this matcher does not.

use anyhow::{Context, Result, bail};
use regex::Regex;

/// Marker member used by C3PRO sources.
pub const DEFAULT_MARKER: &str = "c3_localized";

/// Compiled matcher for `"<literal>".<marker>`.
#[derive(Debug, Clone)]
pub struct LocalizedPattern {
    regex: Regex,
}

impl LocalizedPattern {
    /// Build a matcher for the given marker member name.
    ///
    /// The marker is matched literally; regex metacharacters in it carry no meaning.
    pub fn new(marker: &str) -> Result<Self> {
        if marker.is_empty() {
            bail!("Localization marker must not be empty");
        }
        let source = format!(r#""([^"]+?)"\.{}"#, regex::escape(marker));
        let regex = Regex::new(&source)
            .with_context(|| format!("Failed to compile pattern for marker \"{}\"", marker))?;
        Ok(Self { regex })
    }

    /// Lazily yield the inner text of every marked literal, left to right.
    pub fn matches<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}
