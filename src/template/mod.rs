//! Format template parsing.
//!
//! A format template is a string like `[first_initial]_[last]`: placeholder
//! tokens in square brackets, literal separator text between them. This
//! module extracts both; modifier interpretation lives in [`modifier`] and
//! final resolution in [`evaluate`].

pub mod evaluate;
pub mod modifier;

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the text strictly between a `[` and the next `]`.
static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(.*?)\]").expect("placeholder pattern is valid"));

/// Matches the text strictly between a `]` and the next `[`.
static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\](.*?)\[").expect("separator pattern is valid"));

/// Parsed form of a template: placeholder tokens in source order, plus the
/// literal text captured between consecutive placeholders.
///
/// Text before the first `[` or after the last `]` is never captured;
/// bracket pairs do not nest, and malformed brackets yield whatever the
/// greedy non-nesting match produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFormat {
    pub placeholders: Vec<String>,
    pub separators: Vec<String>,
}

impl ParsedFormat {
    /// The single separator used when joining resolved components.
    ///
    /// Only the first captured separator is ever consumed, even when the
    /// template mixed different separators between different placeholders.
    pub fn join_separator(&self) -> &str {
        self.separators.first().map(String::as_str).unwrap_or("")
    }
}

/// Extract the placeholder and separator sequences from a format template.
pub fn parse_format(template: &str) -> ParsedFormat {
    let placeholders = PLACEHOLDER_RE
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect();
    let separators = SEPARATOR_RE
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect();

    ParsedFormat {
        placeholders,
        separators,
    }
}
