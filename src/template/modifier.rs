//! Modifier interpretation for placeholder tokens.
//!
//! A placeholder may carry a trailing modifier word, as in `[first_initial]`
//! or `[last_three]`, asking for a prefix of the component instead of the
//! whole value. This module harvests those words, applies the truncations
//! they imply, and strips the modifier suffixes back out of the template so
//! only bare component names remain for evaluation.

use regex::Regex;

use crate::error::{EmailError, Result};
use crate::name::Name;

/// Component names recognized inside placeholders, in recovery order.
pub const COMPONENT_NAMES: &[&str] = &["first", "last", "middle"];

/// Maximum prefix length for a recognized modifier word.
///
/// Recognition is case-insensitive; unknown words have no entry and leave
/// the component untruncated.
pub fn truncation_len(word: &str) -> Option<usize> {
    match word.to_ascii_lowercase().as_str() {
        "initial" => Some(1),
        "two" => Some(2),
        "three" => Some(3),
        "four" => Some(4),
        "five" => Some(5),
        _ => None,
    }
}

/// Harvest modifier words from placeholder tokens, in source order.
///
/// Each placeholder containing an underscore contributes the text after its
/// last underscore; placeholders without one contribute nothing.
pub fn modifier_words(placeholders: &[String]) -> Vec<String> {
    placeholders
        .iter()
        .filter_map(|p| p.rsplit_once('_').map(|(_, word)| word.to_string()))
        .collect()
}

/// Locate the first placeholder matching a modifier word and rewrite the
/// template with that placeholder replaced by its bare component name.
///
/// Matching is case-insensitive substring containment; the rewrite replaces
/// the placeholder text exactly as it appears, everywhere it appears.
/// Returns `(None, None)` when no placeholder contains the word, and
/// `(Some(placeholder), None)` when one does but none of `options` can be
/// recovered from it.
pub fn resolve_placeholder(
    word: &str,
    placeholders: &[String],
    template: &str,
    options: &[&str],
) -> (Option<String>, Option<String>) {
    let needle = word.to_ascii_lowercase();
    let Some(matched) = placeholders
        .iter()
        .find(|p| p.to_ascii_lowercase().contains(&needle))
    else {
        return (None, None);
    };

    let lowered = matched.to_ascii_lowercase();
    match options
        .iter()
        .find(|name| lowered.contains(&name.to_ascii_lowercase()))
    {
        Some(base) => {
            let rewritten = template.replace(matched.as_str(), base);
            (Some(matched.clone()), Some(rewritten))
        }
        None => (Some(matched.clone()), None),
    }
}

/// Apply every truncation implied by the harvested modifier words.
///
/// For each word, every placeholder containing it has its mentioned
/// component truncated to the table prefix length (by characters). A
/// placeholder mentioning `middle` when no middle name exists is a hard
/// error; truncating an absent component is never attempted.
pub fn apply_truncations(words: &[String], placeholders: &[String], name: &mut Name) -> Result<()> {
    for word in words {
        let needle = word.to_ascii_lowercase();
        for placeholder in placeholders {
            let lowered = placeholder.to_ascii_lowercase();
            if !lowered.contains(&needle) {
                continue;
            }
            let len = truncation_len(word);
            if lowered.contains("first") {
                truncate(&mut name.first, len);
            } else if lowered.contains("last") {
                truncate(&mut name.last, len);
            } else if lowered.contains("middle") {
                if name.middle.is_none() {
                    return Err(EmailError::MissingMiddleName);
                }
                truncate(&mut name.middle, len);
            }
        }
    }
    Ok(())
}

fn truncate(slot: &mut Option<String>, len: Option<usize>) {
    if let (Some(value), Some(len)) = (slot.as_mut(), len) {
        if value.chars().count() > len {
            *value = value.chars().take(len).collect();
        }
    }
}

/// Strip every `_<word>` modifier suffix from the template in one pass.
///
/// The words are matched as literal text, exactly as they were extracted
/// from the template.
pub fn strip_modifiers(template: &str, words: &[String]) -> String {
    let mut distinct: Vec<&str> = Vec::new();
    for word in words {
        if !distinct.contains(&word.as_str()) {
            distinct.push(word);
        }
    }
    if distinct.is_empty() {
        return template.to_string();
    }

    let pattern = distinct
        .iter()
        .map(|word| format!("_{}", regex::escape(word)))
        .collect::<Vec<_>>()
        .join("|");
    let re = Regex::new(&pattern).expect("escaped alternation is a valid regex");
    re.replace_all(template, "").into_owned()
}
