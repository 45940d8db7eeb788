//! Top-level email generation.

use crate::error::{EmailError, Result};
use crate::name::Name;
use crate::template::{evaluate, modifier, parse_format};

/// Build an email address from a full name, a format template, and a domain.
///
/// Returns `Ok(None)` when the name cannot be split into usable components
/// or when the format cannot be resolved; those paths emit a diagnostic and
/// leave the caller free to recover. The one propagating failure is
/// [`EmailError::MissingMiddleName`]: a format that demands a middle name
/// the person does not have, whether through a modifier-bearing placeholder
/// or a bare `[middle]`.
///
/// The domain is appended verbatim; include the `@` yourself if you want one.
pub fn generate_email(name: &str, email_format: &str, domain: &str) -> Result<Option<String>> {
    let parsed = parse_format(email_format);
    let words = modifier::modifier_words(&parsed.placeholders);

    let mut split = Name::split(name);
    if !split.has_required_parts() {
        tracing::warn!(name, "name cannot be split into first, middle and last parts");
        return Ok(None);
    }

    modifier::apply_truncations(&words, &parsed.placeholders, &mut split)?;

    let stripped = modifier::strip_modifiers(email_format, &words);
    let final_placeholders = parse_format(&stripped).placeholders;

    // A bare [middle] carries no modifier, so the truncation pass above never
    // sees it; the raw placeholder list has to be checked independently.
    if split.middle.is_none()
        && parsed
            .placeholders
            .iter()
            .any(|p| p.eq_ignore_ascii_case("middle"))
    {
        return Err(EmailError::MissingMiddleName);
    }

    match evaluate::evaluate(&final_placeholders, &split, parsed.join_separator(), domain) {
        Ok(address) => Ok(Some(address)),
        Err(EmailError::MissingMiddleName) => Err(EmailError::MissingMiddleName),
        Err(err) => {
            tracing::warn!(
                error = %err,
                modifier_words = ?words,
                placeholders = ?parsed.placeholders,
                rewritten_template = %stripped,
                "email format could not be resolved"
            );
            Ok(None)
        }
    }
}
