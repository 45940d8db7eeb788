//! Final placeholder evaluation.
//!
//! By this stage every placeholder is expected to be a bare component name.
//! Resolution is an explicit lookup keyed on the lowercased placeholder
//! text, never dynamic evaluation; anything other than `first`, `middle`,
//! or `last` fails the whole call rather than producing a partial address.

use crate::error::{EmailError, Result};
use crate::name::Name;

/// Resolve final placeholders against name components and assemble the
/// local part plus domain.
///
/// A `middle` placeholder with no middle component present is a hard error.
/// Absent or empty resolved values are skipped from the join; the remaining
/// values are lowercased, joined with the single separator, and the domain
/// is appended exactly as given (no `@` is inserted).
pub fn evaluate(
    placeholders: &[String],
    name: &Name,
    separator: &str,
    domain: &str,
) -> Result<String> {
    if name.middle.is_none()
        && placeholders.iter().any(|p| p.eq_ignore_ascii_case("middle"))
    {
        return Err(EmailError::MissingMiddleName);
    }

    let mut parts: Vec<String> = Vec::with_capacity(placeholders.len());
    for placeholder in placeholders {
        let component = match placeholder.to_ascii_lowercase().as_str() {
            "first" => &name.first,
            "middle" => &name.middle,
            "last" => &name.last,
            _ => return Err(EmailError::UnknownPlaceholder(placeholder.clone())),
        };
        match component {
            Some(value) if !value.is_empty() => parts.push(value.to_ascii_lowercase()),
            _ => {}
        }
    }

    Ok(format!("{}{}", parts.join(separator), domain))
}
