//! Splitting a full name into its components.

/// The components of a split name fed into template resolution.
///
/// Built fresh per generation call and only mutated by the truncation
/// pass; a slot is `None` when the name did not supply that component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    pub first: Option<String>,
    pub middle: Option<String>,
    pub last: Option<String>,
}

impl Name {
    /// Split a full name on whitespace into (first, middle, last).
    ///
    /// Exactly two tokens fill first and last; exactly three fill all three
    /// slots. Any other token count (0, 1, or 4+) leaves every slot empty,
    /// and the caller decides how to report that.
    pub fn split(full: &str) -> Self {
        let tokens: Vec<&str> = full.split_whitespace().collect();
        match tokens.as_slice() {
            [first, last] => Name {
                first: Some((*first).to_string()),
                middle: None,
                last: Some((*last).to_string()),
            },
            [first, middle, last] => Name {
                first: Some((*first).to_string()),
                middle: Some((*middle).to_string()),
                last: Some((*last).to_string()),
            },
            _ => Name {
                first: None,
                middle: None,
                last: None,
            },
        }
    }

    /// True when the split produced the minimum usable pair (first + last).
    pub fn has_required_parts(&self) -> bool {
        self.first.is_some() && self.last.is_some()
    }
}
