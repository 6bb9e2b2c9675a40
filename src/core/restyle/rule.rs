use serde::Serialize;

use crate::error::{Error, Result};

/// An exact old → new text substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplacementRule {
    old: String,
    new: String,
}

impl ReplacementRule {
    /// Build a rule, rejecting empty text on either side.
    pub fn new(old: &str, new: &str) -> Result<Self> {
        if old.is_empty() {
            return Err(Error::validation_invalid_argument(
                "old",
                "Text to replace must not be empty",
            ));
        }
        if new.is_empty() {
            return Err(Error::validation_invalid_argument(
                "new",
                "Replacement text must not be empty",
            ));
        }
        Ok(Self {
            old: old.to_string(),
            new: new.to_string(),
        })
    }

    /// Build a rule from compile-time constants. Callers guarantee both are non-empty.
    pub(crate) fn from_static(old: &'static str, new: &'static str) -> Self {
        debug_assert!(!old.is_empty() && !new.is_empty());
        Self {
            old: old.to_string(),
            new: new.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn old(&self) -> &str {
        &self.old
    }

    #[cfg(test)]
    pub(crate) fn new_text(&self) -> &str {
        &self.new
    }
}

/// Byte offsets of every non-overlapping occurrence of `term` in `text`,
/// scanning left to right. An empty term never matches.
pub fn find_literal_matches(text: &str, term: &str) -> Vec<usize> {
    let mut matches = Vec::new();
    let term_len = term.len();

    if term_len == 0 || term_len > text.len() {
        return matches;
    }

    let mut start = 0;
    while let Some(pos) = text[start..].find(term) {
        matches.push(start + pos);
        start += pos + term_len;
    }

    matches
}

/// Apply `rule` to `text`, returning the new text and the number of replacements.
pub fn replace_literal(text: &str, rule: &ReplacementRule) -> (String, usize) {
    let positions = find_literal_matches(text, &rule.old);
    if positions.is_empty() {
        return (text.to_string(), 0);
    }

    let growth = rule.new.len().saturating_sub(rule.old.len()) * positions.len();
    let mut out = String::with_capacity(text.len() + growth);
    let mut cursor = 0;
    for &pos in &positions {
        out.push_str(&text[cursor..pos]);
        out.push_str(&rule.new);
        cursor = pos + rule.old.len();
    }
    out.push_str(&text[cursor..]);

    (out, positions.len())
}
