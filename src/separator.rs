use std::sync::LazyLock;

use regex::Regex;

use crate::config::SEPARATOR_PUNCTUATION;

/// Matches a whole unit which is empty, a single ASCII word character or a
/// single separator punctuation mark.
static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    let punctuation: String = SEPARATOR_PUNCTUATION.iter().collect();
    let pattern = format!("^[0-9A-Za-z_{punctuation}]?$");
    Regex::new(&pattern).expect("separator pattern is valid")
});

/// A separator never gets a tone color and does not use up a tone number.
pub fn is_separator(unit: &str) -> bool {
    SEPARATOR_RE.is_match(unit)
}
