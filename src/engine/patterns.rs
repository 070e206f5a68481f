// file: src/engine/patterns.rs
// description: escaped, case-insensitive patterns built from untrusted query terms
// reference: https://docs.rs/regex

use crate::error::Result;
use regex::{Regex, RegexBuilder};

/// Matches `term` as literal text, ignoring case.
pub fn literal(term: &str) -> Result<Regex> {
    let pattern = RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()?;
    Ok(pattern)
}

/// Matches any of `terms` as literal text, ignoring case. Earlier terms win
/// when two alternatives match at the same position.
pub fn alternation(terms: &[String]) -> Result<Regex> {
    let escaped: Vec<String> = terms.iter().map(|term| regex::escape(term)).collect();
    let pattern = RegexBuilder::new(&format!("(?:{})", escaped.join("|")))
        .case_insensitive(true)
        .build()?;
    Ok(pattern)
}

/// Non-overlapping occurrences of `pattern` in `haystack`.
pub fn count_matches(pattern: &Regex, haystack: &str) -> usize {
    pattern.find_iter(haystack).count()
}
