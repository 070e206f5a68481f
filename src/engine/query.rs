// file: src/engine/query.rs
// description: parsed query with its term patterns compiled once
// reference: https://docs.rs/regex

use crate::engine::patterns;
use crate::engine::tokenizer::tokenize;
use crate::error::Result;
use regex::Regex;

/// A query ready for scanning.
///
/// Every pattern here is built from escaped terms, so arbitrary user input is
/// matched as literal text.
#[derive(Debug, Clone)]
pub struct Query {
    raw: String,
    phrase: String,
    terms: Vec<String>,
    term_patterns: Vec<Regex>,
    phrase_pattern: Option<Regex>,
    any_term: Option<Regex>,
}

impl Query {
    pub fn parse(raw: &str) -> Result<Self> {
        let terms = tokenize(raw);
        let phrase = raw.trim().to_lowercase();

        if terms.is_empty() {
            return Ok(Self {
                raw: raw.to_string(),
                phrase,
                terms,
                term_patterns: Vec::new(),
                phrase_pattern: None,
                any_term: None,
            });
        }

        let term_patterns = terms
            .iter()
            .map(|term| patterns::literal(term))
            .collect::<Result<Vec<_>>>()?;
        let phrase_pattern = Some(patterns::literal(&phrase)?);
        let any_term = Some(patterns::alternation(&terms)?);

        Ok(Self {
            raw: raw.to_string(),
            phrase,
            terms,
            term_patterns,
            phrase_pattern,
            any_term,
        })
    }

    /// The query that matches nothing.
    pub fn blank() -> Self {
        Self {
            raw: String::new(),
            phrase: String::new(),
            terms: Vec::new(),
            term_patterns: Vec::new(),
            phrase_pattern: None,
            any_term: None,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whole query, trimmed and lower-cased.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// True when the raw input is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.phrase.is_empty()
    }

    /// True when no term survived tokenization.
    pub fn has_no_terms(&self) -> bool {
        self.terms.is_empty()
    }

    /// Pairs each term with its literal pattern.
    pub fn term_patterns(&self) -> impl Iterator<Item = (&str, &Regex)> {
        self.terms
            .iter()
            .map(String::as_str)
            .zip(self.term_patterns.iter())
    }

    pub fn phrase_pattern(&self) -> Option<&Regex> {
        self.phrase_pattern.as_ref()
    }

    pub fn any_term(&self) -> Option<&Regex> {
        self.any_term.as_ref()
    }

    /// Total occurrences of every term in `text`, uncapped.
    pub fn count_in(&self, text: &str) -> usize {
        self.term_patterns
            .iter()
            .map(|pattern| patterns::count_matches(pattern, text))
            .sum()
    }

    /// Case-insensitive equality against any single term.
    pub fn equals_term(&self, fragment: &str) -> bool {
        if fragment.is_empty() {
            return false;
        }
        let lowered = fragment.to_lowercase();
        self.terms.iter().any(|term| *term == lowered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_builds_patterns_per_term() {
        let query = Query::parse("  Pricing Strategy ").unwrap();
        assert_eq!(query.terms(), ["pricing", "strategy"]);
        assert_eq!(query.phrase(), "pricing strategy");
        assert_eq!(query.term_patterns().count(), 2);
        assert!(query.any_term().is_some());
    }

    #[test]
    fn test_short_only_query_has_no_terms() {
        let query = Query::parse("a b").unwrap();
        assert!(query.has_no_terms());
        assert!(!query.is_blank());
        assert!(query.phrase_pattern().is_none());
        assert_eq!(query.count_in("a b a b"), 0);
    }

    #[test]
    fn test_blank_query() {
        let query = Query::blank();
        assert!(query.is_blank());
        assert!(query.has_no_terms());
        assert!(Query::parse("   ").unwrap().is_blank());
    }

    #[test]
    fn test_count_in_sums_terms() {
        let query = Query::parse("growth ads").unwrap();
        assert_eq!(query.count_in("Growth via ads, more ADS, growth."), 4);
    }

    #[test]
    fn test_equals_term() {
        let query = Query::parse("SaaS").unwrap();
        assert!(query.equals_term("SAAS"));
        assert!(!query.equals_term("saas!"));
        assert!(!query.equals_term(""));
    }
}
