// file: src/engine/mod.rs
// description: relevance scoring and excerpt extraction over in-memory transcripts
// reference: internal module structure

pub mod excerpt;
pub mod highlight;
pub mod patterns;
pub mod query;
pub mod ranking;
pub mod scorer;
pub mod tokenizer;

pub use excerpt::ExcerptLocator;
pub use highlight::{coalesce, render, segment_query};
pub use query::Query;
pub use ranking::{Hit, Ranker};
pub use scorer::Scorer;
pub use tokenizer::tokenize;

use crate::models::{Document, ScoredDocument, Span};
use tracing::warn;

pub const DEFAULT_EXCERPT_LENGTH: usize = 350;
pub const DEFAULT_RESULT_LIMIT: usize = 25;

/// Parses `raw`, falling back to the blank query if a pattern cannot be built.
pub fn parse_or_blank(raw: &str) -> Query {
    Query::parse(raw).unwrap_or_else(|e| {
        warn!("Treating query as blank, pattern build failed: {}", e);
        Query::blank()
    })
}

/// Relevance of `document` to `query` with the default weights.
pub fn score(document: &Document, query: &str) -> u32 {
    Scorer::default().score(document, &parse_or_blank(query))
}

/// Densest `max_length`-char passage of `body` for `query`.
pub fn locate_excerpt(body: &str, query: &str, max_length: usize) -> String {
    ExcerptLocator::default()
        .with_max_length(max_length)
        .locate(body, &parse_or_blank(query))
}

/// Matched and unmatched spans of `text`; see [`segment_query`].
pub fn segment<'a>(text: &'a str, query: &str) -> Vec<Span<'a>> {
    segment_query(text, &parse_or_blank(query))
}

/// Up to `limit` matching documents, best first, with excerpts.
pub fn rank(documents: &[Document], query: &str, limit: usize) -> Vec<ScoredDocument> {
    Ranker::default().rank(documents, &parse_or_blank(query), limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_free_functions_use_defaults() {
        let doc = Document::new("v1", "Pricing 101", "", "pricing pricing");
        // title term, two transcript hits, both phrase bonuses
        assert_eq!(score(&doc, "pricing"), 5 + 2 + 15 + 25);
        assert_eq!(
            locate_excerpt(&doc.transcript, "pricing", DEFAULT_EXCERPT_LENGTH),
            "pricing pricing"
        );
        assert_eq!(segment("", "").len(), 1);
        assert_eq!(rank(&[doc], "pricing", DEFAULT_RESULT_LIMIT).len(), 1);
    }

    #[test]
    fn test_single_char_query_matches_nothing() {
        let doc = Document::new("v1", "a", "a", "a a a");
        assert!(tokenize("a").is_empty());
        assert_eq!(score(&doc, "a"), 0);
        assert!(rank(&[doc], "a", 25).is_empty());
    }
}
