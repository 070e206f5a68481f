// file: src/models/search_result.rs
// description: Ranked document with relevance score and excerpt
// reference: produced fresh per query by the ranking pipeline

use crate::models::Document;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    #[serde(flatten)]
    pub document: Document,

    /// Heuristic relevance, higher is better, never negative
    pub score: u32,

    /// Best-matching passage of the transcript
    pub excerpt: String,
}

impl ScoredDocument {
    pub fn new(document: Document, score: u32, excerpt: String) -> Self {
        Self {
            document,
            score,
            excerpt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_flattened() {
        let result = ScoredDocument::new(Document::new("a", "t", "d", "x"), 7, "x".to_string());
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["id"], "a");
        assert_eq!(value["score"], 7);
        assert_eq!(value["excerpt"], "x");
    }
}
