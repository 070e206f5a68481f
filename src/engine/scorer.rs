// file: src/engine/scorer.rs
// description: weighted multi-field relevance heuristic
// reference: title, description and transcript matches with capped counts

use crate::config::ScoringWeights;
use crate::engine::patterns;
use crate::engine::query::Query;
use crate::models::Document;

#[derive(Debug, Clone, Default)]
pub struct Scorer {
    weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn score(&self, document: &Document, query: &Query) -> u32 {
        if query.has_no_terms() {
            return 0;
        }

        let title = document.title.to_lowercase();
        let description = document.description.to_lowercase();
        let mut score = 0u32;

        for (term, pattern) in query.term_patterns() {
            if title.contains(term) {
                score = score.saturating_add(self.weights.title_term);
            }
            if description.contains(term) {
                score = score.saturating_add(self.weights.description_term);
            }

            let occurrences = patterns::count_matches(pattern, &document.transcript);
            let capped = u32::try_from(occurrences)
                .unwrap_or(u32::MAX)
                .min(self.weights.transcript_term_cap);
            score = score.saturating_add(capped);
        }

        if let Some(phrase) = query.phrase_pattern()
            && phrase.is_match(&document.transcript)
        {
            score = score.saturating_add(self.weights.transcript_phrase);
        }

        if title.contains(query.phrase()) {
            score = score.saturating_add(self.weights.title_phrase);
        }

        score
    }
}
