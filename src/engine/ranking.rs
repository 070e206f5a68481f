// file: src/engine/ranking.rs
// description: score, filter, order and truncate a document collection
// reference: stable ordering so equal scores keep input order

use crate::config::{ExcerptConfig, ScoringWeights};
use crate::engine::excerpt::ExcerptLocator;
use crate::engine::query::Query;
use crate::engine::scorer::Scorer;
use crate::models::{Document, ScoredDocument};
use std::cmp::Reverse;
use tracing::debug;

/// A document position in the collection with its non-zero score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub index: usize,
    pub score: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Ranker {
    scorer: Scorer,
    locator: ExcerptLocator,
}

impl Ranker {
    pub fn new(weights: ScoringWeights, excerpt: ExcerptConfig) -> Self {
        Self {
            scorer: Scorer::new(weights),
            locator: ExcerptLocator::new(excerpt),
        }
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn locator(&self) -> &ExcerptLocator {
        &self.locator
    }

    pub fn rank(
        &self,
        documents: &[Document],
        query: &Query,
        limit: usize,
    ) -> Vec<ScoredDocument> {
        let hits = self.score_all(documents, 0, query);
        let selected = select(hits, limit);
        debug!(
            "Ranked {} documents for {:?}, kept {}",
            documents.len(),
            query.raw(),
            selected.len()
        );
        self.attach_excerpts(documents, &selected, query)
    }

    /// Scores `documents`, which start at `offset` in the full collection.
    /// Zero-score documents are left out.
    pub fn score_all(&self, documents: &[Document], offset: usize, query: &Query) -> Vec<Hit> {
        documents
            .iter()
            .enumerate()
            .filter_map(|(position, document)| {
                let score = self.scorer.score(document, query);
                (score > 0).then_some(Hit {
                    index: offset + position,
                    score,
                })
            })
            .collect()
    }

    /// Excerpts are only computed for the selected hits; every call is pure,
    /// so this matches computing them for the whole collection.
    pub fn attach_excerpts(
        &self,
        documents: &[Document],
        hits: &[Hit],
        query: &Query,
    ) -> Vec<ScoredDocument> {
        hits.iter()
            .filter_map(|hit| documents.get(hit.index).map(|document| (hit, document)))
            .map(|(hit, document)| {
                let excerpt = self.locator.locate(&document.transcript, query);
                ScoredDocument::new(document.clone(), hit.score, excerpt)
            })
            .collect()
    }
}

/// Orders hits by score descending, then collection position, and keeps
/// the first `limit`.
pub fn select(mut hits: Vec<Hit>, limit: usize) -> Vec<Hit> {
    hits.sort_by_key(|hit| (Reverse(hit.score), hit.index));
    hits.truncate(limit);
    hits
}
