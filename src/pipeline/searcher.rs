// file: src/pipeline/searcher.rs
// description: fans per-document scoring out across blocking workers and merges the ranking
// reference: bounded concurrency with buffer_unordered over spawn_blocking tasks

use crate::config::Config;
use crate::engine::ranking::{self, Hit, Ranker};
use crate::engine::Query;
use crate::error::{Result, SearchError};
use crate::models::{Document, ScoredDocument};
use crate::utils::{OperationTimer, PerformanceMetrics};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

const SLOW_SEARCH: Duration = Duration::from_millis(500);

/// Ranks queries against a shared corpus on a pool of blocking workers.
///
/// Starting a search supersedes any search still in flight on the same
/// `Searcher`: the older call returns [`SearchError::Superseded`] instead of
/// results.
#[derive(Clone)]
pub struct Searcher {
    documents: Arc<Vec<Document>>,
    ranker: Arc<Ranker>,
    max_concurrent_tasks: usize,
    result_limit: usize,
    generation: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub results: Vec<ScoredDocument>,
    pub metrics: PerformanceMetrics,
}

impl Searcher {
    pub fn new(config: &Config, documents: Vec<Document>) -> Self {
        Self {
            documents: Arc::new(documents),
            ranker: Arc::new(Ranker::new(config.weights.clone(), config.excerpt.clone())),
            max_concurrent_tasks: config.search.parallel_workers.max(1),
            result_limit: config.search.result_limit,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn result_limit(&self) -> usize {
        self.result_limit
    }

    pub async fn search(&self, raw_query: &str) -> Result<SearchOutcome> {
        self.search_with_limit(raw_query, self.result_limit).await
    }

    pub async fn search_with_limit(
        &self,
        raw_query: &str,
        limit: usize,
    ) -> Result<SearchOutcome> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let timer = OperationTimer::new("search");
        let query = Arc::new(Query::parse(raw_query)?);

        info!("Searching {} documents for {:?}", self.documents.len(), raw_query);

        let hits = self.score_concurrently(Arc::clone(&query)).await?;
        self.ensure_current(generation)?;

        let selected = ranking::select(hits, limit);
        let results = self
            .ranker
            .attach_excerpts(&self.documents, &selected, &query);
        self.ensure_current(generation)?;

        timer.warn_if_slow(SLOW_SEARCH, raw_query);
        let metrics = timer.finish_with_count(self.documents.len());
        info!("Found {} result(s) for {:?}", results.len(), raw_query);

        Ok(SearchOutcome { results, metrics })
    }

    async fn score_concurrently(&self, query: Arc<Query>) -> Result<Vec<Hit>> {
        if query.has_no_terms() || self.documents.is_empty() {
            return Ok(Vec::new());
        }

        let chunk_size = self.documents.len().div_ceil(self.max_concurrent_tasks);
        let chunks: Vec<(usize, usize)> = (0..self.documents.len())
            .step_by(chunk_size)
            .map(|start| (start, (start + chunk_size).min(self.documents.len())))
            .collect();

        debug!(
            "Scoring {} chunk(s) of up to {} documents",
            chunks.len(),
            chunk_size
        );

        let tasks = chunks.into_iter().map(|(start, end)| {
            let documents = Arc::clone(&self.documents);
            let ranker = Arc::clone(&self.ranker);
            let query = Arc::clone(&query);

            async move {
                tokio::task::spawn_blocking(move || {
                    ranker.score_all(&documents[start..end], start, &query)
                })
                .await
                .map_err(SearchError::from)
            }
        });

        let per_chunk: Vec<Vec<Hit>> = stream::iter(tasks)
            .buffer_unordered(self.max_concurrent_tasks)
            .try_collect()
            .await?;

        Ok(per_chunk.into_iter().flatten().collect())
    }

    fn ensure_current(&self, generation: u64) -> Result<()> {
        let latest = self.generation.load(Ordering::SeqCst);
        if latest != generation {
            warn!(
                "Discarding search generation {}, superseded by {}",
                generation, latest
            );
            return Err(SearchError::Superseded(latest));
        }
        Ok(())
    }
}
