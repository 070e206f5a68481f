// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod exporter;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use config::{Config, CorpusConfig, ExcerptConfig, ScoringWeights, SearchConfig};
pub use corpus::{CorpusLoader, CorpusStats};
pub use engine::{
    DEFAULT_EXCERPT_LENGTH, DEFAULT_RESULT_LIMIT, ExcerptLocator, Query, Ranker, Scorer,
    locate_excerpt, rank, score, segment, tokenize,
};
pub use error::{Result, SearchError};
pub use exporter::{JsonExporter, ResultManifest};
pub use models::{Document, ScoredDocument, Span};
pub use pipeline::{SearchOutcome, Searcher};
pub use utils::{OperationTimer, PerformanceMetrics, Validator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _ranker = Ranker::default();
        assert!(tokenize("").is_empty());
    }
}
