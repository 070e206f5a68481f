// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Corpus load failed for {path}: {source}")]
    CorpusRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed document JSON in {file}: {message}")]
    CorpusParse { file: String, message: String },

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Search superseded by generation {0}")]
    Superseded(u64),

    #[error("Search worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}
