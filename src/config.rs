// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, SearchError};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub search: SearchConfig,
    #[serde(default)]
    pub excerpt: ExcerptConfig,
    #[serde(default)]
    pub weights: ScoringWeights,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub parallel_workers: usize,
    pub result_limit: usize,
}

/// Sliding-window parameters for excerpt selection.
///
/// All lengths are counted in chars, never bytes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExcerptConfig {
    pub max_length: usize,
    /// Distance between candidate window starts.
    pub stride: usize,
    /// Scanning stops once this many chars or fewer remain after a start.
    pub min_tail: usize,
    /// Trailing whitespace beyond this fraction of `max_length` becomes the cut point.
    pub trim_ratio: f64,
    pub ellipsis: String,
}

impl Default for ExcerptConfig {
    fn default() -> Self {
        Self {
            max_length: 350,
            stride: 30,
            min_tail: 100,
            trim_ratio: 0.7,
            ellipsis: "...".to_string(),
        }
    }
}

/// Per-field weights of the heuristic ranker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub title_term: u32,
    pub description_term: u32,
    /// Upper bound on the transcript occurrence count of a single term.
    pub transcript_term_cap: u32,
    pub transcript_phrase: u32,
    pub title_phrase: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            title_term: 5,
            description_term: 2,
            transcript_term_cap: 20,
            transcript_phrase: 15,
            title_phrase: 25,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("TRANSCRIPT_SEARCH")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            corpus: CorpusConfig {
                path: PathBuf::from("data/transcripts.json"),
            },
            search: SearchConfig {
                parallel_workers: 4,
                result_limit: 25,
            },
            excerpt: ExcerptConfig::default(),
            weights: ScoringWeights::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.search.parallel_workers == 0 {
            return Err(SearchError::Config(
                "parallel_workers must be greater than 0".to_string(),
            ));
        }

        if self.search.result_limit == 0 {
            return Err(SearchError::Config(
                "result_limit must be greater than 0".to_string(),
            ));
        }

        Validator::validate_positive("excerpt.max_length", self.excerpt.max_length)
            .and_then(|_| Validator::validate_positive("excerpt.stride", self.excerpt.stride))
            .and_then(|_| Validator::validate_ratio("excerpt.trim_ratio", self.excerpt.trim_ratio))
            .map_err(|e| SearchError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.excerpt.max_length, 350);
        assert_eq!(config.weights.title_phrase, 25);
    }

    #[test]
    fn test_rejects_zero_workers() {
        let mut config = Config::default_config();
        config.search.parallel_workers = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_trim_ratio() {
        let mut config = Config::default_config();
        config.excerpt.trim_ratio = 1.5;
        assert!(config.validate().is_err());

        config.excerpt.trim_ratio = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_toml_with_partial_sections() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("search.toml");
        fs::write(
            &path,
            r#"
[corpus]
path = "transcripts"

[search]
parallel_workers = 2
result_limit = 10

[weights]
title_phrase = 40
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.corpus.path, PathBuf::from("transcripts"));
        assert_eq!(config.search.result_limit, 10);
        assert_eq!(config.weights.title_phrase, 40);
        assert_eq!(config.weights.title_term, 5);
        assert_eq!(config.excerpt, ExcerptConfig::default());
    }
}
