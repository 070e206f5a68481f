// file: src/corpus/loader.rs
// description: loads transcript documents from a JSON file or a directory of JSON files
// reference: https://docs.rs/walkdir

use crate::error::{Result, SearchError};
use crate::models::Document;
use crate::utils::Validator;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// A corpus file holds either a single document or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum CorpusFile {
    Many(Vec<Document>),
    One(Box<Document>),
}

pub struct CorpusLoader {
    skip_empty_transcripts: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusStats {
    pub documents: usize,
    pub with_transcript: usize,
    pub total_words: u64,
}

impl CorpusLoader {
    pub fn new() -> Self {
        Self {
            skip_empty_transcripts: false,
        }
    }

    /// Leaves out documents whose transcript is unavailable.
    pub fn skip_empty_transcripts(mut self, skip: bool) -> Self {
        self.skip_empty_transcripts = skip;
        self
    }

    pub fn load(&self, path: &Path) -> Result<Vec<Document>> {
        Validator::validate_corpus_path(path)?;

        let raw = if path.is_dir() {
            self.load_directory(path)?
        } else {
            Self::load_file(path)?
        };

        let documents = self.dedupe(raw)?;
        info!("Loaded {} documents from {}", documents.len(), path.display());
        Ok(documents)
    }

    fn load_directory(&self, root: &Path) -> Result<Vec<Document>> {
        info!("Scanning corpus directory: {}", root.display());

        let mut paths: Vec<_> = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let mut documents = Vec::new();
        for path in paths {
            debug!("Reading corpus file: {}", path.display());
            documents.extend(Self::load_file(&path)?);
        }
        Ok(documents)
    }

    fn load_file(path: &Path) -> Result<Vec<Document>> {
        let content = fs::read_to_string(path).map_err(|source| SearchError::CorpusRead {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed: CorpusFile =
            serde_json::from_str(&content).map_err(|e| SearchError::CorpusParse {
                file: path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(match parsed {
            CorpusFile::Many(documents) => documents,
            CorpusFile::One(document) => vec![*document],
        })
    }

    fn dedupe(&self, documents: Vec<Document>) -> Result<Vec<Document>> {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(documents.len());

        for document in documents {
            Validator::validate_document_id(&document.id)?;

            if self.skip_empty_transcripts && !document.has_transcript() {
                debug!("Skipping document without transcript: {}", document.id);
                continue;
            }

            if !seen.insert(document.id.clone()) {
                warn!("Duplicate document id {}, keeping first occurrence", document.id);
                continue;
            }

            kept.push(document);
        }

        Ok(kept)
    }
}

impl Default for CorpusLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusStats {
    pub fn collect(documents: &[Document]) -> Self {
        Self {
            documents: documents.len(),
            with_transcript: documents.iter().filter(|d| d.has_transcript()).count(),
            total_words: documents.iter().map(Document::words).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const TWO_DOCS: &str = r#"[
        {"id": "a", "title": "First", "transcript": "one two three"},
        {"id": "b", "title": "Second", "transcript": ""}
    ]"#;

    #[test]
    fn test_load_array_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("corpus.json");
        fs::write(&path, TWO_DOCS).unwrap();

        let documents = CorpusLoader::new().load(&path).unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].id, "a");
    }

    #[test]
    fn test_load_directory_mixed_shapes() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("01.json"), TWO_DOCS).unwrap();
        fs::create_dir_all(temp.path().join("nested")).unwrap();
        fs::write(
            temp.path().join("nested/02.json"),
            r#"{"videoId": "c", "title": "Third", "transcript": "four five"}"#,
        )
        .unwrap();
        fs::write(temp.path().join("notes.txt"), "not json").unwrap();

        let documents = CorpusLoader::new().load(temp.path()).unwrap();
        let ids: Vec<&str> = documents.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicates_keep_first() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dupes.json");
        fs::write(
            &path,
            r#"[{"id": "a", "title": "Kept"}, {"id": "a", "title": "Dropped"}]"#,
        )
        .unwrap();

        let documents = CorpusLoader::new().load(&path).unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].title, "Kept");
    }

    #[test]
    fn test_skip_empty_transcripts() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("corpus.json");
        fs::write(&path, TWO_DOCS).unwrap();

        let documents = CorpusLoader::new()
            .skip_empty_transcripts(true)
            .load(&path)
            .unwrap();
        assert_eq!(documents.len(), 1);
    }

    #[test]
    fn test_rejects_empty_id_and_bad_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, r#"[{"id": "", "title": "x"}]"#).unwrap();
        assert!(CorpusLoader::new().load(&path).is_err());

        fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            CorpusLoader::new().load(&path),
            Err(SearchError::CorpusParse { .. })
        ));
    }

    #[test]
    fn test_corpus_stats() {
        let documents = vec![
            Document::new("a", "t", "", "one two three"),
            Document::new("b", "t", "", ""),
        ];
        let stats = CorpusStats::collect(&documents);
        assert_eq!(
            stats,
            CorpusStats {
                documents: 2,
                with_transcript: 1,
                total_words: 3,
            }
        );
    }
}
