// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{Result, SearchError};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_corpus_path(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(SearchError::Validation(format!(
                "Corpus path does not exist: {}",
                path.display()
            )));
        }

        if !path.is_file() && !path.is_dir() {
            return Err(SearchError::Validation(format!(
                "Corpus path is neither a file nor a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_document_id(id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(SearchError::Validation(
                "Document id is empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_positive(name: &str, value: usize) -> Result<()> {
        if value == 0 {
            return Err(SearchError::Validation(format!(
                "{} must be greater than 0",
                name
            )));
        }
        Ok(())
    }

    pub fn validate_ratio(name: &str, value: f64) -> Result<()> {
        if !(value > 0.0 && value <= 1.0) {
            return Err(SearchError::Validation(format!(
                "{} must be within (0, 1], got {}",
                name, value
            )));
        }
        Ok(())
    }

    /// Truncates to `max_chars` chars, appending `...` when anything was cut.
    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
            None => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_corpus_path() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("corpus.json");
        fs::write(&file_path, "[]").unwrap();

        assert!(Validator::validate_corpus_path(&file_path).is_ok());
        assert!(Validator::validate_corpus_path(temp.path()).is_ok());
        assert!(Validator::validate_corpus_path(Path::new("/nonexistent/corpus.json")).is_err());
    }

    #[test]
    fn test_validate_document_id() {
        assert!(Validator::validate_document_id("dQw4w9WgXcQ").is_ok());
        assert!(Validator::validate_document_id("").is_err());
        assert!(Validator::validate_document_id("   ").is_err());
    }

    #[test]
    fn test_validate_ratio() {
        assert!(Validator::validate_ratio("r", 0.7).is_ok());
        assert!(Validator::validate_ratio("r", 1.0).is_ok());
        assert!(Validator::validate_ratio("r", 0.0).is_err());
        assert!(Validator::validate_ratio("r", f64::NAN).is_err());
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(Validator::truncate_text("short", 10), "short");
        assert_eq!(
            Validator::truncate_text("this is a very long text", 10),
            "this is a ..."
        );
        assert_eq!(Validator::truncate_text("héllo wörld", 4), "héll...");
    }
}
