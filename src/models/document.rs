// file: src/models/document.rs
// description: transcript document model as supplied by the collector
// reference: internal data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One transcript record. The engine only reads these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(alias = "videoId")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Empty when no transcript was available.
    #[serde(default)]
    pub transcript: String,

    // Display metadata, carried through untouched.
    #[serde(default, alias = "publishedAt", skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, alias = "viewCount", skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
    #[serde(default, alias = "wordCount", skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u64>,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        transcript: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            transcript: transcript.into(),
            published_at: None,
            duration: None,
            view_count: None,
            word_count: None,
        }
    }

    pub fn has_transcript(&self) -> bool {
        !self.transcript.trim().is_empty()
    }

    /// Word count from metadata, falling back to counting the transcript.
    pub fn words(&self) -> u64 {
        self.word_count
            .unwrap_or_else(|| self.transcript.split_whitespace().count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_creation() {
        let doc = Document::new("abc123", "Pricing talk", "", "we talk about pricing");

        assert_eq!(doc.id, "abc123");
        assert!(doc.has_transcript());
        assert_eq!(doc.words(), 4);
        assert_eq!(doc.view_count, None);
    }

    #[test]
    fn test_deserialize_collector_shape() {
        let json = r#"{
            "videoId": "xyz",
            "title": "Episode 12",
            "description": "Guest interview",
            "transcript": "",
            "publishedAt": "2024-03-01T12:00:00Z",
            "duration": "1:02:03",
            "viewCount": 1200,
            "wordCount": 9000,
            "thumbnail": "ignored.jpg"
        }"#;

        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.id, "xyz");
        assert!(!doc.has_transcript());
        assert_eq!(doc.view_count, Some(1200));
        assert_eq!(doc.words(), 9000);
        assert!(doc.published_at.is_some());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let doc: Document = serde_json::from_str(r#"{"id": "a", "title": "t"}"#).unwrap();
        assert_eq!(doc.description, "");
        assert_eq!(doc.transcript, "");
        assert_eq!(doc.duration, None);
    }
}
