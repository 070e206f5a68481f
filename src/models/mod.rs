// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod search_result;
pub mod span;

pub use document::Document;
pub use search_result::ScoredDocument;
pub use span::Span;
