// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: concurrent search orchestration

mod searcher;

pub use searcher::{SearchOutcome, Searcher};
