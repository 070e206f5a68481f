// file: src/models/span.rs
// description: labeled text fragment produced by highlight segmentation

use serde::Serialize;

/// A contiguous slice of some text, flagged when it is a query-term match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span<'a> {
    pub text: &'a str,
    pub highlight: bool,
}

impl<'a> Span<'a> {
    pub fn new(text: &'a str, highlight: bool) -> Self {
        Self { text, highlight }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
