// file: src/engine/excerpt.rs
// description: sliding-window excerpt selection with whitespace-aligned edges
// reference: char-boundary safe slicing for multi-byte transcripts

use crate::config::ExcerptConfig;
use crate::engine::query::Query;
use tracing::trace;

#[derive(Debug, Clone, Default)]
pub struct ExcerptLocator {
    config: ExcerptConfig,
}

impl ExcerptLocator {
    pub fn new(config: ExcerptConfig) -> Self {
        Self { config }
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.config.max_length = max_length;
        self
    }

    pub fn config(&self) -> &ExcerptConfig {
        &self.config
    }

    pub fn locate(&self, body: &str, query: &Query) -> String {
        if body.is_empty() {
            return String::new();
        }

        let text = CharIndexed::new(body);
        let max_length = self.config.max_length;

        if query.is_blank() {
            let end = max_length.min(text.len());
            let mut excerpt = text.slice(0, end).to_string();
            if end < text.len() {
                excerpt.push_str(&self.config.ellipsis);
            }
            return excerpt;
        }

        let best = self.densest_window(&text, query);
        let start = text.word_start(best);

        let mut end = start.saturating_add(max_length).min(text.len());
        if end < text.len() {
            let window = text.slice(start, end);
            if let Some(last_space) = window
                .chars()
                .enumerate()
                .filter(|(_, ch)| ch.is_whitespace())
                .map(|(pos, _)| pos)
                .last()
                && last_space as f64 > max_length as f64 * self.config.trim_ratio
            {
                end = start + last_space;
            }
        }

        trace!(best, start, end, "excerpt window chosen");

        let capacity = text.byte_len(start, end) + 2 * self.config.ellipsis.len();
        let mut excerpt = String::with_capacity(capacity);
        if start > 0 {
            excerpt.push_str(&self.config.ellipsis);
        }
        excerpt.push_str(text.slice(start, end));
        if end < text.len() {
            excerpt.push_str(&self.config.ellipsis);
        }
        excerpt
    }

    /// Start of the first window holding the most term occurrences, or 0.
    fn densest_window(&self, text: &CharIndexed<'_>, query: &Query) -> usize {
        let mut best_pos = 0;
        let mut best_count = 0;
        let mut pos: usize = 0;

        while pos.saturating_add(self.config.min_tail) < text.len() {
            let end = pos.saturating_add(self.config.max_length).min(text.len());
            let count = query.count_in(text.slice(pos, end));
            if count > best_count {
                best_count = count;
                best_pos = pos;
            }
            pos += self.config.stride.max(1);
        }

        best_pos
    }
}

/// Char-position view over a string.
struct CharIndexed<'a> {
    text: &'a str,
    offsets: Vec<usize>,
}

impl<'a> CharIndexed<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            offsets: text.char_indices().map(|(offset, _)| offset).collect(),
        }
    }

    fn len(&self) -> usize {
        self.offsets.len()
    }

    fn byte_offset(&self, pos: usize) -> usize {
        self.offsets.get(pos).copied().unwrap_or(self.text.len())
    }

    fn byte_len(&self, start: usize, end: usize) -> usize {
        self.byte_offset(end) - self.byte_offset(start)
    }

    fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[self.byte_offset(start)..self.byte_offset(end)]
    }

    /// Moves `pos` back to just after the nearest preceding whitespace.
    /// A whitespace char at `pos` already ends a word, so the next char starts one.
    fn word_start(&self, pos: usize) -> usize {
        if self.slice(pos, pos + 1).starts_with(char::is_whitespace) {
            return pos + 1;
        }

        let back = self
            .slice(0, pos)
            .chars()
            .rev()
            .take_while(|ch| !ch.is_whitespace())
            .count();
        pos - back
    }
}
