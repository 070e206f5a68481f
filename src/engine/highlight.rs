// file: src/engine/highlight.rs
// description: lossless partition of text into matched and unmatched spans

use crate::engine::query::Query;
use crate::models::Span;

/// Splits `text` around every term match, keeping the matches.
///
/// The output alternates gap, match, gap, ... and always starts and ends with
/// a gap, so consecutive matches leave empty gaps between them. Joining every
/// span's text gives back `text` unchanged.
pub fn segment_query<'a>(text: &'a str, query: &Query) -> Vec<Span<'a>> {
    let Some(pattern) = query.any_term() else {
        return vec![Span::new(text, false)];
    };
    if text.is_empty() {
        return vec![Span::new(text, false)];
    }

    let classify = |fragment: &'a str| {
        let highlight =
            !fragment.is_empty() && (pattern.is_match(fragment) || query.equals_term(fragment));
        Span::new(fragment, highlight)
    };

    let mut spans = Vec::new();
    let mut last = 0;
    for found in pattern.find_iter(text) {
        spans.push(classify(&text[last..found.start()]));
        spans.push(classify(found.as_str()));
        last = found.end();
    }
    spans.push(classify(&text[last..]));

    spans
}

/// Drops empty unhighlighted spans. Concatenation is unchanged.
pub fn coalesce<'a>(spans: Vec<Span<'a>>) -> Vec<Span<'a>> {
    spans
        .into_iter()
        .filter(|span| span.highlight || !span.is_empty())
        .collect()
}

/// Wraps every highlighted span in `open`/`close`.
pub fn render(spans: &[Span<'_>], open: &str, close: &str) -> String {
    let mut out = String::new();
    for span in spans {
        if span.highlight {
            out.push_str(open);
            out.push_str(span.text);
            out.push_str(close);
        } else {
            out.push_str(span.text);
        }
    }
    out
}
