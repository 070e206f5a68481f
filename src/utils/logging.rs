// file: src/utils/logging.rs
// description: Tracing subscriber initialization with optional ANSI coloring

use crate::models::Span;
use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::new(level);

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_ansi(colored_output)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn format_success(msg: &str) -> String {
    format!("{} {}", "✓".green().bold(), msg.green())
}

pub fn format_warning(msg: &str) -> String {
    format!("{} {}", "⚠".yellow().bold(), msg.yellow())
}

pub fn format_info(msg: &str) -> String {
    format!("{} {}", "ℹ".blue().bold(), msg)
}

/// Renders highlighted spans in bold yellow, the rest untouched.
pub fn format_spans(spans: &[Span<'_>]) -> String {
    spans
        .iter()
        .map(|span| {
            if span.highlight {
                span.text.yellow().bold().to_string()
            } else {
                span.text.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_spans_keeps_text() {
        colored::control::set_override(false);
        let spans = vec![
            Span::new("talk about ", false),
            Span::new("pricing", true),
            Span::new(" today", false),
        ];
        assert_eq!(format_spans(&spans), "talk about pricing today");
        colored::control::unset_override();
    }
}
