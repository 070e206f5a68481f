// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use transcript_search::utils::logging::{format_info, format_spans, format_success, format_warning};
use transcript_search::{
    Config, CorpusLoader, CorpusStats, ExcerptLocator, JsonExporter, Query, Searcher, Validator,
    engine,
};

const TITLE_WIDTH: usize = 72;

#[derive(Parser)]
#[command(name = "transcript_search")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Rank spoken-word transcripts and extract matching excerpts", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    /// Corpus file or directory, overrides the configured path
    #[arg(long, value_name = "PATH", env = "TRANSCRIPT_SEARCH_CORPUS")]
    corpus: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the corpus against a query
    Search {
        query: String,

        #[arg(short, long)]
        limit: Option<usize>,

        /// Write results as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long)]
        pretty: bool,
    },

    /// Show the best excerpt of one document
    Excerpt {
        id: String,

        query: String,

        #[arg(long, value_name = "CHARS")]
        max_length: Option<usize>,
    },

    /// Highlight query terms in arbitrary text
    Highlight { text: String, query: String },

    /// Summarize the loaded corpus
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    transcript_search::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    info!("Loading configuration from: {}", cli.config.display());

    let mut config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    if let Some(corpus) = cli.corpus {
        config.corpus.path = corpus;
    }

    match cli.command {
        Commands::Search {
            query,
            limit,
            output,
            pretty,
        } => {
            cmd_search(&config, &query, limit, output, pretty).await?;
        }
        Commands::Excerpt {
            id,
            query,
            max_length,
        } => {
            cmd_excerpt(&config, &id, &query, max_length)?;
        }
        Commands::Highlight { text, query } => {
            cmd_highlight(&text, &query);
        }
        Commands::Stats => {
            cmd_stats(&config)?;
        }
    }

    Ok(())
}

fn load_corpus(config: &Config) -> Result<Vec<transcript_search::Document>> {
    CorpusLoader::new()
        .load(&config.corpus.path)
        .with_context(|| format!("Failed to load corpus from {}", config.corpus.path.display()))
}

async fn cmd_search(
    config: &Config,
    query: &str,
    limit: Option<usize>,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let documents = load_corpus(config)?;
    let searcher = Searcher::new(config, documents);
    let limit = limit.unwrap_or(searcher.result_limit());

    let outcome = searcher
        .search_with_limit(query, limit)
        .await
        .context("Search failed")?;
    let results = outcome.results;

    if let Some(path) = output {
        let exporter = JsonExporter::new(path)?;
        exporter.export(query, &results, pretty)?;
        println!(
            "{}",
            format_success(&format!(
                "Wrote {} result(s) to {}",
                results.len(),
                exporter.output_path().display()
            ))
        );
        return Ok(());
    }

    if results.is_empty() {
        println!(
            "{}",
            format_warning(&format!("No results found for query: \"{}\"", query))
        );
        println!("Try:");
        println!("  - Using different search terms");
        println!("  - Using words longer than one character");
        return Ok(());
    }

    let parsed = engine::parse_or_blank(query);

    println!("\nSearch Results for: \"{}\"\n", query);
    println!("Found {} result(s)\n", results.len());
    println!("{}", "=".repeat(80));

    for (idx, result) in results.iter().enumerate() {
        println!(
            "\n{}. {} (Score: {})",
            idx + 1,
            Validator::truncate_text(&result.document.title, TITLE_WIDTH),
            result.score
        );
        println!("   Id: {}", result.document.id);

        if let Some(published) = result.document.published_at {
            println!("   Published: {}", published.format("%Y-%m-%d"));
        }

        let spans = engine::coalesce(engine::segment_query(&result.excerpt, &parsed));
        println!("   {}", format_spans(&spans));
    }

    println!("\n{}", "=".repeat(80));
    info!("{}", outcome.metrics.format());

    Ok(())
}

fn cmd_excerpt(config: &Config, id: &str, query: &str, max_length: Option<usize>) -> Result<()> {
    let documents = load_corpus(config)?;
    let document = documents
        .iter()
        .find(|d| d.id == id)
        .with_context(|| format!("No document with id {}", id))?;

    let mut locator = ExcerptLocator::new(config.excerpt.clone());
    if let Some(max_length) = max_length {
        locator = locator.with_max_length(max_length);
    }

    let parsed = Query::parse(query).context("Invalid query")?;
    let excerpt = locator.locate(&document.transcript, &parsed);

    if excerpt.is_empty() {
        println!("{}", format_warning("Transcript unavailable"));
        return Ok(());
    }

    let spans = engine::coalesce(engine::segment_query(&excerpt, &parsed));
    println!("{}", format_spans(&spans));
    Ok(())
}

fn cmd_highlight(text: &str, query: &str) {
    let spans = engine::coalesce(engine::segment(text, query));
    println!("{}", format_spans(&spans));
}

fn cmd_stats(config: &Config) -> Result<()> {
    let documents = load_corpus(config)?;
    let stats = CorpusStats::collect(&documents);

    println!("{}", format_info(&format!("Documents: {}", stats.documents)));
    println!(
        "{}",
        format_info(&format!("With transcript: {}", stats.with_transcript))
    );
    println!("{}", format_info(&format!("Total words: {}", stats.total_words)));

    Ok(())
}
