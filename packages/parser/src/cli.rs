//! Command-line interface for the parser.
//!
//! The CLI is a thin layer over the library: it loads extracted-text
//! documents (plain `.txt` or the download pipeline's `.json` files), runs
//! the requested stage and prints either a human summary or JSON.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use textwrap::fill;

use crate::analysis::analyze;
use crate::chunking::{ChunkConfig, ChunkEngine};
use crate::config::{DEFAULT_MAX_CHUNK_SIZE, DEFAULT_MIN_CHUNK_SIZE};
use crate::error::Result;
use crate::segmenter;
use crate::stats::CorpusStats;
use crate::types::RawDocument;

/// sudakt-parser - structural parsing of Russian arbitration-court rulings.
#[derive(Parser)]
#[command(name = "sudakt-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a document into structural sections.
    Parse {
        /// Input file: extracted-text JSON or plain text
        file: PathBuf,

        /// Emit machine-readable JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Analyze the factual narrative: topics, citations, entities.
    Analyze {
        /// Input file: extracted-text JSON or plain text
        file: PathBuf,

        /// Emit machine-readable JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Chunk the factual narrative for embedding.
    Chunk {
        /// Input file: extracted-text JSON or plain text
        file: PathBuf,

        /// Minimum chunk size in characters
        #[arg(long, default_value_t = DEFAULT_MIN_CHUNK_SIZE)]
        min_size: usize,

        /// Maximum chunk size in characters
        #[arg(long, default_value_t = DEFAULT_MAX_CHUNK_SIZE)]
        max_size: usize,

        /// Emit machine-readable JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Aggregate statistics over a directory of extracted-text JSON files.
    Stats {
        /// Directory with per-document JSON files
        dir: PathBuf,

        /// Emit machine-readable JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file, json } => parse_command(&file, json),
        Commands::Analyze { file, json } => analyze_command(&file, json),
        Commands::Chunk {
            file,
            min_size,
            max_size,
            json,
        } => chunk_command(&file, min_size, max_size, json),
        Commands::Stats { dir, json } => stats_command(&dir, json),
    }
}

/// Load a document from plain text or an extracted-text JSON file.
fn load_document(path: &Path) -> Result<RawDocument> {
    let content = fs::read_to_string(path)?;
    if path.extension().is_some_and(|ext| ext == "json") {
        Ok(serde_json::from_str(&content)?)
    } else {
        Ok(RawDocument::from_text(content))
    }
}

fn parse_command(file: &Path, json: bool) -> Result<()> {
    let doc = load_document(file)?;
    let parsed = segmenter::parse(&doc);

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    println!("{} {}", style("Sections:").bold(), parsed.sections.len());
    for section in &parsed.sections {
        println!();
        println!(
            "{} ({}..{}, {} chars)",
            style(section.kind.as_str().to_uppercase()).cyan().bold(),
            section.start,
            section.end,
            section.text.chars().count()
        );
        if let Some(marker) = &section.marker {
            println!("  marker: {:?}", marker.trim());
        }
        println!("{}", preview(&section.text));
    }
    Ok(())
}

fn analyze_command(file: &Path, json: bool) -> Result<()> {
    let doc = load_document(file)?;
    let parsed = segmenter::parse(&doc);
    let analysis = analyze(parsed.facts());

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("{}", style("Topics:").bold());
    let mut topics: Vec<_> = analysis.topics.iter().collect();
    topics.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
    for (topic, count) in topics {
        println!("  {}: {count}", topic.as_str());
    }

    println!();
    println!(
        "{} ({} found)",
        style("Law citations:").bold(),
        analysis.laws.len()
    );
    let mut seen = BTreeSet::new();
    for citation in &analysis.laws {
        if seen.insert((citation.article.clone(), citation.law)) {
            println!("  ст. {} {}", citation.article, citation.law.as_str());
        }
    }

    println!();
    println!("{}", style("Entities:").bold());
    for (kind, values) in &analysis.entities {
        let shown: Vec<_> = values.iter().take(5).cloned().collect();
        let more = values.len().saturating_sub(5);
        let suffix = if more > 0 {
            format!(" (+{more} more)")
        } else {
            String::new()
        };
        println!("  {}: {}{}", kind.as_str(), shown.join(", "), suffix);
    }
    Ok(())
}

fn chunk_command(file: &Path, min_size: usize, max_size: usize, json: bool) -> Result<()> {
    let doc = load_document(file)?;
    let parsed = segmenter::parse(&doc);

    // Chunk the factual narrative when present, the whole text otherwise.
    let target = if parsed.facts().is_empty() {
        doc.text.as_str()
    } else {
        parsed.facts()
    };

    let engine = ChunkEngine::new(ChunkConfig::new(min_size, max_size)?)?;
    let chunks = engine.chunk(target);

    if json {
        println!("{}", serde_json::to_string_pretty(&chunks)?);
        return Ok(());
    }

    println!("{} {}", style("Chunks:").bold(), chunks.len());
    for (i, chunk) in chunks.iter().enumerate() {
        let head: String = chunk.text.chars().take(100).collect();
        println!(
            "  [{}] {} chars: {}",
            i + 1,
            chunk.text.chars().count(),
            head.replace('\n', " ")
        );
    }
    Ok(())
}

fn stats_command(dir: &Path, json: bool) -> Result<()> {
    let mut files = Vec::new();
    collect_json_files(dir, &mut files)?;
    files.sort();

    let pb = ProgressBar::new(files.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.green} {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let mut stats = CorpusStats::new();
    for path in &files {
        pb.inc(1);
        let doc = match load_document(path) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable document");
                continue;
            }
        };
        // Scanned files without a text layer are expected; skip silently.
        if doc.text.is_empty() {
            continue;
        }
        stats.record(&segmenter::parse(&doc));
    }
    pb.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{} {}", style("Documents:").bold(), stats.total_docs);
    println!("  with established section: {}", stats.docs_with_established);
    println!("  with ruling section: {}", stats.docs_with_ruling);

    if !stats.by_doc_type.is_empty() {
        println!();
        println!("{}", style("By document type:").bold());
        for (doc_type, count) in &stats.by_doc_type {
            println!("  {doc_type}: {count}");
        }
    }

    if !stats.section_sizes.is_empty() {
        println!();
        println!("{}", style("Section sizes (chars):").bold());
        for (kind, sizes) in &stats.section_sizes {
            println!(
                "  {}: avg={} (min={}, max={}, n={})",
                kind.as_str(),
                sizes.avg_chars(),
                sizes.min_chars,
                sizes.max_chars,
                sizes.count
            );
        }
    }

    if !stats.topics.is_empty() {
        println!();
        println!("{}", style("Top topics:").bold());
        let mut topics: Vec<_> = stats.topics.iter().collect();
        topics.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
        for (topic, count) in topics.into_iter().take(10) {
            println!("  {}: {count}", topic.as_str());
        }
    }

    if !stats.laws.is_empty() {
        println!();
        println!("{}", style("Top law citations:").bold());
        let mut laws: Vec<_> = stats.laws.iter().collect();
        laws.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
        for (law, count) in laws.into_iter().take(10) {
            println!("  {law}: {count}");
        }
    }

    if !stats.entities.is_empty() {
        println!();
        println!("{}", style("Unique entities:").bold());
        for (kind, values) in &stats.entities {
            println!("  {}: {}", kind.as_str(), values.len());
        }
    }
    Ok(())
}

/// First 200 characters of a section, wrapped and indented for the terminal.
fn preview(text: &str) -> String {
    let head: String = text.chars().take(200).collect();
    let wrapped = fill(&head.replace('\n', " "), 76);
    wrapped
        .lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Recursively collect candidate document files, skipping the service files
/// the download pipeline writes alongside them (progress and instance
/// indexes).
fn collect_json_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_json_files(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "json") {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with('_') || name.starts_with("instance") {
                continue;
            }
            files.push(path);
        }
    }
    Ok(())
}
