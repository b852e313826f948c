//! Split command - chunk a text file and show the result table

use crate::cli::output::{colors, preview};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::{Chunk, SplitConfig, Strategy};
use clap::Args;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Arguments for the split command
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Text file to split ('-' reads from stdin)
    pub file: PathBuf,

    /// Splitting strategy (token-window or sentence-aware)
    #[arg(long, short = 's', value_parser = parse_strategy)]
    pub strategy: Option<Strategy>,

    /// Tokens per chunk (recommended range: 10-500)
    #[arg(long, short = 'c')]
    pub chunk_size: Option<usize>,

    /// Overlapping tokens between chunks (recommended range: 0-50,
    /// must be less than chunk size)
    #[arg(long, short = 'o')]
    pub chunk_overlap: Option<usize>,

    /// Show full chunk text instead of truncated previews
    #[arg(long)]
    pub full: bool,
}

fn parse_strategy(s: &str) -> Result<Strategy, crate::core::error::ChunkviewError> {
    s.parse()
}

/// Split response
#[derive(Debug, Serialize)]
pub struct SplitOutput {
    pub strategy: Strategy,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub total_chunks: usize,
    pub total_tokens: usize,
    pub chunks: Vec<Chunk>,
}

/// Execute the split command
pub fn execute(
    args: SplitArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(&args.file)?;

    let defaults = &services.config.split;
    let config = SplitConfig::new(
        args.strategy.unwrap_or(defaults.strategy),
        args.chunk_size.unwrap_or(defaults.chunk_size),
        args.chunk_overlap.unwrap_or(defaults.chunk_overlap),
    )?;

    let chunks = services.engine.split(&text, &config)?;

    let output = SplitOutput {
        strategy: config.strategy(),
        chunk_size: config.chunk_size(),
        chunk_overlap: config.chunk_overlap(),
        total_chunks: chunks.len(),
        total_tokens: chunks.iter().map(|c| c.token_count).sum(),
        chunks,
    };

    match format {
        OutputFormat::Human => print_human(&output, services.config.output.preview_chars, args.full),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
    }

    Ok(())
}

fn read_input(file: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if file.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(file)?)
    }
}

fn print_human(output: &SplitOutput, preview_chars: usize, full: bool) {
    println!(
        "{} {}  {} {}  {} {}",
        colors::label("Strategy:"),
        colors::strategy(output.strategy.name()),
        colors::label("Chunk size:"),
        colors::number(&output.chunk_size.to_string()),
        colors::label("Overlap:"),
        colors::number(&output.chunk_overlap.to_string()),
    );
    println!(
        "{} {} chunks, {} tokens total\n",
        colors::label("Result:"),
        colors::number(&output.total_chunks.to_string()),
        colors::number(&output.total_tokens.to_string()),
    );

    for chunk in &output.chunks {
        println!(
            "{} {}  {}",
            colors::rank(&format!("Chunk {}", chunk.index + 1)),
            colors::dim(&format!(
                "[{} tokens, {} chars]",
                chunk.token_count, chunk.char_count
            )),
            if full {
                chunk.text.clone()
            } else {
                preview(&chunk.text, preview_chars)
            }
        );
    }
}
