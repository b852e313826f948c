//! CLI adapter for chunkview
//!
//! Provides the command-line interface over the chunking engine.
//! This module depends on `core/` but `core/` knows nothing about it;
//! the engine's only boundary is a function-call contract.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// chunkview - Token-Aware Text Chunk Inspector
///
/// Split already-extracted document text into overlapping chunks and
/// inspect the result: each chunk with its token count and character
/// length, exactly as a retrieval pipeline would see it.
#[derive(Parser, Debug)]
#[command(name = "chunkview")]
#[command(version)]
#[command(about = "Token-aware text chunk inspector", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a text file into chunks and show the chunk table
    Split(commands::SplitArgs),

    /// Count tokens and characters in a text file
    Count(commands::CountArgs),

    /// List available splitting strategies with descriptions
    Strategies,

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  chunkview completions bash > ~/.local/share/bash-completion/completions/chunkview
    ///   zsh:   chunkview completions zsh > ~/.zfunc/_chunkview
    ///   fish:  chunkview completions fish > ~/.config/fish/completions/chunkview.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let format = cli.format;

    match cli.command {
        // Commands that don't need configuration or the engine
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Strategies => commands::strategies::execute(format),

        Commands::Split(args) => commands::split::execute(args, &setup_services()?, format),
        Commands::Count(args) => commands::count::execute(args, &setup_services()?, format),
        Commands::ShowConfig(args) => commands::config::execute(args, &setup_services()?, format),
    }
}

/// Load configuration and build the shared service container
fn setup_services() -> Result<std::sync::Arc<crate::core::services::Services>, Box<dyn std::error::Error>>
{
    let config = crate::core::config::Config::load()?;
    config.log_config();
    Ok(std::sync::Arc::new(crate::core::services::Services::new(
        config,
    )?))
}
