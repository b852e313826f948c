//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Only print the config file path
    #[arg(long)]
    pub path: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub strategy: String,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub preview_chars: usize,
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config_file = config::config_file_path().to_string_lossy().into_owned();

    if args.path {
        println!("{config_file}");
        return Ok(());
    }

    let cfg = &services.config;
    let response = ConfigResponse {
        config_file,
        strategy: cfg.split.strategy.name().to_string(),
        chunk_size: cfg.split.chunk_size,
        chunk_overlap: cfg.split.chunk_overlap,
        preview_chars: cfg.output.preview_chars,
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  split:");
            println!("    strategy: {}", response.strategy);
            println!("    chunk_size: {}", response.chunk_size);
            println!("    chunk_overlap: {}", response.chunk_overlap);
            println!("  output:");
            println!("    preview_chars: {}", response.preview_chars);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
