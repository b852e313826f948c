//! Count command - token and character counts for a text file

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the count command
#[derive(Args, Debug)]
pub struct CountArgs {
    /// Text file to count ('-' reads from stdin)
    pub file: PathBuf,
}

/// Count response
#[derive(Debug, Serialize)]
pub struct CountOutput {
    pub tokens: usize,
    pub chars: usize,
}

/// Execute the count command
pub fn execute(
    args: CountArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = if args.file.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        text
    } else {
        std::fs::read_to_string(&args.file)?
    };

    let output = CountOutput {
        tokens: services.engine.tokenizer().count(&text),
        chars: text.chars().count(),
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {}",
                colors::label("Tokens:"),
                colors::number(&output.tokens.to_string())
            );
            println!(
                "{} {}",
                colors::label("Chars: "),
                colors::number(&output.chars.to_string())
            );
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
    }

    Ok(())
}
