//! Strategies command - list available splitting strategies

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::types::Strategy;
use serde::Serialize;

/// One strategy listing entry
#[derive(Debug, Serialize)]
pub struct StrategyInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Execute the strategies command
pub fn execute(format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<StrategyInfo> = Strategy::ALL
        .iter()
        .map(|s| StrategyInfo {
            name: s.name(),
            description: s.description(),
        })
        .collect();

    match format {
        OutputFormat::Human => {
            for entry in &entries {
                println!("{}", colors::strategy(entry.name));
                println!("  {}\n", entry.description);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
    }

    Ok(())
}
