//! Strategies command tests

use chunkview::cli::commands::strategies::execute;
use chunkview::cli::OutputFormat;
use chunkview::Strategy;

#[test]
fn test_strategies_human_output() {
    assert!(execute(OutputFormat::Human).is_ok());
}

#[test]
fn test_strategies_json_output() {
    assert!(execute(OutputFormat::Json).is_ok());
}

#[test]
fn test_all_strategies_have_descriptions() {
    for strategy in Strategy::ALL {
        assert!(!strategy.description().is_empty());
        assert!(!strategy.name().is_empty());
    }
}
