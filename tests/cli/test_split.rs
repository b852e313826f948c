//! Split command tests

use crate::common::{create_test_services, ARTICLE};
use chunkview::cli::commands::split::{execute, SplitArgs};
use chunkview::cli::OutputFormat;
use chunkview::Strategy;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_text_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

fn args(file: &NamedTempFile) -> SplitArgs {
    SplitArgs {
        file: file.path().to_path_buf(),
        strategy: Some(Strategy::TokenWindow),
        chunk_size: Some(20),
        chunk_overlap: Some(5),
        full: false,
    }
}

#[test]
fn test_split_human_output() {
    let services = create_test_services();
    let file = write_text_file(ARTICLE);
    let result = execute(args(&file), &services, OutputFormat::Human);
    assert!(result.is_ok());
}

#[test]
fn test_split_json_output() {
    let services = create_test_services();
    let file = write_text_file(ARTICLE);
    let result = execute(args(&file), &services, OutputFormat::Json);
    assert!(result.is_ok());
}

#[test]
fn test_split_sentence_aware_strategy() {
    let services = create_test_services();
    let file = write_text_file(ARTICLE);
    let mut a = args(&file);
    a.strategy = Some(Strategy::SentenceAware);
    assert!(execute(a, &services, OutputFormat::Human).is_ok());
}

#[test]
fn test_split_defaults_come_from_config() {
    let services = create_test_services();
    let file = write_text_file(ARTICLE);
    let a = SplitArgs {
        file: file.path().to_path_buf(),
        strategy: None,
        chunk_size: None,
        chunk_overlap: None,
        full: false,
    };
    // Default config (token-window, 100/0) is valid
    assert!(execute(a, &services, OutputFormat::Json).is_ok());
}

#[test]
fn test_split_invalid_overlap_fails() {
    let services = create_test_services();
    let file = write_text_file(ARTICLE);
    let mut a = args(&file);
    a.chunk_size = Some(10);
    a.chunk_overlap = Some(10);

    let err = execute(a, &services, OutputFormat::Human).unwrap_err();
    assert!(err.to_string().contains("chunk_overlap"));
}

#[test]
fn test_split_zero_chunk_size_fails() {
    let services = create_test_services();
    let file = write_text_file(ARTICLE);
    let mut a = args(&file);
    a.chunk_size = Some(0);
    a.chunk_overlap = Some(0);

    assert!(execute(a, &services, OutputFormat::Human).is_err());
}

#[test]
fn test_split_missing_file_fails() {
    let services = create_test_services();
    let a = SplitArgs {
        file: "/nonexistent/input.txt".into(),
        strategy: Some(Strategy::TokenWindow),
        chunk_size: Some(20),
        chunk_overlap: Some(5),
        full: false,
    };
    assert!(execute(a, &services, OutputFormat::Human).is_err());
}

#[test]
fn test_split_empty_file_is_ok() {
    let services = create_test_services();
    let file = write_text_file("");
    assert!(execute(args(&file), &services, OutputFormat::Json).is_ok());
}
