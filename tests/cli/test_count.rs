//! Count command tests

use crate::common::create_test_services;
use chunkview::cli::commands::count::{execute, CountArgs};
use chunkview::cli::OutputFormat;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_count_human_output() {
    let services = create_test_services();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"hello world").unwrap();

    let args = CountArgs {
        file: file.path().to_path_buf(),
    };
    assert!(execute(args, &services, OutputFormat::Human).is_ok());
}

#[test]
fn test_count_json_output() {
    let services = create_test_services();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all("multi-byte content: 中文 🎉".as_bytes()).unwrap();

    let args = CountArgs {
        file: file.path().to_path_buf(),
    };
    assert!(execute(args, &services, OutputFormat::Json).is_ok());
}

#[test]
fn test_count_missing_file_fails() {
    let services = create_test_services();
    let args = CountArgs {
        file: "/nonexistent/input.txt".into(),
    };
    assert!(execute(args, &services, OutputFormat::Human).is_err());
}
