//! Show-config command tests

use crate::common::create_test_services;
use chunkview::cli::commands::config::{execute, ConfigArgs};
use chunkview::cli::OutputFormat;

#[test]
fn test_show_config_human_output() {
    let services = create_test_services();
    let args = ConfigArgs { path: false };
    assert!(execute(args, &services, OutputFormat::Human).is_ok());
}

#[test]
fn test_show_config_json_output() {
    let services = create_test_services();
    let args = ConfigArgs { path: false };
    assert!(execute(args, &services, OutputFormat::Json).is_ok());
}

#[test]
fn test_show_config_path_only() {
    let services = create_test_services();
    let args = ConfigArgs { path: true };
    assert!(execute(args, &services, OutputFormat::Human).is_ok());
}
