//! Tests for the lookup command

use crate::cli::test_helpers::{create_cli_test_services, create_test_tree};
use gramdex::cli::commands::lookup::{execute, LookupArgs};
use gramdex::cli::OutputFormat;

fn args(gram: &str, path: std::path::PathBuf) -> LookupArgs {
    LookupArgs {
        gram: gram.to_string(),
        path,
        limit: None,
        stop_chars: None,
        count_only: false,
    }
}

#[test]
fn test_lookup_command_hit() {
    let tree = create_test_tree(&["report.txt", "notes.md"]);
    let services = create_cli_test_services();

    let result = execute(
        args("report", tree.path().to_path_buf()),
        &services,
        OutputFormat::Json,
    );

    assert!(result.is_ok());
}

#[test]
fn test_lookup_command_miss_is_ok() {
    let tree = create_test_tree(&["report.txt"]);
    let services = create_cli_test_services();

    let result = execute(
        args("zzzz", tree.path().to_path_buf()),
        &services,
        OutputFormat::Human,
    );

    assert!(result.is_ok());
}

#[test]
fn test_lookup_command_empty_gram_fails() {
    let tree = create_test_tree(&["report.txt"]);
    let services = create_cli_test_services();

    let result = execute(
        args("", tree.path().to_path_buf()),
        &services,
        OutputFormat::Json,
    );

    assert!(result.is_err());
}

#[test]
fn test_lookup_command_missing_path_fails() {
    let tree = create_test_tree(&[]);
    let services = create_cli_test_services();

    let result = execute(
        args("a", tree.path().join("gone")),
        &services,
        OutputFormat::Json,
    );

    assert!(result.is_err());
}

#[test]
fn test_lookup_command_with_limit_and_count_only() {
    let tree = create_test_tree(&["aa.txt", "a.txt", "ab.txt"]);
    let services = create_cli_test_services();

    let mut lookup_args = args("a", tree.path().to_path_buf());
    lookup_args.limit = Some(1);
    lookup_args.count_only = true;

    let result = execute(lookup_args, &services, OutputFormat::Human);

    assert!(result.is_ok());
}
