//! CLI test helpers
//!
//! Provides utilities for testing CLI commands including:
//! - Test tree creation with specific file names
//! - Arc<Services> wrappers matching CLI execute() signatures

use gramdex::core::config::Config;
use gramdex::core::services::Services;
use std::sync::Arc;
use tempfile::TempDir;

/// Create test services wrapped in Arc (matching CLI execute() signatures)
pub fn create_cli_test_services() -> Arc<Services> {
    Arc::new(Services::new(Config::default()))
}

/// Create a test tree with the specified file names
///
/// # Arguments
/// * `files` - Slice of relative paths; contents are irrelevant to
///   filename indexing, so files are created empty
///
/// # Returns
/// TempDir containing the test tree (keep alive during test)
pub fn create_test_tree(files: &[&str]) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    for path in files {
        let full_path = temp.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, "").expect("Failed to write file");
    }
    temp
}
