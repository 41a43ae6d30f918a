// Test fixtures for integration testing

use std::path::PathBuf;
use tempfile::TempDir;

/// Test directory-tree fixture for creating synthetic filename data.
///
/// File contents are irrelevant to gramdex (names only), so every
/// file is created empty.
#[allow(dead_code)] // Used in integration tests
pub struct TestRepo {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

impl TestRepo {
    /// Create a small mixed tree (10 files)
    #[allow(dead_code)] // Used in integration tests
    pub fn small() -> Self {
        Self::with_files(&[
            "src/main.rs",
            "src/lib.rs",
            "src/utils.rs",
            "README.md",
            "Cargo.toml",
            "src/auth.rs",
            "src/db.rs",
            "tests/test_main.rs",
            "docs/api.md",
            "LICENSE",
        ])
    }

    /// Create with custom file names
    #[allow(dead_code)] // Used in integration tests
    pub fn with_files(files: &[&str]) -> Self {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();

        for path in files {
            let full_path = dir.path().join(path);
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(&full_path, "").unwrap();
            paths.push(full_path);
        }

        Self { dir, files: paths }
    }

    /// Root path of the fixture tree
    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }
}
