//! Go source discovery
//!
//! Walks a project directory for `.go` files, honoring ignore files and
//! skipping `vendor/` trees. Results come back sorted so analysis order is
//! stable across runs.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

/// Finds the `.go` files to analyze.
pub struct FileFinder {
    include_tests: bool,
}

impl FileFinder {
    pub fn new() -> Self {
        Self {
            include_tests: true,
        }
    }

    /// Skip `_test.go` files.
    pub fn without_tests(mut self) -> Self {
        self.include_tests = false;
        self
    }

    pub fn find_files(&self, root: &Path) -> Vec<PathBuf> {
        if root.is_file() {
            return if self.wants(root) {
                vec![root.to_path_buf()]
            } else {
                Vec::new()
            };
        }

        let mut files: Vec<PathBuf> = WalkBuilder::new(root)
            .hidden(true)
            .filter_entry(|entry| entry.file_name() != std::ffi::OsStr::new("vendor"))
            .build()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
            .map(|entry| entry.into_path())
            .filter(|path| self.wants(path))
            .collect();
        files.sort();
        debug!(count = files.len(), root = %root.display(), "discovered Go files");
        files
    }

    fn wants(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        if !name.ends_with(".go") {
            return false;
        }
        self.include_tests || !name.ends_with("_test.go")
    }
}

impl Default for FileFinder {
    fn default() -> Self {
        Self::new()
    }
}
