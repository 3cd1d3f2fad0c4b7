//! Analysis driver
//!
//! Owns the host side of the check: load and parse files, scan package
//! declarations, then classify each file's bare call statements in document
//! order. Strictly sequential; the configured sets are the only shared
//! state and they are read-only by the time classification starts.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use tree_sitter::Tree;

use crate::config::UnusedResultConfig;
use crate::parser::{FileImports, GoParser, Lowerer, PackageIndex, ParseError};

use super::{check_stmt, Finding};

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

struct LoadedFile {
    path: PathBuf,
    source: String,
    tree: Tree,
}

/// Two-phase analyzer: feed it files with [`Analyzer::add_file`], then call
/// [`Analyzer::run`] once. Files are checked in the order they were added.
pub struct Analyzer {
    parser: GoParser,
    files: Vec<LoadedFile>,
}

impl Analyzer {
    pub fn new() -> Result<Self, AnalyzeError> {
        Ok(Self {
            parser: GoParser::new()?,
            files: Vec::new(),
        })
    }

    /// Read and parse one `.go` file.
    pub fn add_file(&mut self, path: &Path) -> Result<(), AnalyzeError> {
        let source = std::fs::read_to_string(path).map_err(|source| AnalyzeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.add_source(path, source)
    }

    /// Add a file from an in-memory source (used by tests).
    pub fn add_source(&mut self, path: &Path, source: String) -> Result<(), AnalyzeError> {
        let tree = self.parser.parse(&source, &path.display().to_string())?;
        self.files.push(LoadedFile {
            path: path.to_path_buf(),
            source,
            tree,
        });
        Ok(())
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Classify every bare call statement in every loaded file.
    pub fn run(&self, config: &UnusedResultConfig) -> Vec<Finding> {
        // Phase 1: declarations across all loaded files.
        let mut index = PackageIndex::new();
        for file in &self.files {
            index.add_file(&file.tree, &file.source);
        }
        debug!(
            types = index.type_count(),
            methods = index.method_count(),
            "declaration scan complete"
        );

        // Phase 2: lower, resolve and check each file in document order.
        let mut findings = Vec::new();
        for file in &self.files {
            let imports = FileImports::scan(&file.tree, &file.source);
            let mut lowerer = Lowerer::new(&file.source, &imports, &index);
            let stmts = lowerer.lower_file(&file.tree);
            let tables = lowerer.finish();
            debug!(file = %file.path.display(), stmts = stmts.len(), "checking");
            for stmt in &stmts {
                if let Some(finding) = check_stmt(stmt, &tables, config, &file.path) {
                    findings.push(finding);
                }
            }
        }
        findings
    }
}
