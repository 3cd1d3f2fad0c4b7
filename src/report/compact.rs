//! Compact reporter - one line per finding
//!
//! `file:line:col: message` output, the shape vet-style drivers print and
//! editors know how to jump through.

use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::analysis::Finding;
use crate::report::colors::{BoxChars, StructureColors};

/// Compact reporter for minimal, scannable output
pub struct CompactReporter {
    /// Base path to strip from file paths for shorter display
    base_path: Option<PathBuf>,
}

impl CompactReporter {
    pub fn new() -> Self {
        Self { base_path: None }
    }

    pub fn with_base_path(mut self, path: PathBuf) -> Self {
        self.base_path = Some(path);
        self
    }

    fn format_path(&self, path: &Path) -> String {
        match &self.base_path {
            Some(base) => path.strip_prefix(base).unwrap_or(path).display().to_string(),
            None => path.display().to_string(),
        }
    }

    pub fn report(&self, findings: &[Finding]) {
        if findings.is_empty() {
            println!("{}", "No unused results found!".green().bold());
            return;
        }

        for finding in findings {
            println!(
                "{}:{}:{}: {} {}",
                self.format_path(&finding.file),
                finding.line,
                finding.column,
                StructureColors::rule_code(finding.rule),
                finding.message
            );
        }

        println!("{}", BoxChars::heavy_line(50).dimmed());
        println!(
            "  {} {}",
            StructureColors::count(&findings.len().to_string()),
            "unused results".bold()
        );
    }
}

impl Default for CompactReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path_stripping() {
        let reporter = CompactReporter::new().with_base_path(PathBuf::from("/proj"));
        assert_eq!(reporter.format_path(Path::new("/proj/pkg/a.go")), "pkg/a.go");
        assert_eq!(reporter.format_path(Path::new("/other/b.go")), "/other/b.go");
    }
}
