//! Terminal reporter with colored output, grouped by file

use std::collections::HashMap;
use std::path::PathBuf;

use colored::Colorize;

use crate::analysis::Finding;
use crate::report::colors::{SeveritySymbol, StructureColors};

/// Terminal reporter with colored output
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn report(&self, findings: &[Finding]) {
        if findings.is_empty() {
            println!("{}", "No unused results found!".green().bold());
            return;
        }

        // Group by file
        let mut by_file: HashMap<PathBuf, Vec<&Finding>> = HashMap::new();
        for finding in findings {
            by_file.entry(finding.file.clone()).or_default().push(finding);
        }

        println!();
        println!(
            "Found {} unused results:",
            StructureColors::count(&findings.len().to_string())
        );
        println!();

        let mut files: Vec<_> = by_file.keys().collect();
        files.sort();

        for file in files {
            println!("{}", StructureColors::file_path(&file.display().to_string()));

            let mut items = by_file[file].clone();
            items.sort_by_key(|f| (f.line, f.column));

            for finding in items {
                self.print_item(finding);
            }
            println!();
        }
    }

    fn print_item(&self, finding: &Finding) {
        let location = format!("{:>5}:{:<3}", finding.line, finding.column);
        println!(
            "  {} {} [{}] {}",
            StructureColors::location(&location),
            SeveritySymbol::colored(&finding.severity),
            StructureColors::rule_code(finding.rule),
            finding.message
        );
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}
