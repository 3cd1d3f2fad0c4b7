//! JSON reporter for machine consumption

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::analysis::Finding;

#[derive(Serialize)]
struct JsonReport<'a> {
    tool: &'static str,
    version: &'static str,
    findings: &'a [Finding],
}

/// JSON reporter, to stdout or a file
pub struct JsonReporter {
    output_path: Option<PathBuf>,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report(&self, findings: &[Finding]) -> Result<()> {
        let report = JsonReport {
            tool: "unusedresult",
            version: env!("CARGO_PKG_VERSION"),
            findings,
        };
        let body = serde_json::to_string_pretty(&report).into_diagnostic()?;
        match &self.output_path {
            Some(path) => std::fs::write(path, body).into_diagnostic()?,
            None => println!("{}", body),
        }
        Ok(())
    }
}
