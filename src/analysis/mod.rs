mod driver;
mod unused_result;

pub use driver::{AnalyzeError, Analyzer};
pub use unused_result::{check_stmt, classify, CallKind};

use std::path::PathBuf;

use serde::Serialize;

use crate::syntax::Pos;

/// Rule code for the unused-result check.
pub const RULE_CODE: &str = "UR001";

/// Severity levels for findings. The unused-result check reports everything
/// as a warning; the allow-list carries no graded severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One flagged call: a position and a formatted message. Ownership passes to
/// the reporting sink as soon as classification produces it.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
    pub severity: Severity,
    pub rule: &'static str,
    pub message: String,
}

impl Finding {
    pub fn new(file: PathBuf, pos: Pos, message: String) -> Self {
        Self {
            file,
            line: pos.line,
            column: pos.column,
            severity: Severity::Warning,
            rule: RULE_CODE,
            message,
        }
    }
}
