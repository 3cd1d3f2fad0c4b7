//! Centralized color scheme for consistent output formatting

use colored::{ColoredString, Colorize};

use crate::analysis::Severity;

/// Structural element colors
pub struct StructureColors;

impl StructureColors {
    /// File path header
    pub fn file_path(text: &str) -> ColoredString {
        text.cyan().bold()
    }

    /// Line/column numbers
    pub fn location(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Rule code (e.g., UR001)
    pub fn rule_code(text: &str) -> ColoredString {
        text.magenta()
    }

    /// Count/statistics numbers
    pub fn count(text: &str) -> ColoredString {
        text.white().bold()
    }
}

/// Severity symbols for compact display
pub struct SeveritySymbol;

impl SeveritySymbol {
    pub fn colored(severity: &Severity) -> ColoredString {
        match severity {
            Severity::Error => "✖".red().bold(),
            Severity::Warning => "⚠".yellow(),
            Severity::Info => "ℹ".blue(),
        }
    }
}

/// Box drawing characters for summary separators
pub struct BoxChars;

impl BoxChars {
    /// Heavy separator line
    pub fn heavy_line(width: usize) -> String {
        "━".repeat(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heavy_line() {
        assert_eq!(BoxChars::heavy_line(5), "━━━━━");
    }
}
