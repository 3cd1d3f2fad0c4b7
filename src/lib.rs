//! unusedresult - flag Go calls whose side-effect-free result is discarded
//!
//! This library implements the `unusedresult` vet-style check: a bare call
//! statement whose callee is configured as side-effect-free (pure
//! formatting, error construction, sort wrapping) is a bug, because the
//! call's entire purpose was the value that just got thrown away.
//!
//! # Architecture
//!
//! The analysis pipeline consists of:
//! 1. **File Discovery** - find the `.go` files to analyze
//! 2. **Parsing** - parse sources with tree-sitter and lower bare call
//!    statements into a small expression model
//! 3. **Resolution** - best-effort symbol tables: imports, declared types,
//!    method signatures
//! 4. **Classification** - decide conversion / method call / qualified
//!    function call per statement and match against the configured sets
//! 5. **Reporting** - output findings in various formats
//!
//! The classifier itself ([`analysis::check_stmt`]) only sees the expression
//! model and a [`resolve::Resolver`], so it can be driven by any host that
//! supplies resolved symbol information.

pub mod analysis;
pub mod config;
pub mod discovery;
pub mod parser;
pub mod report;
pub mod resolve;
pub mod syntax;

pub use analysis::{check_stmt, classify, Analyzer, CallKind, Finding, Severity};
pub use config::{ConfigError, UnusedResultConfig};
pub use discovery::FileFinder;
pub use report::{ReportFormat, Reporter};
pub use resolve::{Resolver, ResolutionTables};
