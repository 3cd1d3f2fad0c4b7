//! Go parsing via tree-sitter
//!
//! The check itself never touches tree-sitter; this module turns a `.go`
//! source into the lightweight [`crate::syntax`] model plus populated
//! [`crate::resolve::ResolutionTables`]. Declaration scanning
//! ([`decls`]) runs over the whole package first, then lowering
//! ([`lower`]) walks each file's bare expression statements.

mod decls;
mod lower;

pub use decls::{FileImports, MethodDecl, PackageIndex};
pub use lower::Lowerer;

use thiserror::Error;
use tree_sitter::{Node, Parser, Tree};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to load Go grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("tree-sitter returned no tree for {file}")]
    NoTree { file: String },
}

/// Thin wrapper around a tree-sitter parser configured for Go.
pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_go::language())?;
        Ok(Self { parser })
    }

    pub fn parse(&mut self, source: &str, file: &str) -> Result<Tree, ParseError> {
        self.parser
            .parse(source, None)
            .ok_or_else(|| ParseError::NoTree {
                file: file.to_string(),
            })
    }
}

/// Depth-first walk invoking `visit` on every node.
pub(crate) fn walk_tree<'t>(root: Node<'t>, visit: &mut dyn FnMut(Node<'t>)) {
    let mut cursor = root.walk();
    let mut done = false;
    while !done {
        visit(cursor.node());
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                done = true;
                break;
            }
        }
    }
}

/// UTF-8 text of a node. Sources are read as strings, so the slice is valid.
pub(crate) fn node_text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    &source[node.byte_range()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_minimal_file() {
        let mut parser = GoParser::new().unwrap();
        let tree = parser.parse("package main\n", "main.go").unwrap();
        assert_eq!(tree.root_node().kind(), "source_file");
    }

    #[test]
    fn test_walk_visits_expression_statements() {
        let mut parser = GoParser::new().unwrap();
        let src = "package main\nfunc f() {\n\tg()\n\th()\n}\n";
        let tree = parser.parse(src, "main.go").unwrap();
        let mut stmts = 0;
        walk_tree(tree.root_node(), &mut |node| {
            if node.kind() == "expression_statement" {
                stmts += 1;
            }
        });
        assert_eq!(stmts, 2);
    }
}
