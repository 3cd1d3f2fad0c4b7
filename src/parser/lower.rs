//! CST lowering and best-effort resolution
//!
//! Turns every `expression_statement` node of a file into an
//! [`ExprStmt`] and, while walking, populates the resolution tables:
//! identifiers naming declared or predeclared types are marked as types,
//! selectors whose base is an imported package name resolve to package-level
//! functions, and remaining selectors resolve to package methods by name.

use tree_sitter::{Node, Tree};

use crate::resolve::{FuncObject, MethodSelection, ResolutionTables};
use crate::syntax::{CallExpr, Expr, ExprStmt, Ident, NodeIdGen, Pos, SelectorExpr};

use super::{node_text, walk_tree, FileImports, PackageIndex};

fn pos_of(node: Node<'_>) -> Pos {
    let p = node.start_position();
    Pos::new(p.row + 1, p.column + 1)
}

/// Per-file lowering pass. Consumed with [`Lowerer::finish`] once every
/// statement has been lowered; after that the tables are read-only.
pub struct Lowerer<'a> {
    source: &'a str,
    imports: &'a FileImports,
    index: &'a PackageIndex,
    ids: NodeIdGen,
    tables: ResolutionTables,
}

impl<'a> Lowerer<'a> {
    pub fn new(source: &'a str, imports: &'a FileImports, index: &'a PackageIndex) -> Self {
        Self {
            source,
            imports,
            index,
            ids: NodeIdGen::new(),
            tables: ResolutionTables::new(),
        }
    }

    /// Lower every bare expression statement in the file.
    pub fn lower_file(&mut self, tree: &Tree) -> Vec<ExprStmt> {
        let mut nodes = Vec::new();
        walk_tree(tree.root_node(), &mut |node| {
            if node.kind() == "expression_statement" {
                nodes.push(node);
            }
        });
        nodes
            .into_iter()
            .filter_map(|node| {
                let expr = node.named_child(0)?;
                Some(ExprStmt {
                    expr: self.lower_expr(expr),
                })
            })
            .collect()
    }

    pub fn finish(self) -> ResolutionTables {
        self.tables
    }

    fn lower_expr(&mut self, node: Node<'_>) -> Expr {
        match node.kind() {
            "parenthesized_expression" => match node.named_child(0) {
                Some(inner) => Expr::Paren(Box::new(self.lower_expr(inner))),
                None => Expr::Other,
            },
            "call_expression" => self.lower_call(node),
            "selector_expression" => self.lower_selector(node),
            "identifier" => Expr::Ident(self.lower_ident(node)),
            _ => Expr::Other,
        }
    }

    fn lower_call(&mut self, node: Node<'_>) -> Expr {
        let Some(fun) = node.child_by_field_name("function") else {
            return Expr::Other;
        };
        let arguments = node.child_by_field_name("arguments");
        // The opening parenthesis is where the argument list starts.
        let lparen = arguments.map(pos_of).unwrap_or_else(|| pos_of(node));
        let args = arguments.map(|a| a.named_child_count()).unwrap_or(0);
        Expr::Call(CallExpr {
            fun: Box::new(self.lower_expr(fun)),
            lparen,
            args,
        })
    }

    fn lower_selector(&mut self, node: Node<'_>) -> Expr {
        let (Some(operand), Some(field)) = (
            node.child_by_field_name("operand"),
            node.child_by_field_name("field"),
        ) else {
            return Expr::Other;
        };
        let base = self.lower_expr(operand);
        let sel = Ident {
            id: self.ids.next(),
            name: node_text(field, self.source).to_string(),
            pos: pos_of(field),
        };
        let selector = SelectorExpr {
            id: self.ids.next(),
            base: Box::new(base),
            sel,
        };
        self.resolve_selector(&selector);
        Expr::Selector(selector)
    }

    fn lower_ident(&mut self, node: Node<'_>) -> Ident {
        let ident = Ident {
            id: self.ids.next(),
            name: node_text(node, self.source).to_string(),
            pos: pos_of(node),
        };
        if self.index.is_type_name(&ident.name) {
            self.tables.mark_type(ident.id);
        }
        ident
    }

    /// Best-effort symbol resolution for one selector. An imported package
    /// name as the base makes it a qualified function use; otherwise a
    /// package method with the selector's name makes it a method selection.
    /// Everything else gets no entry, which the classifier treats as
    /// "take no action".
    fn resolve_selector(&mut self, selector: &SelectorExpr) {
        if let Expr::Ident(base) = crate::syntax::unparen(&selector.base) {
            if let Some(path) = self.imports.path_of(&base.name) {
                self.tables.insert_use(
                    selector.sel.id,
                    FuncObject {
                        package_path: path.to_string(),
                        name: selector.sel.name.clone(),
                    },
                );
                return;
            }
        }
        if let Some(method) = self.index.method_named(&selector.sel.name) {
            self.tables.insert_selection(
                selector.id,
                MethodSelection {
                    receiver: method.receiver.clone(),
                    name: method.name.clone(),
                    signature: method.signature.clone(),
                },
            );
        }
    }
}
