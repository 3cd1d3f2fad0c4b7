//! Lightweight Go expression model for bare call statements
//!
//! Only the shapes the unused-result check cares about are represented:
//! parenthesized expressions, calls, selectors (`base.Name`) and identifiers.
//! Everything else collapses into [`Expr::Other`], which the classifier
//! ignores. Nodes carry a [`NodeId`] so the resolution tables can attach
//! symbol information without owning the tree.

/// 1-based source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pos {
    pub line: usize,
    pub column: usize,
}

impl Pos {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Opaque key tying an expression node to resolution-table entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// Monotonic [`NodeId`] source, one per analyzed file.
#[derive(Debug, Default)]
pub struct NodeIdGen {
    next: u32,
}

impl NodeIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }
}

/// An identifier use.
#[derive(Debug, Clone)]
pub struct Ident {
    pub id: NodeId,
    pub name: String,
    pub pos: Pos,
}

/// A selector expression: `<base>.<sel>`. Covers both method calls and
/// package-qualified identifiers; which one it is falls out of resolution.
#[derive(Debug, Clone)]
pub struct SelectorExpr {
    pub id: NodeId,
    pub base: Box<Expr>,
    pub sel: Ident,
}

/// A call expression. The opening-parenthesis position anchors diagnostics;
/// arguments are counted but never inspected.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub fun: Box<Expr>,
    pub lparen: Pos,
    pub args: usize,
}

#[derive(Debug, Clone)]
pub enum Expr {
    Paren(Box<Expr>),
    Call(CallExpr),
    Selector(SelectorExpr),
    Ident(Ident),
    /// Any expression form the check does not look inside.
    Other,
}

/// A call expression used as an entire statement. The host traversal only
/// routes these to the check, so a statement reaching the classifier is
/// already known to consume nothing.
#[derive(Debug, Clone)]
pub struct ExprStmt {
    pub expr: Expr,
}

/// Strip any number of enclosing parentheses.
pub fn unparen(expr: &Expr) -> &Expr {
    let mut e = expr;
    while let Expr::Paren(inner) = e {
        e = inner;
    }
    e
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(gen: &mut NodeIdGen, name: &str) -> Expr {
        Expr::Ident(Ident {
            id: gen.next(),
            name: name.to_string(),
            pos: Pos::new(1, 1),
        })
    }

    #[test]
    fn test_unparen_strips_nesting() {
        let mut gen = NodeIdGen::new();
        let inner = ident(&mut gen, "x");
        let wrapped = Expr::Paren(Box::new(Expr::Paren(Box::new(inner))));
        match unparen(&wrapped) {
            Expr::Ident(i) => assert_eq!(i.name, "x"),
            other => panic!("expected ident, got {:?}", other),
        }
    }

    #[test]
    fn test_unparen_noop_on_bare_expr() {
        let mut gen = NodeIdGen::new();
        let e = ident(&mut gen, "y");
        assert!(matches!(unparen(&e), Expr::Ident(i) if i.name == "y"));
    }

    #[test]
    fn test_node_ids_are_unique() {
        let mut gen = NodeIdGen::new();
        let a = gen.next();
        let b = gen.next();
        assert_ne!(a, b);
    }
}
