//! Symbol resolution capability consumed by the classifier
//!
//! The check never resolves anything itself; it asks a [`Resolver`] three
//! questions: does this callee denote a type, does this selector denote a
//! bound method value, and does this identifier use refer to a package-level
//! function. [`ResolutionTables`] is the HashMap-backed implementation the
//! driver populates; tests populate it by hand.

use std::collections::{HashMap, HashSet};

use crate::syntax::{Expr, Ident, NodeId, SelectorExpr};

/// Go type identity, as far as the signature check needs it. Comparison is
/// exact: `GoType::String` is the builtin `string` and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoType {
    /// The builtin `string` type.
    String,
    /// Any other named type, by its declared spelling.
    Named(String),
}

impl GoType {
    /// Parse a declared type spelling. Only the builtin `string` gets its own
    /// variant; every other spelling (including `*T` and `mypkg.T`) stays an
    /// opaque name.
    pub fn from_spelling(s: &str) -> Self {
        if s == "string" {
            GoType::String
        } else {
            GoType::Named(s.to_string())
        }
    }
}

impl std::fmt::Display for GoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoType::String => write!(f, "string"),
            GoType::Named(n) => write!(f, "{}", n),
        }
    }
}

/// A function or method signature, reduced to parameter and result types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub params: Vec<GoType>,
    pub results: Vec<GoType>,
}

impl Signature {
    pub fn new(params: Vec<GoType>, results: Vec<GoType>) -> Self {
        Self { params, results }
    }

    /// The fixed reference shape `func() string`. A method only qualifies for
    /// the string-method list when its signature equals this exactly.
    pub fn no_args_string_result() -> Self {
        Self {
            params: Vec::new(),
            results: vec![GoType::String],
        }
    }
}

/// A selector resolved as a bound method value on some receiver type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSelection {
    pub receiver: String,
    pub name: String,
    pub signature: Signature,
}

/// An identifier use resolved to a package-level function declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncObject {
    pub package_path: String,
    pub name: String,
}

impl FuncObject {
    /// Qualified name used as the allow-list addressing scheme.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.package_path, self.name)
    }
}

/// Read-only view of the host's resolved symbol and type information.
pub trait Resolver {
    /// Does this expression denote a type (making a call-shaped node a
    /// conversion)?
    fn is_type(&self, expr: &Expr) -> bool;

    /// The resolved-selector table: `Some` iff the selector denotes a bound
    /// method value.
    fn method_selection(&self, sel: &SelectorExpr) -> Option<&MethodSelection>;

    /// The identifier-use table: `Some` iff the use refers to a package-level
    /// function.
    fn use_of(&self, ident: &Ident) -> Option<&FuncObject>;
}

/// HashMap-backed [`Resolver`]. Populated once per file by the driver, then
/// read-only for the rest of that file's classification pass.
#[derive(Debug, Default)]
pub struct ResolutionTables {
    types: HashSet<NodeId>,
    selections: HashMap<NodeId, MethodSelection>,
    uses: HashMap<NodeId, FuncObject>,
}

impl ResolutionTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that this node denotes a type.
    pub fn mark_type(&mut self, id: NodeId) {
        self.types.insert(id);
    }

    /// Record a selector resolved as a bound method value.
    pub fn insert_selection(&mut self, id: NodeId, sel: MethodSelection) {
        self.selections.insert(id, sel);
    }

    /// Record an identifier use resolved to a package-level function.
    pub fn insert_use(&mut self, id: NodeId, obj: FuncObject) {
        self.uses.insert(id, obj);
    }
}

impl Resolver for ResolutionTables {
    fn is_type(&self, expr: &Expr) -> bool {
        match expr {
            Expr::Ident(i) => self.types.contains(&i.id),
            Expr::Selector(s) => self.types.contains(&s.id),
            _ => false,
        }
    }

    fn method_selection(&self, sel: &SelectorExpr) -> Option<&MethodSelection> {
        self.selections.get(&sel.id)
    }

    fn use_of(&self, ident: &Ident) -> Option<&FuncObject> {
        self.uses.get(&ident.id)
    }
}
