//! Package-level declaration scan
//!
//! Collects the facts the resolver needs before any statement is classified:
//! per-file import bindings, declared type names, and method declarations
//! with their signatures. All of it is readable straight off the CST;
//! no type inference happens here.

use std::collections::{HashMap, HashSet};

use tree_sitter::{Node, Tree};

use crate::resolve::{GoType, Signature};

use super::{node_text, walk_tree};

/// Go's predeclared type identifiers. A call whose callee is one of these is
/// always a conversion.
const BUILTIN_TYPES: &[&str] = &[
    "bool", "byte", "complex64", "complex128", "error", "float32", "float64", "int", "int8",
    "int16", "int32", "int64", "rune", "string", "uint", "uint8", "uint16", "uint32", "uint64",
    "uintptr", "any",
];

/// One method declaration: `func (r Recv) Name(params) results`.
#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub receiver: String,
    pub name: String,
    pub signature: Signature,
}

/// Import bindings of a single file: local package name to import path.
#[derive(Debug, Default)]
pub struct FileImports {
    by_name: HashMap<String, String>,
}

impl FileImports {
    /// Scan one file's import declarations.
    pub fn scan(tree: &Tree, source: &str) -> Self {
        let mut imports = Self::default();
        walk_tree(tree.root_node(), &mut |node| {
            if node.kind() == "import_spec" {
                imports.add_spec(node, source);
            }
        });
        imports
    }

    fn add_spec(&mut self, spec: Node<'_>, source: &str) {
        let Some(path_node) = spec.child_by_field_name("path") else {
            return;
        };
        let path = node_text(path_node, source).trim_matches(|c| c == '"' || c == '`');
        if path.is_empty() {
            return;
        }
        let local = match spec.child_by_field_name("name") {
            // Blank and dot imports bind no usable package name.
            Some(name) if matches!(node_text(name, source), "_" | ".") => return,
            Some(name) => node_text(name, source).to_string(),
            None => path.rsplit('/').next().unwrap_or(path).to_string(),
        };
        self.by_name.insert(local, path.to_string());
    }

    /// Import path bound to this local package name, if any.
    pub fn path_of(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Declarations visible across the analyzed package: type names and methods.
#[derive(Debug, Default)]
pub struct PackageIndex {
    types: HashSet<String>,
    methods: HashMap<String, Vec<MethodDecl>>,
}

impl PackageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one file's declarations into the index.
    pub fn add_file(&mut self, tree: &Tree, source: &str) {
        walk_tree(tree.root_node(), &mut |node| match node.kind() {
            "type_spec" | "type_alias" => {
                if let Some(name) = node.child_by_field_name("name") {
                    self.types.insert(node_text(name, source).to_string());
                }
            }
            "method_declaration" => {
                if let Some(method) = scan_method(node, source) {
                    self.methods.entry(method.name.clone()).or_default().push(method);
                }
            }
            _ => {}
        });
    }

    /// Does this name denote a type: declared in the package or predeclared?
    pub fn is_type_name(&self, name: &str) -> bool {
        BUILTIN_TYPES.contains(&name) || self.types.contains(name)
    }

    /// The method this name unambiguously denotes. Without full type
    /// information the receiver of a selector is unknown, so name lookup is
    /// the best-effort stand-in — and it must stay conservative: when two
    /// types declare same-named methods with different receivers or
    /// signatures, the name resolves to nothing and the caller falls back to
    /// its "no action" default. Otherwise a call on the wrongly-shaped
    /// method would inherit another type's signature and get misreported.
    pub fn method_named(&self, name: &str) -> Option<&MethodDecl> {
        let decls = self.methods.get(name)?;
        let (first, rest) = decls.split_first()?;
        if rest
            .iter()
            .all(|m| m.receiver == first.receiver && m.signature == first.signature)
        {
            Some(first)
        } else {
            None
        }
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn method_count(&self) -> usize {
        self.methods.values().map(Vec::len).sum()
    }
}

fn scan_method(node: Node<'_>, source: &str) -> Option<MethodDecl> {
    let name = node_text(node.child_by_field_name("name")?, source).to_string();
    let receiver = receiver_type(node.child_by_field_name("receiver")?, source)?;
    let params = node
        .child_by_field_name("parameters")
        .map(|p| param_types(p, source))
        .unwrap_or_default();
    let results = match node.child_by_field_name("result") {
        Some(result) if result.kind() == "parameter_list" => param_types(result, source),
        Some(result) => vec![GoType::from_spelling(node_text(result, source))],
        None => Vec::new(),
    };
    Some(MethodDecl {
        receiver,
        name,
        signature: Signature::new(params, results),
    })
}

/// Receiver type spelling with any pointer stripped: `*Pizza` and `Pizza`
/// both index as `Pizza`.
fn receiver_type(receiver: Node<'_>, source: &str) -> Option<String> {
    let mut cursor = receiver.walk();
    let decl = receiver
        .named_children(&mut cursor)
        .find(|c| c.kind() == "parameter_declaration")?;
    let ty = decl.child_by_field_name("type")?;
    Some(node_text(ty, source).trim_start_matches('*').to_string())
}

/// Flatten a parameter list into one type per declared parameter. A grouped
/// declaration (`a, b string`) contributes one entry per name.
fn param_types(list: Node<'_>, source: &str) -> Vec<GoType> {
    let mut types = Vec::new();
    let mut cursor = list.walk();
    for decl in list.named_children(&mut cursor) {
        match decl.kind() {
            "parameter_declaration" => {
                let Some(ty) = decl.child_by_field_name("type") else {
                    continue;
                };
                let ty = GoType::from_spelling(node_text(ty, source));
                let names = decl.children_by_field_name("name", &mut decl.walk()).count();
                for _ in 0..names.max(1) {
                    types.push(ty.clone());
                }
            }
            "variadic_parameter_declaration" => {
                if let Some(ty) = decl.child_by_field_name("type") {
                    types.push(GoType::Named(format!("...{}", node_text(ty, source))));
                }
            }
            _ => {}
        }
    }
    types
}
