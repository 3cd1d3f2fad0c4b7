//! Unused-Result Check
//!
//! Flags bare call statements whose callee is configured as side-effect-free,
//! so discarding the result is almost certainly a mistake (calling
//! `fmt.Sprintf` for nothing, building an error with `errors.New` and
//! dropping it).
//!
//! ## Detection Algorithm
//!
//! 1. Unwrap parentheses around the statement expression; bail if it is not
//!    a call
//! 2. Unwrap parentheses around the callee; bail if it denotes a type
//!    (a conversion like `T(x)`, not a call)
//! 3. Require a selector callee (`base.Name`); bare unqualified calls are
//!    out of scope
//! 4. A selector resolved as a bound method value is checked against the
//!    `func() string` method list; anything else is resolved through the
//!    use table and checked against the qualified-function list
//!
//! Every branch either reports exactly one finding or takes no action; there
//! is no error path. Unknown calls are never flagged.

use crate::config::UnusedResultConfig;
use crate::resolve::{Resolver, Signature};
use crate::syntax::{unparen, Expr, ExprStmt, Pos};

use super::Finding;

/// What kind of call a bare statement turned out to be. Produced by
/// [`classify`], consumed by the reporting step in [`check_stmt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallKind {
    /// A type conversion syntactically resembling a call.
    Conversion,
    /// A selector resolved as a bound method value.
    Method {
        receiver: String,
        name: String,
        signature: Signature,
        lparen: Pos,
    },
    /// A package-qualified call to a package-level function.
    QualifiedFunction {
        package_path: String,
        name: String,
        lparen: Pos,
    },
    /// Not a call, not a selector call, or not resolvable. Never reported.
    Other,
}

/// Classify one bare expression statement. Pure with respect to program
/// state; the resolver is a read-only capability.
pub fn classify(stmt: &ExprStmt, resolver: &dyn Resolver) -> CallKind {
    let Expr::Call(call) = unparen(&stmt.expr) else {
        return CallKind::Other; // not a call statement
    };
    let fun = unparen(&call.fun);

    if resolver.is_type(fun) {
        return CallKind::Conversion; // a conversion, not a call
    }

    let Expr::Selector(selector) = fun else {
        return CallKind::Other; // neither a method call nor a qualified ident
    };

    if let Some(sel) = resolver.method_selection(selector) {
        // method (e.g. foo.String())
        return CallKind::Method {
            receiver: sel.receiver.clone(),
            name: sel.name.clone(),
            signature: sel.signature.clone(),
            lparen: call.lparen,
        };
    }

    // package-qualified function (e.g. fmt.Errorf)
    if let Some(obj) = resolver.use_of(&selector.sel) {
        return CallKind::QualifiedFunction {
            package_path: obj.package_path.clone(),
            name: obj.name.clone(),
            lparen: call.lparen,
        };
    }

    CallKind::Other
}

/// Decide whether a bare statement discards a must-use result. Returns at
/// most one finding, anchored at the call's opening parenthesis. `file` only
/// labels the finding; it plays no part in the decision.
pub fn check_stmt(
    stmt: &ExprStmt,
    resolver: &dyn Resolver,
    config: &UnusedResultConfig,
    file: &std::path::Path,
) -> Option<Finding> {
    match classify(stmt, resolver) {
        CallKind::Method {
            receiver,
            name,
            signature,
            lparen,
        } => {
            if signature != Signature::no_args_string_result() {
                return None;
            }
            if !config.is_unused_string_method(&name) {
                return None;
            }
            Some(Finding::new(
                file.to_path_buf(),
                lparen,
                format!("result of ({}).{} call not used", receiver, name),
            ))
        }
        CallKind::QualifiedFunction {
            package_path,
            name,
            lparen,
        } => {
            let qname = format!("{}.{}", package_path, name);
            if !config.is_unused_func(&qname) {
                return None;
            }
            Some(Finding::new(
                file.to_path_buf(),
                lparen,
                format!("result of {} call not used", qname),
            ))
        }
        CallKind::Conversion | CallKind::Other => None,
    }
}
