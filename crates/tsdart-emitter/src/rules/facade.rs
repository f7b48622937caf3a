//! Collection facade: rewrites `Array` and `Map` operations onto the Dart
//! `List` and `Map` APIs.
//!
//! Only calls whose method name appears in the rewrite table consult the
//! type checker. A receiver whose type is unknown, or not the table's type
//! for that method, falls back to the generic call translation.

use super::require;
use crate::error::Result;
use crate::transpiler::Transpiler;
use tracing::trace;
use tsdart_syntax::{NodeIndex, NodeList, SyntaxKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rewrite {
    /// `recv.name<T>(args)`
    Rename(&'static str),
    /// `recv [ key ] = value`
    IndexSet,
    /// `recv [ key ]`
    IndexGet,
}

/// Rewrite for `method` on a receiver of nominal type `receiver_type`.
fn rewrite_for(receiver_type: &str, method: &str) -> Option<Rewrite> {
    match (receiver_type, method) {
        ("Array", "push") => Some(Rewrite::Rename("add")),
        ("Map", "set") => Some(Rewrite::IndexSet),
        ("Map", "get") => Some(Rewrite::IndexGet),
        ("Map", "has") => Some(Rewrite::Rename("containsKey")),
        ("Map", "delete") => Some(Rewrite::Rename("remove")),
        _ => None,
    }
}

fn is_facade_method(method: &str) -> bool {
    matches!(method, "push" | "set" | "get" | "has" | "delete")
}

/// Rewrites consulted by the call and `new` translations.
pub struct FacadeConverter;

impl FacadeConverter {
    /// Translate a `recv.method(args)` call through the facade. Returns
    /// `Ok(false)` without emitting anything when the call is not a
    /// collection operation.
    pub fn maybe_visit_call(&self, t: &mut Transpiler<'_>, idx: NodeIndex) -> Result<bool> {
        let arena = t.arena();
        let node = t.node(idx)?;
        let call = require(t, idx, arena.get_call_expr(node))?;

        let callee = t.node(call.expression)?;
        if callee.kind != SyntaxKind::PropertyAccessExpression {
            return Ok(false);
        }
        let access = require(t, call.expression, arena.get_access_expr(callee))?;
        let Some(method) = arena.identifier_text(access.name_or_argument) else {
            return Ok(false);
        };
        if !is_facade_method(method) {
            return Ok(false);
        }

        let receiver = access.expression;
        let Some(receiver_type) = t.type_checker()?.type_name_of(arena, receiver) else {
            trace!(method, "receiver type unknown");
            return Ok(false);
        };
        let Some(rewrite) = rewrite_for(&receiver_type, method) else {
            return Ok(false);
        };
        trace!(receiver_type = %receiver_type, method, ?rewrite, "collection facade");

        let empty = NodeList::default();
        let args = call.arguments.as_ref().unwrap_or(&empty);
        match rewrite {
            Rewrite::Rename(name) => {
                t.visit(receiver)?;
                t.emit(".");
                t.emit(name);
                t.maybe_visit_type_arguments(call.type_arguments.as_ref())?;
                t.emit("(");
                t.visit_list(args)?;
                t.emit(")");
            }
            Rewrite::IndexSet => {
                let &[key, value] = args.nodes.as_slice() else {
                    t.report_error(idx, &format!("{receiver_type}.{method} expects 2 arguments"));
                    return Ok(false);
                };
                t.visit(receiver)?;
                t.emit("[");
                t.visit(key)?;
                t.emit("]");
                t.emit("=");
                t.visit(value)?;
            }
            Rewrite::IndexGet => {
                let &[key] = args.nodes.as_slice() else {
                    t.report_error(idx, &format!("{receiver_type}.{method} expects 1 argument"));
                    return Ok(false);
                };
                t.visit(receiver)?;
                t.emit("[");
                t.visit(key)?;
                t.emit("]");
            }
        }
        Ok(true)
    }

    /// `new Map()` and `new Array()` with no arguments become empty
    /// collection literals.
    pub fn maybe_visit_new(&self, t: &mut Transpiler<'_>, idx: NodeIndex) -> Result<bool> {
        let arena = t.arena();
        let node = t.node(idx)?;
        let call = require(t, idx, arena.get_call_expr(node))?;
        if call.arguments.as_ref().is_some_and(|args| !args.is_empty()) {
            return Ok(false);
        }
        match arena.identifier_text(call.expression) {
            Some("Map") => {
                t.emit("{");
                t.emit("}");
                Ok(true)
            }
            Some("Array") => {
                t.emit("[");
                t.emit("]");
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
