//! Decorator ("marker") matching.
//!
//! A marker is written either bare (`@CONST`) or as a call (`@CONST()`).
//! Only its name matters: arguments of the call form are never inspected.

use crate::ident::ident;
use tsdart_syntax::{NodeArena, NodeIndex, NodeList, SyntaxKind};

/// The two shapes a decorator expression can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker<'a> {
    /// `@NAME` or `@ns.NAME`
    Bare { name: NodeIndex },
    /// `@NAME(args)`
    Invocation {
        callee: NodeIndex,
        arguments: Option<&'a NodeList>,
    },
}

impl<'a> Marker<'a> {
    /// Classify a `Decorator` node. Returns `None` for any other node.
    pub fn from_decorator(arena: &'a NodeArena, decorator: NodeIndex) -> Option<Marker<'a>> {
        let node = arena.get(decorator)?;
        let expression = arena.get_decorator(node)?.expression;
        let expr_node = arena.get(expression)?;
        if expr_node.kind == SyntaxKind::CallExpression {
            let call = arena.get_call_expr(expr_node)?;
            Some(Marker::Invocation {
                callee: call.expression,
                arguments: call.arguments.as_ref(),
            })
        } else {
            Some(Marker::Bare { name: expression })
        }
    }

    /// Resolved dotted name of the marker, `None` if it is not a plain name.
    pub fn name(&self, arena: &NodeArena) -> Option<String> {
        match *self {
            Marker::Bare { name } => ident(arena, name),
            Marker::Invocation { callee, .. } => ident(arena, callee),
        }
    }
}

/// Whether any decorator in `modifiers` is named `name`, bare or called.
///
/// `modifiers` may also contain keyword tokens; those never match. An
/// absent list matches nothing.
pub fn has_annotation(arena: &NodeArena, modifiers: Option<&NodeList>, name: &str) -> bool {
    let Some(modifiers) = modifiers else {
        return false;
    };
    modifiers.iter().any(|&modifier| {
        Marker::from_decorator(arena, modifier)
            .and_then(|marker| marker.name(arena))
            .is_some_and(|marker_name| marker_name == name)
    })
}

/// Whether a class-like declaration is constant: the declaration itself
/// carries `@CONST`, or one of its constructors does.
pub fn is_const(arena: &NodeArena, decl: NodeIndex) -> bool {
    let Some(node) = arena.get(decl) else {
        return false;
    };
    let Some(class) = arena.get_class(node) else {
        return false;
    };
    if has_annotation(arena, class.modifiers.as_ref(), "CONST") {
        return true;
    }
    class.members.iter().any(|&member| {
        arena
            .get(member)
            .filter(|m| m.kind == SyntaxKind::Constructor)
            .and_then(|m| arena.get_constructor(m))
            .is_some_and(|ctor| has_annotation(arena, ctor.modifiers.as_ref(), "CONST"))
    })
}
