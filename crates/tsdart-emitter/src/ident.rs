//! Flattening of (possibly dotted) name nodes into strings.

use tsdart_syntax::{NodeArena, NodeIndex, SyntaxKind};

/// Canonical dotted text of a name node.
///
/// An `Identifier` yields its text and a `QualifiedName` yields
/// `left.right`, resolving the left side recursively. Any other shape, or a
/// qualified name whose left side does not resolve, yields `None`: callers
/// treat that as "not a simple or qualified name", not as an error.
pub fn ident(arena: &NodeArena, idx: NodeIndex) -> Option<String> {
    let node = arena.get(idx)?;
    match node.kind {
        SyntaxKind::Identifier => arena
            .get_identifier(node)
            .map(|data| data.escaped_text.clone()),
        SyntaxKind::QualifiedName => {
            let qname = arena.get_qualified_name(node)?;
            let left = ident(arena, qname.left)?;
            let right = arena.identifier_text(qname.right)?;
            Some(format!("{left}.{right}"))
        }
        _ => None,
    }
}
