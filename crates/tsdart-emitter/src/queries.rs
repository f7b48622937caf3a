//! Parent-chain and flag queries over the syntax tree.

use tsdart_syntax::{Node, NodeArena, NodeFlags, NodeIndex, SyntaxKind};

/// Iterator over a node and its ancestors, innermost first.
///
/// Parent links are set once at construction and point strictly upwards, so
/// the walk visits each node at most once and stops at the root.
pub struct Ancestors<'a> {
    arena: &'a NodeArena,
    next: NodeIndex,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        let current = self.next;
        self.arena.get(current)?;
        self.next = self.arena.parent(current);
        Some(current)
    }
}

/// Walk from `idx` (inclusive) up to the root.
pub fn ancestors(arena: &NodeArena, idx: NodeIndex) -> Ancestors<'_> {
    Ancestors { arena, next: idx }
}

/// First node of `kind` on the chain starting at `idx` itself.
pub fn get_ancestor(arena: &NodeArena, idx: NodeIndex, kind: SyntaxKind) -> Option<NodeIndex> {
    ancestors(arena, idx).find(|&candidate| {
        arena
            .get(candidate)
            .is_some_and(|node| node.kind == kind)
    })
}

pub fn has_ancestor(arena: &NodeArena, idx: NodeIndex, kind: SyntaxKind) -> bool {
    get_ancestor(arena, idx, kind).is_some()
}

/// Whether `node` carries `flag`. An absent node has no flags.
pub fn has_flag(node: Option<&Node>, flag: NodeFlags) -> bool {
    node.is_some_and(|node| node.flags.intersects(flag))
}
