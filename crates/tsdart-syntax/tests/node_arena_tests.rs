//! Tests for arena construction, parent links and typed access.

use tsdart_syntax::node::*;
use tsdart_syntax::{NodeArena, NodeFlags, NodeIndex, NodeList, SyntaxKind};

fn ident(arena: &mut NodeArena, text: &str, pos: u32) -> NodeIndex {
    arena.add_identifier(
        pos,
        pos + text.len() as u32,
        IdentifierData {
            escaped_text: text.to_string(),
        },
    )
}

#[test]
fn test_qualified_name_sets_parents() {
    let mut arena = NodeArena::new();
    let a = ident(&mut arena, "a", 0);
    let b = ident(&mut arena, "b", 2);
    let ab = arena.add_qualified_name(0, 3, QualifiedNameData { left: a, right: b });

    assert_eq!(arena.parent(a), ab);
    assert_eq!(arena.parent(b), ab);
    assert!(arena.parent(ab).is_none());

    let node = arena.get(ab).unwrap();
    let data = arena.get_qualified_name(node).unwrap();
    assert_eq!(data.left, a);
    assert_eq!(data.right, b);
}

#[test]
fn test_typed_getters_check_kind() {
    let mut arena = NodeArena::new();
    let x = ident(&mut arena, "x", 0);
    let node = *arena.get(x).unwrap();

    assert!(arena.get_identifier(&node).is_some());
    assert!(arena.get_literal(&node).is_none());
    assert!(arena.get_call_expr(&node).is_none());
    assert_eq!(arena.identifier_text(x), Some("x"));
}

#[test]
fn test_out_of_range_and_none_indices() {
    let arena = NodeArena::new();
    assert!(arena.get(NodeIndex::NONE).is_none());
    assert!(arena.get(NodeIndex(42)).is_none());
    assert!(arena.parent(NodeIndex(42)).is_none());
    assert!(arena.identifier_text(NodeIndex::NONE).is_none());
}

#[test]
fn test_call_and_new_share_pool() {
    let mut arena = NodeArena::new();
    let callee = ident(&mut arena, "Map", 4);
    let new_expr = arena.add_call_expr(
        SyntaxKind::NewExpression,
        0,
        9,
        CallExprData {
            expression: callee,
            type_arguments: None,
            arguments: Some(NodeList::default()),
        },
    );
    let node = arena.get(new_expr).unwrap();
    assert_eq!(node.kind, SyntaxKind::NewExpression);
    assert!(arena.get_call_expr(node).is_some());
    assert_eq!(arena.parent(callee), new_expr);
}

#[test]
fn test_declaration_list_flags_and_modifiers() {
    let mut arena = NodeArena::new();
    let name = ident(&mut arena, "x", 6);
    let decl = arena.add_variable_declaration(
        6,
        7,
        VariableDeclarationData {
            name,
            type_annotation: NodeIndex::NONE,
            initializer: NodeIndex::NONE,
        },
    );
    let list = arena.add_variable_declaration_list(
        0,
        7,
        NodeFlags::CONST,
        VariableDeclarationListData {
            declarations: NodeList::new(vec![decl]),
        },
    );
    let export = arena.add_token(SyntaxKind::ExportKeyword, 0, 6);
    let stmt = arena.add_variable(
        0,
        8,
        VariableData {
            modifiers: Some(NodeList::new(vec![export])),
            declaration_list: list,
        },
    );

    assert!(arena.get(list).unwrap().flags.contains(NodeFlags::CONST));
    assert_eq!(arena.parent(decl), list);
    assert_eq!(arena.parent(list), stmt);
    assert_eq!(arena.parent(export), stmt);

    let stmt_node = arena.get(stmt).unwrap();
    let modifiers = arena.get_modifiers(stmt_node).unwrap();
    assert_eq!(modifiers.nodes, vec![export]);
}

#[test]
fn test_set_flags_during_construction() {
    let mut arena = NodeArena::new();
    let p = ident(&mut arena, "p", 0);
    let param = arena.add_parameter(
        0,
        1,
        ParameterData {
            modifiers: None,
            name: p,
            type_annotation: NodeIndex::NONE,
            initializer: NodeIndex::NONE,
        },
    );
    arena.set_flags(param, NodeFlags::OPTIONAL);
    assert_eq!(arena.get(param).unwrap().flags, NodeFlags::OPTIONAL);
}

#[test]
fn test_iter_in_creation_order() {
    let mut arena = NodeArena::with_capacity(4);
    let a = ident(&mut arena, "a", 0);
    let b = ident(&mut arena, "b", 1);
    let collected: Vec<NodeIndex> = arena.iter().map(|(idx, _)| idx).collect();
    assert_eq!(collected, vec![a, b]);
    assert_eq!(arena.len(), 2);
    assert!(!arena.is_empty());
}
