//! Type-resolution service consulted by the collection facade.
//!
//! Full type checking belongs to the front-end. The translator only needs
//! to know the nominal type name of a receiver expression, so the service
//! is a single query. [`DeclaredTypeChecker`] answers it from declarations
//! in the tree itself, which covers the common `var x: Map<K, V> = ...`,
//! `(m: Map<K, V>)` parameter and `this.field` shapes.

use crate::ident::ident;
use crate::queries::ancestors;
use tsdart_syntax::{NodeArena, NodeIndex, NodeList, SyntaxKind};
use tracing::trace;

pub trait TypeChecker {
    /// Nominal type name of the expression at `idx` (`"Array"`, `"Map"`,
    /// ...), or `None` when it cannot be determined.
    fn type_name_of(&self, arena: &NodeArena, idx: NodeIndex) -> Option<String>;
}

/// Resolves types from declared annotations and obvious initializers.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeclaredTypeChecker;

impl DeclaredTypeChecker {
    pub const fn new() -> Self {
        DeclaredTypeChecker
    }

    /// Declaration of `name` visible at `usage`, as its
    /// `(type_annotation, initializer)` pair.
    ///
    /// Walks outwards from `usage`. Each enclosing constructor or method
    /// contributes its parameters; each enclosing block or source file
    /// contributes the variable declarations of the statements up to the
    /// one containing `usage`, the last of them winning. The innermost
    /// scope that declares `name` decides, even when its type is unknown.
    fn find_binding(
        &self,
        arena: &NodeArena,
        usage: NodeIndex,
        name: &str,
    ) -> Option<(NodeIndex, NodeIndex)> {
        let mut child = usage;
        for scope in ancestors(arena, usage).skip(1) {
            let node = arena.get(scope)?;
            let found = match node.kind {
                SyntaxKind::Constructor => {
                    let params = &arena.get_constructor(node)?.parameters;
                    self.find_parameter(arena, params, name)
                }
                SyntaxKind::MethodDeclaration => {
                    let params = &arena.get_method_decl(node)?.parameters;
                    self.find_parameter(arena, params, name)
                }
                SyntaxKind::Block => {
                    let statements = &arena.get_block(node)?.statements;
                    self.find_variable(arena, statements, child, name)
                }
                SyntaxKind::SourceFile => {
                    let statements = &arena.get_source_file(node)?.statements;
                    self.find_variable(arena, statements, child, name)
                }
                _ => None,
            };
            if found.is_some() {
                return found;
            }
            child = scope;
        }
        None
    }

    fn find_parameter(
        &self,
        arena: &NodeArena,
        params: &NodeList,
        name: &str,
    ) -> Option<(NodeIndex, NodeIndex)> {
        params.iter().find_map(|&param| {
            let data = arena.get_parameter(arena.get(param)?)?;
            (arena.identifier_text(data.name) == Some(name))
                .then_some((data.type_annotation, data.initializer))
        })
    }

    /// Last declaration of `name` among `statements` up to and including
    /// `until`.
    fn find_variable(
        &self,
        arena: &NodeArena,
        statements: &NodeList,
        until: NodeIndex,
        name: &str,
    ) -> Option<(NodeIndex, NodeIndex)> {
        let end = statements.iter().position(|&stmt| stmt == until)?;
        statements.nodes[..=end].iter().rev().find_map(|&stmt| {
            let stmt = arena.get_variable(arena.get(stmt)?)?;
            let list = arena.get_variable_declaration_list(arena.get(stmt.declaration_list)?)?;
            list.declarations.iter().rev().find_map(|&decl| {
                let data = arena.get_variable_declaration(arena.get(decl)?)?;
                (arena.identifier_text(data.name) == Some(name))
                    .then_some((data.type_annotation, data.initializer))
            })
        })
    }

    /// Property of the class enclosing `usage` named `name`.
    fn find_property(&self, arena: &NodeArena, usage: NodeIndex, name: &str) -> Option<NodeIndex> {
        let class = ancestors(arena, usage)
            .filter_map(|idx| arena.get(idx))
            .find(|node| node.kind.is_class_like())
            .and_then(|node| arena.get_class(node))?;
        class.members.iter().copied().find(|&member| {
            arena
                .get(member)
                .and_then(|node| arena.get_property_decl(node))
                .is_some_and(|prop| arena.identifier_text(prop.name) == Some(name))
        })
    }

    /// Type name from an annotation, falling back to the initializer.
    fn declared_type(
        &self,
        arena: &NodeArena,
        type_annotation: NodeIndex,
        initializer: NodeIndex,
    ) -> Option<String> {
        if let Some(node) = arena.get(type_annotation) {
            return match node.kind {
                SyntaxKind::TypeReference => {
                    ident(arena, arena.get_type_ref(node)?.type_name)
                }
                SyntaxKind::ArrayType => Some("Array".to_string()),
                _ => None,
            };
        }
        self.expression_type(arena, initializer)
    }

    /// Type of an expression whose shape alone decides it.
    fn expression_type(&self, arena: &NodeArena, idx: NodeIndex) -> Option<String> {
        let node = arena.get(idx)?;
        match node.kind {
            SyntaxKind::NewExpression => ident(arena, arena.get_call_expr(node)?.expression),
            SyntaxKind::ArrayLiteralExpression => Some("Array".to_string()),
            SyntaxKind::ParenthesizedExpression => {
                self.expression_type(arena, arena.get_parenthesized(node)?.expression)
            }
            _ => None,
        }
    }
}

impl TypeChecker for DeclaredTypeChecker {
    fn type_name_of(&self, arena: &NodeArena, idx: NodeIndex) -> Option<String> {
        let node = arena.get(idx)?;
        let resolved = match node.kind {
            SyntaxKind::Identifier => {
                let name = arena.get_identifier(node)?.escaped_text.as_str();
                let (type_annotation, initializer) = self.find_binding(arena, idx, name)?;
                self.declared_type(arena, type_annotation, initializer)
            }
            SyntaxKind::PropertyAccessExpression => {
                let access = arena.get_access_expr(node)?;
                let receiver = arena.get(access.expression)?;
                if receiver.kind != SyntaxKind::ThisKeyword {
                    return None;
                }
                let name = arena.identifier_text(access.name_or_argument)?;
                let prop_idx = self.find_property(arena, idx, name)?;
                let prop = arena.get_property_decl(arena.get(prop_idx)?)?;
                self.declared_type(arena, prop.type_annotation, prop.initializer)
            }
            SyntaxKind::ParenthesizedExpression => {
                self.type_name_of(arena, arena.get_parenthesized(node)?.expression)
            }
            _ => self.expression_type(arena, idx),
        };
        trace!(idx = idx.0, kind = ?node.kind, resolved = ?resolved, "type_name_of");
        resolved
    }
}
