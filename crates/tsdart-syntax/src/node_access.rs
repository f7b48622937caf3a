//! NodeArena access methods.
//!
//! Typed getters check the node kind before touching a pool, so asking for
//! the wrong shape returns `None` instead of another node's data.

use crate::base::{NodeIndex, NodeList};
use crate::node::*;
use crate::syntax_kind::SyntaxKind;

macro_rules! pool_getter {
    ($(#[$meta:meta])* $name:ident, $pool:ident, $data:ty, $($kind:ident)|+) => {
        $(#[$meta])*
        #[inline]
        pub fn $name(&self, node: &Node) -> Option<&$data> {
            if node.has_data() && matches!(node.kind, $(SyntaxKind::$kind)|+) {
                self.$pool.get(node.data_index as usize)
            } else {
                None
            }
        }
    };
}

impl NodeArena {
    /// Get a node header by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    /// Get extended info for a node
    #[inline]
    pub fn get_extended(&self, index: NodeIndex) -> Option<&ExtendedNodeInfo> {
        if index.is_none() {
            None
        } else {
            self.extended_info.get(index.0 as usize)
        }
    }

    /// Parent of a node, `NodeIndex::NONE` for the root or an unknown index.
    #[inline]
    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        self.get_extended(index)
            .map_or(NodeIndex::NONE, |info| info.parent)
    }

    /// Iterate over all nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeIndex(i as u32), node))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pool_getter!(get_identifier, identifiers, IdentifierData, Identifier);
    pool_getter!(get_literal, literals, LiteralData, StringLiteral | NumericLiteral);
    pool_getter!(
        /// Get qualified name data (A.B syntax).
        get_qualified_name, qualified_names, QualifiedNameData, QualifiedName
    );
    pool_getter!(get_decorator, decorators, DecoratorData, Decorator);
    pool_getter!(
        /// Returns None if node is not a call/new expression or has no data.
        get_call_expr, call_exprs, CallExprData, CallExpression | NewExpression
    );
    pool_getter!(
        /// Property access or element access.
        get_access_expr, access_exprs, AccessExprData,
        PropertyAccessExpression | ElementAccessExpression
    );
    pool_getter!(get_binary_expr, binary_exprs, BinaryExprData, BinaryExpression);
    pool_getter!(get_parenthesized, parenthesized, ParenthesizedData, ParenthesizedExpression);
    pool_getter!(get_array_literal, array_literals, ArrayLiteralData, ArrayLiteralExpression);
    pool_getter!(get_type_ref, type_refs, TypeRefData, TypeReference);
    pool_getter!(get_array_type, array_types, ArrayTypeData, ArrayType);
    pool_getter!(get_type_parameter, type_parameters, TypeParameterData, TypeParameter);
    pool_getter!(get_heritage, heritage_clauses, HeritageData, HeritageClause);
    pool_getter!(get_variable, variables, VariableData, VariableStatement);
    pool_getter!(
        get_variable_declaration_list, variable_declaration_lists,
        VariableDeclarationListData, VariableDeclarationList
    );
    pool_getter!(
        get_variable_declaration, variable_declarations, VariableDeclarationData,
        VariableDeclaration
    );
    pool_getter!(
        /// Class or interface declaration.
        get_class, classes, ClassData, ClassDeclaration | InterfaceDeclaration
    );
    pool_getter!(get_property_decl, property_decls, PropertyDeclData, PropertyDeclaration);
    pool_getter!(get_constructor, constructors, ConstructorData, Constructor);
    pool_getter!(get_method_decl, method_decls, MethodDeclData, MethodDeclaration);
    pool_getter!(get_parameter, parameters, ParameterData, Parameter);
    pool_getter!(get_block, blocks, BlockData, Block);
    pool_getter!(
        get_expression_statement, expr_statements, ExprStatementData,
        ExpressionStatement
    );
    pool_getter!(get_return_statement, return_data, ReturnData, ReturnStatement);
    pool_getter!(get_if_statement, if_statements, IfStatementData, IfStatement);
    pool_getter!(get_source_file, source_files, SourceFileData, SourceFile);

    /// Text of an identifier node, `None` for any other shape.
    pub fn identifier_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        self.get_identifier(node).map(|ident| ident.escaped_text.as_str())
    }

    /// Modifier list (keywords and decorators) of a declaration node.
    pub fn get_modifiers(&self, node: &Node) -> Option<&NodeList> {
        match node.kind {
            SyntaxKind::ClassDeclaration | SyntaxKind::InterfaceDeclaration => {
                self.get_class(node)?.modifiers.as_ref()
            }
            SyntaxKind::Constructor => self.get_constructor(node)?.modifiers.as_ref(),
            SyntaxKind::PropertyDeclaration => self.get_property_decl(node)?.modifiers.as_ref(),
            SyntaxKind::MethodDeclaration => self.get_method_decl(node)?.modifiers.as_ref(),
            SyntaxKind::Parameter => self.get_parameter(node)?.modifiers.as_ref(),
            SyntaxKind::VariableStatement => self.get_variable(node)?.modifiers.as_ref(),
            _ => None,
        }
    }
}
