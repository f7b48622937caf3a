//! NodeArena creation methods (add_* methods).
//!
//! Trees are built bottom-up: children are added before their parent, and
//! each `add_*` call records itself as the parent of the children it was
//! given. Parent links are never changed afterwards.

use crate::base::{NodeIndex, NodeList};
use crate::flags::NodeFlags;
use crate::node::*;
use crate::syntax_kind::SyntaxKind;

impl NodeArena {
    /// Maximum pre-allocation to avoid capacity overflow in huge files.
    const MAX_NODE_PREALLOC: usize = 5_000_000;

    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Create an arena with pre-allocated header capacity.
    pub fn with_capacity(capacity: usize) -> NodeArena {
        let safe_capacity = capacity.min(Self::MAX_NODE_PREALLOC);
        let mut arena = NodeArena::default();
        arena.nodes = Vec::with_capacity(safe_capacity);
        arena.extended_info = Vec::with_capacity(safe_capacity);
        arena.identifiers = Vec::with_capacity(safe_capacity / 4); // ~25% identifiers
        arena
    }

    // ============================================================================
    // Parent Mapping Helpers
    // ============================================================================

    #[inline]
    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if !child.is_none() {
            if let Some(info) = self.extended_info.get_mut(child.0 as usize) {
                info.parent = parent;
            }
        }
    }

    #[inline]
    fn set_parent_list(&mut self, list: &NodeList, parent: NodeIndex) {
        for &child in &list.nodes {
            self.set_parent(child, parent);
        }
    }

    #[inline]
    fn set_parent_opt_list(&mut self, list: &Option<NodeList>, parent: NodeIndex) {
        if let Some(l) = list {
            self.set_parent_list(l, parent);
        }
    }

    #[inline]
    fn push_node(&mut self, node: Node) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(node);
        self.extended_info.push(ExtendedNodeInfo::default());
        NodeIndex(index)
    }

    /// Set the flags of a node under construction.
    pub fn set_flags(&mut self, index: NodeIndex, flags: NodeFlags) {
        if let Some(node) = self.get_mut(index) {
            node.flags = flags;
        }
    }

    // ============================================================================
    // Node Creation Methods
    // ============================================================================

    /// Add a token node (keywords, modifiers, data-less kinds)
    pub fn add_token(&mut self, kind: SyntaxKind, pos: u32, end: u32) -> NodeIndex {
        self.push_node(Node::new(kind, pos, end))
    }

    pub fn add_identifier(&mut self, pos: u32, end: u32, data: IdentifierData) -> NodeIndex {
        let data_index = self.identifiers.len() as u32;
        self.identifiers.push(data);
        self.push_node(Node::with_data(SyntaxKind::Identifier, pos, end, data_index))
    }

    /// Add a string or numeric literal
    pub fn add_literal(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: LiteralData) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral
        ));
        let data_index = self.literals.len() as u32;
        self.literals.push(data);
        self.push_node(Node::with_data(kind, pos, end, data_index))
    }

    pub fn add_qualified_name(
        &mut self,
        pos: u32,
        end: u32,
        data: QualifiedNameData,
    ) -> NodeIndex {
        let left = data.left;
        let right = data.right;

        let data_index = self.qualified_names.len() as u32;
        self.qualified_names.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::QualifiedName,
            pos,
            end,
            data_index,
        ));

        self.set_parent(left, parent);
        self.set_parent(right, parent);
        parent
    }

    pub fn add_decorator(&mut self, pos: u32, end: u32, data: DecoratorData) -> NodeIndex {
        let expression = data.expression;

        let data_index = self.decorators.len() as u32;
        self.decorators.push(data);
        let parent = self.push_node(Node::with_data(SyntaxKind::Decorator, pos, end, data_index));

        self.set_parent(expression, parent);
        parent
    }

    /// Add a call or `new` expression
    pub fn add_call_expr(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        data: CallExprData,
    ) -> NodeIndex {
        let expression = data.expression;
        let type_arguments = data.type_arguments.clone();
        let arguments = data.arguments.clone();

        let data_index = self.call_exprs.len() as u32;
        self.call_exprs.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));

        self.set_parent(expression, parent);
        self.set_parent_opt_list(&type_arguments, parent);
        self.set_parent_opt_list(&arguments, parent);
        parent
    }

    /// Add a property or element access expression
    pub fn add_access_expr(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        data: AccessExprData,
    ) -> NodeIndex {
        let expression = data.expression;
        let name_or_argument = data.name_or_argument;

        let data_index = self.access_exprs.len() as u32;
        self.access_exprs.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));

        self.set_parent(expression, parent);
        self.set_parent(name_or_argument, parent);
        parent
    }

    pub fn add_binary_expr(&mut self, pos: u32, end: u32, data: BinaryExprData) -> NodeIndex {
        let left = data.left;
        let right = data.right;

        let data_index = self.binary_exprs.len() as u32;
        self.binary_exprs.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::BinaryExpression,
            pos,
            end,
            data_index,
        ));

        self.set_parent(left, parent);
        self.set_parent(right, parent);
        parent
    }

    pub fn add_parenthesized(&mut self, pos: u32, end: u32, data: ParenthesizedData) -> NodeIndex {
        let expression = data.expression;

        let data_index = self.parenthesized.len() as u32;
        self.parenthesized.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::ParenthesizedExpression,
            pos,
            end,
            data_index,
        ));

        self.set_parent(expression, parent);
        parent
    }

    pub fn add_array_literal(&mut self, pos: u32, end: u32, data: ArrayLiteralData) -> NodeIndex {
        let elements = data.elements.clone();

        let data_index = self.array_literals.len() as u32;
        self.array_literals.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::ArrayLiteralExpression,
            pos,
            end,
            data_index,
        ));

        self.set_parent_list(&elements, parent);
        parent
    }

    pub fn add_type_ref(&mut self, pos: u32, end: u32, data: TypeRefData) -> NodeIndex {
        let type_name = data.type_name;
        let type_arguments = data.type_arguments.clone();

        let data_index = self.type_refs.len() as u32;
        self.type_refs.push(data);
        let parent = self.push_node(Node::with_data(SyntaxKind::TypeReference, pos, end, data_index));

        self.set_parent(type_name, parent);
        self.set_parent_opt_list(&type_arguments, parent);
        parent
    }

    pub fn add_array_type(&mut self, pos: u32, end: u32, data: ArrayTypeData) -> NodeIndex {
        let element_type = data.element_type;

        let data_index = self.array_types.len() as u32;
        self.array_types.push(data);
        let parent = self.push_node(Node::with_data(SyntaxKind::ArrayType, pos, end, data_index));

        self.set_parent(element_type, parent);
        parent
    }

    pub fn add_type_parameter(&mut self, pos: u32, end: u32, data: TypeParameterData) -> NodeIndex {
        let name = data.name;
        let constraint = data.constraint;

        let data_index = self.type_parameters.len() as u32;
        self.type_parameters.push(data);
        let parent = self.push_node(Node::with_data(SyntaxKind::TypeParameter, pos, end, data_index));

        self.set_parent(name, parent);
        self.set_parent(constraint, parent);
        parent
    }

    pub fn add_heritage(&mut self, pos: u32, end: u32, data: HeritageData) -> NodeIndex {
        let types = data.types.clone();

        let data_index = self.heritage_clauses.len() as u32;
        self.heritage_clauses.push(data);
        let parent = self.push_node(Node::with_data(SyntaxKind::HeritageClause, pos, end, data_index));

        self.set_parent_list(&types, parent);
        parent
    }

    pub fn add_variable(&mut self, pos: u32, end: u32, data: VariableData) -> NodeIndex {
        let modifiers = data.modifiers.clone();
        let declaration_list = data.declaration_list;

        let data_index = self.variables.len() as u32;
        self.variables.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::VariableStatement,
            pos,
            end,
            data_index,
        ));

        self.set_parent_opt_list(&modifiers, parent);
        self.set_parent(declaration_list, parent);
        parent
    }

    /// Add a declaration list; `flags` carries `LET`/`CONST` (neither means `var`).
    pub fn add_variable_declaration_list(
        &mut self,
        pos: u32,
        end: u32,
        flags: NodeFlags,
        data: VariableDeclarationListData,
    ) -> NodeIndex {
        let declarations = data.declarations.clone();

        let data_index = self.variable_declaration_lists.len() as u32;
        self.variable_declaration_lists.push(data);
        let mut node = Node::with_data(SyntaxKind::VariableDeclarationList, pos, end, data_index);
        node.flags = flags;
        let parent = self.push_node(node);

        self.set_parent_list(&declarations, parent);
        parent
    }

    pub fn add_variable_declaration(
        &mut self,
        pos: u32,
        end: u32,
        data: VariableDeclarationData,
    ) -> NodeIndex {
        let name = data.name;
        let type_annotation = data.type_annotation;
        let initializer = data.initializer;

        let data_index = self.variable_declarations.len() as u32;
        self.variable_declarations.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::VariableDeclaration,
            pos,
            end,
            data_index,
        ));

        self.set_parent(name, parent);
        self.set_parent(type_annotation, parent);
        self.set_parent(initializer, parent);
        parent
    }

    /// Add a class or interface declaration
    pub fn add_class(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: ClassData) -> NodeIndex {
        debug_assert!(kind.is_class_like());
        let modifiers = data.modifiers.clone();
        let name = data.name;
        let type_parameters = data.type_parameters.clone();
        let heritage_clauses = data.heritage_clauses.clone();
        let members = data.members.clone();

        let data_index = self.classes.len() as u32;
        self.classes.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));

        self.set_parent_opt_list(&modifiers, parent);
        self.set_parent(name, parent);
        self.set_parent_opt_list(&type_parameters, parent);
        self.set_parent_opt_list(&heritage_clauses, parent);
        self.set_parent_list(&members, parent);
        parent
    }

    pub fn add_property_decl(&mut self, pos: u32, end: u32, data: PropertyDeclData) -> NodeIndex {
        let modifiers = data.modifiers.clone();
        let name = data.name;
        let type_annotation = data.type_annotation;
        let initializer = data.initializer;

        let data_index = self.property_decls.len() as u32;
        self.property_decls.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::PropertyDeclaration,
            pos,
            end,
            data_index,
        ));

        self.set_parent_opt_list(&modifiers, parent);
        self.set_parent(name, parent);
        self.set_parent(type_annotation, parent);
        self.set_parent(initializer, parent);
        parent
    }

    pub fn add_constructor(&mut self, pos: u32, end: u32, data: ConstructorData) -> NodeIndex {
        let modifiers = data.modifiers.clone();
        let parameters = data.parameters.clone();
        let body = data.body;

        let data_index = self.constructors.len() as u32;
        self.constructors.push(data);
        let parent = self.push_node(Node::with_data(SyntaxKind::Constructor, pos, end, data_index));

        self.set_parent_opt_list(&modifiers, parent);
        self.set_parent_list(&parameters, parent);
        self.set_parent(body, parent);
        parent
    }

    pub fn add_method_decl(&mut self, pos: u32, end: u32, data: MethodDeclData) -> NodeIndex {
        let modifiers = data.modifiers.clone();
        let name = data.name;
        let type_parameters = data.type_parameters.clone();
        let parameters = data.parameters.clone();
        let type_annotation = data.type_annotation;
        let body = data.body;

        let data_index = self.method_decls.len() as u32;
        self.method_decls.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::MethodDeclaration,
            pos,
            end,
            data_index,
        ));

        self.set_parent_opt_list(&modifiers, parent);
        self.set_parent(name, parent);
        self.set_parent_opt_list(&type_parameters, parent);
        self.set_parent_list(&parameters, parent);
        self.set_parent(type_annotation, parent);
        self.set_parent(body, parent);
        parent
    }

    pub fn add_parameter(&mut self, pos: u32, end: u32, data: ParameterData) -> NodeIndex {
        let modifiers = data.modifiers.clone();
        let name = data.name;
        let type_annotation = data.type_annotation;
        let initializer = data.initializer;

        let data_index = self.parameters.len() as u32;
        self.parameters.push(data);
        let parent = self.push_node(Node::with_data(SyntaxKind::Parameter, pos, end, data_index));

        self.set_parent_opt_list(&modifiers, parent);
        self.set_parent(name, parent);
        self.set_parent(type_annotation, parent);
        self.set_parent(initializer, parent);
        parent
    }

    pub fn add_block(&mut self, pos: u32, end: u32, data: BlockData) -> NodeIndex {
        let statements = data.statements.clone();

        let data_index = self.blocks.len() as u32;
        self.blocks.push(data);
        let parent = self.push_node(Node::with_data(SyntaxKind::Block, pos, end, data_index));

        self.set_parent_list(&statements, parent);
        parent
    }

    pub fn add_expression_statement(
        &mut self,
        pos: u32,
        end: u32,
        data: ExprStatementData,
    ) -> NodeIndex {
        let expression = data.expression;

        let data_index = self.expr_statements.len() as u32;
        self.expr_statements.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::ExpressionStatement,
            pos,
            end,
            data_index,
        ));

        self.set_parent(expression, parent);
        parent
    }

    pub fn add_return(&mut self, pos: u32, end: u32, data: ReturnData) -> NodeIndex {
        let expression = data.expression;

        let data_index = self.return_data.len() as u32;
        self.return_data.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::ReturnStatement,
            pos,
            end,
            data_index,
        ));

        self.set_parent(expression, parent);
        parent
    }

    pub fn add_if_statement(&mut self, pos: u32, end: u32, data: IfStatementData) -> NodeIndex {
        let expression = data.expression;
        let then_statement = data.then_statement;
        let else_statement = data.else_statement;

        let data_index = self.if_statements.len() as u32;
        self.if_statements.push(data);
        let parent = self.push_node(Node::with_data(SyntaxKind::IfStatement, pos, end, data_index));

        self.set_parent(expression, parent);
        self.set_parent(then_statement, parent);
        self.set_parent(else_statement, parent);
        parent
    }

    pub fn add_source_file(&mut self, pos: u32, end: u32, data: SourceFileData) -> NodeIndex {
        let statements = data.statements.clone();

        let data_index = self.source_files.len() as u32;
        self.source_files.push(data);
        let parent = self.push_node(Node::with_data(SyntaxKind::SourceFile, pos, end, data_index));

        self.set_parent_list(&statements, parent);
        parent
    }
}
