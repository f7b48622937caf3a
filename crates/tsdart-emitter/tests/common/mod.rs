//! Tree-building fixture shared by the integration tests.
//!
//! Stands in for the front-end parser: nodes are added bottom-up in source
//! order, each at the next position, so "declared before" comparisons made
//! by the type checker follow the order the test builds statements in.

#![allow(dead_code)]

use tsdart_common::TranspileOptions;
use tsdart_emitter::{DeclaredTypeChecker, Result, TranslationOutput, Transpiler};
use tsdart_syntax::node::*;
use tsdart_syntax::{NodeArena, NodeFlags, NodeIndex, NodeList, SyntaxKind};

pub struct TreeBuilder {
    pub arena: NodeArena,
    pos: u32,
}

impl TreeBuilder {
    pub fn new() -> Self {
        TreeBuilder {
            arena: NodeArena::new(),
            pos: 0,
        }
    }

    fn span(&mut self) -> (u32, u32) {
        let pos = self.pos;
        self.pos += 1;
        (pos, pos + 1)
    }

    pub fn token(&mut self, kind: SyntaxKind) -> NodeIndex {
        let (pos, end) = self.span();
        self.arena.add_token(kind, pos, end)
    }

    pub fn ident(&mut self, text: &str) -> NodeIndex {
        let (pos, end) = self.span();
        self.arena.add_identifier(
            pos,
            end,
            IdentifierData {
                escaped_text: text.to_string(),
            },
        )
    }

    /// `a.b.c` as nested qualified names.
    pub fn qualified(&mut self, parts: &[&str]) -> NodeIndex {
        let mut left = self.ident(parts[0]);
        for part in &parts[1..] {
            let right = self.ident(part);
            let (pos, end) = self.span();
            left = self
                .arena
                .add_qualified_name(pos, end, QualifiedNameData { left, right });
        }
        left
    }

    pub fn string(&mut self, text: &str) -> NodeIndex {
        self.literal(SyntaxKind::StringLiteral, text)
    }

    pub fn number(&mut self, text: &str) -> NodeIndex {
        self.literal(SyntaxKind::NumericLiteral, text)
    }

    fn literal(&mut self, kind: SyntaxKind, text: &str) -> NodeIndex {
        let (pos, end) = self.span();
        self.arena.add_literal(
            kind,
            pos,
            end,
            LiteralData {
                text: text.to_string(),
            },
        )
    }

    // Types

    /// `Name<args>`; an empty `args` means no type argument list.
    pub fn type_ref(&mut self, name: &str, args: Vec<NodeIndex>) -> NodeIndex {
        let type_name = self.ident(name);
        self.type_ref_to(type_name, args)
    }

    pub fn type_ref_to(&mut self, type_name: NodeIndex, args: Vec<NodeIndex>) -> NodeIndex {
        let type_arguments = (!args.is_empty()).then(|| NodeList::new(args));
        let (pos, end) = self.span();
        self.arena.add_type_ref(
            pos,
            end,
            TypeRefData {
                type_name,
                type_arguments,
            },
        )
    }

    pub fn array_type(&mut self, element_type: NodeIndex) -> NodeIndex {
        let (pos, end) = self.span();
        self.arena
            .add_array_type(pos, end, ArrayTypeData { element_type })
    }

    // Expressions

    pub fn array_literal(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        let (pos, end) = self.span();
        self.arena.add_array_literal(
            pos,
            end,
            ArrayLiteralData {
                elements: NodeList::new(elements),
            },
        )
    }

    pub fn new_expr(&mut self, class_name: &str, args: Vec<NodeIndex>) -> NodeIndex {
        let expression = self.ident(class_name);
        let (pos, end) = self.span();
        self.arena.add_call_expr(
            SyntaxKind::NewExpression,
            pos,
            end,
            CallExprData {
                expression,
                type_arguments: None,
                arguments: Some(NodeList::new(args)),
            },
        )
    }

    pub fn call(&mut self, callee: NodeIndex, args: Vec<NodeIndex>) -> NodeIndex {
        let (pos, end) = self.span();
        self.arena.add_call_expr(
            SyntaxKind::CallExpression,
            pos,
            end,
            CallExprData {
                expression: callee,
                type_arguments: None,
                arguments: Some(NodeList::new(args)),
            },
        )
    }

    pub fn prop_access(&mut self, expression: NodeIndex, name: &str) -> NodeIndex {
        let name_or_argument = self.ident(name);
        let (pos, end) = self.span();
        self.arena.add_access_expr(
            SyntaxKind::PropertyAccessExpression,
            pos,
            end,
            AccessExprData {
                expression,
                name_or_argument,
            },
        )
    }

    /// `receiver.method(args)` where `receiver` is a plain identifier.
    pub fn method_call(&mut self, receiver: &str, method: &str, args: Vec<NodeIndex>) -> NodeIndex {
        let receiver = self.ident(receiver);
        let callee = self.prop_access(receiver, method);
        self.call(callee, args)
    }

    pub fn binary(&mut self, left: NodeIndex, operator_token: SyntaxKind, right: NodeIndex) -> NodeIndex {
        let (pos, end) = self.span();
        self.arena.add_binary_expr(
            pos,
            end,
            BinaryExprData {
                left,
                operator_token,
                right,
            },
        )
    }

    // Statements

    pub fn expr_stmt(&mut self, expression: NodeIndex) -> NodeIndex {
        let (pos, end) = self.span();
        self.arena
            .add_expression_statement(pos, end, ExprStatementData { expression })
    }

    pub fn block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        let (pos, end) = self.span();
        self.arena.add_block(
            pos,
            end,
            BlockData {
                statements: NodeList::new(statements),
            },
        )
    }

    pub fn return_stmt(&mut self, expression: NodeIndex) -> NodeIndex {
        let (pos, end) = self.span();
        self.arena.add_return(pos, end, ReturnData { expression })
    }

    pub fn var_decl(&mut self, name: &str, type_annotation: NodeIndex, initializer: NodeIndex) -> NodeIndex {
        let name = self.ident(name);
        let (pos, end) = self.span();
        self.arena.add_variable_declaration(
            pos,
            end,
            VariableDeclarationData {
                name,
                type_annotation,
                initializer,
            },
        )
    }

    /// Variable statement over already built declarations.
    pub fn var_list_stmt(&mut self, flags: NodeFlags, declarations: Vec<NodeIndex>) -> NodeIndex {
        let (pos, end) = self.span();
        let declaration_list = self.arena.add_variable_declaration_list(
            pos,
            end,
            flags,
            VariableDeclarationListData {
                declarations: NodeList::new(declarations),
            },
        );
        let (pos, end) = self.span();
        self.arena.add_variable(
            pos,
            end,
            VariableData {
                modifiers: None,
                declaration_list,
            },
        )
    }

    /// `var name: type = initializer;` with a single declaration.
    pub fn var_stmt(&mut self, name: &str, type_annotation: NodeIndex, initializer: NodeIndex) -> NodeIndex {
        let decl = self.var_decl(name, type_annotation, initializer);
        self.var_list_stmt(NodeFlags::empty(), vec![decl])
    }

    // Declarations

    /// `@name` or, with `invoked`, `@name()`.
    pub fn decorator(&mut self, name: &str, invoked: bool) -> NodeIndex {
        let mut expression = self.ident(name);
        if invoked {
            expression = self.call(expression, Vec::new());
        }
        let (pos, end) = self.span();
        self.arena
            .add_decorator(pos, end, DecoratorData { expression })
    }

    pub fn parameter(&mut self, name: &str, type_annotation: NodeIndex) -> NodeIndex {
        let name = self.ident(name);
        let (pos, end) = self.span();
        self.arena.add_parameter(
            pos,
            end,
            ParameterData {
                modifiers: None,
                name,
                type_annotation,
                initializer: NodeIndex::NONE,
            },
        )
    }

    pub fn property(
        &mut self,
        modifiers: Vec<NodeIndex>,
        name: &str,
        type_annotation: NodeIndex,
        initializer: NodeIndex,
    ) -> NodeIndex {
        let name = self.ident(name);
        let (pos, end) = self.span();
        self.arena.add_property_decl(
            pos,
            end,
            PropertyDeclData {
                modifiers: (!modifiers.is_empty()).then(|| NodeList::new(modifiers)),
                name,
                type_annotation,
                initializer,
            },
        )
    }

    /// Constructor with a block body of `statements`.
    pub fn constructor(
        &mut self,
        modifiers: Vec<NodeIndex>,
        parameters: Vec<NodeIndex>,
        statements: Vec<NodeIndex>,
    ) -> NodeIndex {
        let body = self.block(statements);
        let (pos, end) = self.span();
        self.arena.add_constructor(
            pos,
            end,
            ConstructorData {
                modifiers: (!modifiers.is_empty()).then(|| NodeList::new(modifiers)),
                parameters: NodeList::new(parameters),
                body,
            },
        )
    }

    pub fn class(
        &mut self,
        kind: SyntaxKind,
        modifiers: Vec<NodeIndex>,
        name: &str,
        members: Vec<NodeIndex>,
    ) -> NodeIndex {
        let name = self.ident(name);
        let (pos, end) = self.span();
        self.arena.add_class(
            kind,
            pos,
            end,
            ClassData {
                modifiers: (!modifiers.is_empty()).then(|| NodeList::new(modifiers)),
                name,
                type_parameters: None,
                heritage_clauses: None,
                members: NodeList::new(members),
            },
        )
    }

    pub fn source_file(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        let (pos, end) = self.span();
        self.arena.add_source_file(
            pos,
            end,
            SourceFileData {
                file_name: "input.ts".to_string(),
                statements: NodeList::new(statements),
            },
        )
    }
}

/// Translate `root` with the declaration-based type checker attached.
pub fn translate(builder: &TreeBuilder, root: NodeIndex) -> Result<TranslationOutput> {
    let checker = DeclaredTypeChecker::new();
    Transpiler::new(&builder.arena, TranspileOptions::default())
        .with_type_checker(&checker)
        .translate(root)
}

/// Translate `root` with no type checker.
pub fn translate_unchecked(builder: &TreeBuilder, root: NodeIndex) -> Result<TranslationOutput> {
    Transpiler::new(&builder.arena, TranspileOptions::default()).translate(root)
}
