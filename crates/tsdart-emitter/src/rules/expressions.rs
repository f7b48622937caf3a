use super::{FacadeConverter, require};
use crate::error::Result;
use crate::transpiler::{Transpiler, TranspilerStep};
use tsdart_syntax::{NodeIndex, NodeList, SyntaxKind};

/// Value expressions.
pub struct ExpressionTranslator;

impl TranspilerStep for ExpressionTranslator {
    fn visit_node(&self, t: &mut Transpiler<'_>, idx: NodeIndex) -> Result<()> {
        let arena = t.arena();
        let node = t.node(idx)?;
        match node.kind {
            SyntaxKind::PropertyAccessExpression => {
                let access = require(t, idx, arena.get_access_expr(node))?;
                t.visit(access.expression)?;
                t.emit(".");
                t.visit(access.name_or_argument)?;
            }
            SyntaxKind::ElementAccessExpression => {
                let access = require(t, idx, arena.get_access_expr(node))?;
                t.visit(access.expression)?;
                t.emit("[");
                t.visit(access.name_or_argument)?;
                t.emit("]");
            }
            SyntaxKind::CallExpression => {
                if FacadeConverter.maybe_visit_call(t, idx)? {
                    return Ok(());
                }
                let call = require(t, idx, arena.get_call_expr(node))?;
                t.visit(call.expression)?;
                t.maybe_visit_type_arguments(call.type_arguments.as_ref())?;
                emit_arguments(t, call.arguments.as_ref())?;
            }
            SyntaxKind::NewExpression => {
                if FacadeConverter.maybe_visit_new(t, idx)? {
                    return Ok(());
                }
                let call = require(t, idx, arena.get_call_expr(node))?;
                t.emit("new");
                t.visit_type_name(call.expression)?;
                t.maybe_visit_type_arguments(call.type_arguments.as_ref())?;
                emit_arguments(t, call.arguments.as_ref())?;
            }
            SyntaxKind::BinaryExpression => {
                let binary = require(t, idx, arena.get_binary_expr(node))?;
                let operator = match binary.operator_token {
                    SyntaxKind::EqualsEqualsEqualsToken => "==",
                    SyntaxKind::ExclamationEqualsEqualsToken => "!=",
                    other => match other.token_text() {
                        Some(text) if other.is_binary_operator() => text,
                        _ => return Err(t.unimplemented(idx)),
                    },
                };
                t.visit(binary.left)?;
                t.emit(operator);
                t.visit(binary.right)?;
            }
            SyntaxKind::ParenthesizedExpression => {
                let paren = require(t, idx, arena.get_parenthesized(node))?;
                t.emit("(");
                t.visit(paren.expression)?;
                t.emit(")");
            }
            SyntaxKind::ArrayLiteralExpression => {
                let array = require(t, idx, arena.get_array_literal(node))?;
                t.emit("[");
                t.visit_list(&array.elements)?;
                t.emit("]");
            }
            SyntaxKind::ThisKeyword => t.emit("this"),
            SyntaxKind::SuperKeyword => t.emit("super"),
            SyntaxKind::QualifiedName => {
                let qname = require(t, idx, arena.get_qualified_name(node))?;
                t.visit(qname.left)?;
                t.emit(".");
                t.visit(qname.right)?;
            }
            _ => return Err(t.unimplemented(idx)),
        }
        Ok(())
    }
}

/// `( args )`; an absent argument list is emitted as `( )`.
fn emit_arguments(t: &mut Transpiler<'_>, arguments: Option<&NodeList>) -> Result<()> {
    t.emit("(");
    if let Some(args) = arguments {
        t.visit_list(args)?;
    }
    t.emit(")");
    Ok(())
}
