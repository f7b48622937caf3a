use super::require;
use crate::error::Result;
use crate::transpiler::{Transpiler, TranspilerStep};
use tsdart_syntax::{NodeIndex, SyntaxKind};

/// Source files, blocks and control-flow statements.
pub struct StatementTranslator;

impl TranspilerStep for StatementTranslator {
    fn visit_node(&self, t: &mut Transpiler<'_>, idx: NodeIndex) -> Result<()> {
        let arena = t.arena();
        let node = t.node(idx)?;
        match node.kind {
            SyntaxKind::SourceFile => {
                let file = require(t, idx, arena.get_source_file(node))?;
                if !t.library_name().is_empty() {
                    let library = t.library_name().to_string();
                    t.emit("library");
                    t.emit(&library);
                    t.emit(";");
                }
                t.visit_each(&file.statements)
            }
            SyntaxKind::Block => {
                let block = require(t, idx, arena.get_block(node))?;
                t.emit("{");
                t.visit_each(&block.statements)?;
                t.emit("}");
                Ok(())
            }
            SyntaxKind::ExpressionStatement => {
                let stmt = require(t, idx, arena.get_expression_statement(node))?;
                t.visit(stmt.expression)?;
                t.emit(";");
                Ok(())
            }
            SyntaxKind::ReturnStatement => {
                let ret = require(t, idx, arena.get_return_statement(node))?;
                t.emit("return");
                if ret.expression.is_some() {
                    t.visit(ret.expression)?;
                }
                t.emit(";");
                Ok(())
            }
            SyntaxKind::IfStatement => {
                let stmt = require(t, idx, arena.get_if_statement(node))?;
                t.emit("if");
                t.emit("(");
                t.visit(stmt.expression)?;
                t.emit(")");
                t.visit(stmt.then_statement)?;
                if stmt.else_statement.is_some() {
                    t.emit("else");
                    t.visit(stmt.else_statement)?;
                }
                Ok(())
            }
            SyntaxKind::EmptyStatement => {
                t.emit(";");
                Ok(())
            }
            _ => Err(t.unimplemented(idx)),
        }
    }
}
