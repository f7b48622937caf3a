use super::require;
use crate::error::Result;
use crate::transpiler::{Transpiler, TranspilerStep};
use tsdart_syntax::{NodeIndex, SyntaxKind};

/// Type positions: references, array types, type parameters, keyword types.
pub struct TypeTranslator;

impl TranspilerStep for TypeTranslator {
    fn visit_node(&self, t: &mut Transpiler<'_>, idx: NodeIndex) -> Result<()> {
        let arena = t.arena();
        let node = t.node(idx)?;
        match node.kind {
            SyntaxKind::TypeReference => {
                let type_ref = require(t, idx, arena.get_type_ref(node))?;
                t.visit_type_name(type_ref.type_name)?;
                t.maybe_visit_type_arguments(type_ref.type_arguments.as_ref())?;
            }
            SyntaxKind::ArrayType => {
                let array = require(t, idx, arena.get_array_type(node))?;
                t.emit("List");
                t.emit("<");
                t.visit(array.element_type)?;
                t.emit(">");
            }
            SyntaxKind::TypeParameter => {
                let param = require(t, idx, arena.get_type_parameter(node))?;
                t.visit(param.name)?;
                if param.constraint.is_some() {
                    t.emit("extends");
                    t.visit(param.constraint)?;
                }
            }
            SyntaxKind::NumberKeyword => t.emit("num"),
            SyntaxKind::BooleanKeyword => t.emit("bool"),
            SyntaxKind::AnyKeyword => t.emit("dynamic"),
            SyntaxKind::StringKeyword => t.emit("string"),
            SyntaxKind::VoidKeyword => t.emit("void"),
            _ => return Err(t.unimplemented(idx)),
        }
        Ok(())
    }
}
