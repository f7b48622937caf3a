use super::require;
use crate::error::Result;
use crate::transpiler::{Transpiler, TranspilerStep};
use tsdart_syntax::{NodeIndex, SyntaxKind};

/// Identifiers and literal values.
pub struct LiteralTranslator;

impl TranspilerStep for LiteralTranslator {
    fn visit_node(&self, t: &mut Transpiler<'_>, idx: NodeIndex) -> Result<()> {
        let arena = t.arena();
        let node = t.node(idx)?;
        match node.kind {
            SyntaxKind::Identifier => {
                let ident = require(t, idx, arena.get_identifier(node))?;
                t.emit(&ident.escaped_text);
            }
            SyntaxKind::NumericLiteral => {
                let lit = require(t, idx, arena.get_literal(node))?;
                t.emit(&lit.text);
            }
            SyntaxKind::StringLiteral => {
                let lit = require(t, idx, arena.get_literal(node))?;
                t.emit(&quote_string(&lit.text));
            }
            SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword | SyntaxKind::NullKeyword => {
                let Some(text) = node.kind.token_text() else {
                    return Err(t.unimplemented(idx));
                };
                t.emit(text);
            }
            _ => return Err(t.unimplemented(idx)),
        }
        Ok(())
    }
}

/// Double-quoted Dart string literal. `$` is escaped so the value is never
/// read as an interpolation.
fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::quote_string;

    #[test]
    fn test_quote_string() {
        assert_eq!(quote_string("k"), "\"k\"");
        assert_eq!(quote_string("a\"b"), "\"a\\\"b\"");
        assert_eq!(quote_string("$x"), "\"\\$x\"");
        assert_eq!(quote_string("line\n"), "\"line\\n\"");
    }
}
