//! Helpers shared by all rules: emission, list traversal and tree queries.

use super::Transpiler;
use crate::annotations;
use crate::error::Result;
use crate::queries;
use crate::type_names::remap_type_name;
use tsdart_common::Diagnostic;
use tsdart_common::diagnostics::{DiagnosticMessage, diagnostic_messages};
use tsdart_syntax::{NodeFlags, NodeIndex, NodeList, SyntaxKind};

impl<'a> Transpiler<'a> {
    // =========================================================================
    // Output
    // =========================================================================

    /// Append `text` preceded by a single space.
    #[inline]
    pub fn emit(&mut self, text: &str) {
        self.writer.emit(text);
    }

    /// Append `text` with no separating space.
    #[inline]
    pub fn emit_no_space(&mut self, text: &str) {
        self.writer.emit_no_space(text);
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    pub fn visit_each(&mut self, nodes: &NodeList) -> Result<()> {
        for &idx in nodes {
            self.visit(idx)?;
        }
        Ok(())
    }

    /// Like [`visit_each`](Self::visit_each); an absent list emits nothing.
    pub fn visit_each_if_present(&mut self, nodes: Option<&NodeList>) -> Result<()> {
        match nodes {
            Some(nodes) => self.visit_each(nodes),
            None => Ok(()),
        }
    }

    /// Visit `nodes` separated by `,`.
    pub fn visit_list(&mut self, nodes: &NodeList) -> Result<()> {
        self.visit_list_with(nodes, ",")
    }

    /// Visit `nodes` with `separator` emitted between neighbours. No
    /// separator follows the last element; an empty list emits nothing.
    #[tracing::instrument(level = "trace", skip(self, nodes), fields(count = nodes.len()))]
    pub fn visit_list_with(&mut self, nodes: &NodeList, separator: &str) -> Result<()> {
        for (i, &idx) in nodes.iter().enumerate() {
            if i > 0 {
                self.emit(separator);
            }
            self.visit(idx)?;
        }
        Ok(())
    }

    /// Emit a name in type position. A simple identifier is remapped to its
    /// Dart equivalent; qualified names and other shapes are visited as is.
    pub fn visit_type_name(&mut self, idx: NodeIndex) -> Result<()> {
        let node = self.node(idx)?;
        if node.kind != SyntaxKind::Identifier {
            return self.visit(idx);
        }
        let arena = self.arena;
        let Some(name) = arena.get_identifier(node) else {
            return Err(self.unimplemented(idx));
        };
        self.emit(remap_type_name(&name.escaped_text));
        Ok(())
    }

    /// `< args >` when type arguments are present, nothing otherwise.
    pub fn maybe_visit_type_arguments(&mut self, type_arguments: Option<&NodeList>) -> Result<()> {
        if let Some(args) = type_arguments {
            self.emit("<");
            self.visit_list(args)?;
            self.emit(">");
        }
        Ok(())
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Record a non-fatal error at `idx`; translation continues.
    pub fn report_error(&mut self, idx: NodeIndex, message: &str) {
        self.report_diagnostic(idx, &diagnostic_messages::TRANSLATION_ERROR, &[message]);
    }

    /// Record a registered diagnostic at `idx`.
    pub fn report_diagnostic(&mut self, idx: NodeIndex, message: &DiagnosticMessage, args: &[&str]) {
        let (start, length) = self
            .arena
            .get(idx)
            .map_or((0, 0), |node| (node.pos, node.width()));
        let diagnostic = Diagnostic::from_message(
            self.options.file_name.clone(),
            start,
            length,
            message,
            args,
        );
        tracing::debug!(code = diagnostic.code, start, message = %diagnostic.message_text, "diagnostic");
        self.diagnostics.push(diagnostic);
    }

    // =========================================================================
    // Tree queries
    // =========================================================================

    pub fn get_ancestor(&self, idx: NodeIndex, kind: SyntaxKind) -> Option<NodeIndex> {
        queries::get_ancestor(self.arena, idx, kind)
    }

    pub fn has_ancestor(&self, idx: NodeIndex, kind: SyntaxKind) -> bool {
        queries::has_ancestor(self.arena, idx, kind)
    }

    /// Whether `idx` carries `flag`; a missing node carries none.
    pub fn has_flag(&self, idx: NodeIndex, flag: NodeFlags) -> bool {
        queries::has_flag(self.arena.get(idx), flag)
    }

    /// Whether the declaration at `idx` carries a decorator named `name`.
    pub fn has_annotation(&self, idx: NodeIndex, name: &str) -> bool {
        let modifiers = self
            .arena
            .get(idx)
            .and_then(|node| self.arena.get_modifiers(node));
        annotations::has_annotation(self.arena, modifiers, name)
    }

    pub fn is_const(&self, class_idx: NodeIndex) -> bool {
        annotations::is_const(self.arena, class_idx)
    }
}
