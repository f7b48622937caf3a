//! Translation driver.
//!
//! `Transpiler` owns the state of one run (output writer, diagnostics,
//! options, optional type checker) and borrows the syntax tree. Every node
//! goes through [`Transpiler::visit`], which routes its kind to exactly one
//! rule. Rules recurse by calling `visit` again, never each other.

use crate::error::{Result, TranspileError};
use crate::rules::{
    DeclarationTranslator, ExpressionTranslator, LiteralTranslator, StatementTranslator,
    TypeTranslator, UnsupportedSyntax,
};
use crate::source_writer::SourceWriter;
use crate::type_checker::TypeChecker;
use tracing::debug;
use tsdart_common::{Diagnostic, TranspileOptions};
use tsdart_syntax::{Node, NodeArena, NodeIndex, SyntaxKind};

mod helpers;

/// A translation rule for one family of node kinds.
///
/// Rules are stateless. Everything they need (tree access, output, queries,
/// diagnostics) comes through the `Transpiler` they are handed.
pub trait TranspilerStep {
    /// Translate the node at `idx`. A rule that has no translation for the
    /// node's kind keeps this default, which fails with
    /// [`TranspileError::Unimplemented`].
    fn visit_node(&self, t: &mut Transpiler<'_>, idx: NodeIndex) -> Result<()> {
        Err(t.unimplemented(idx))
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationOutput {
    pub code: String,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct Transpiler<'a> {
    arena: &'a NodeArena,
    options: TranspileOptions,
    writer: SourceWriter,
    diagnostics: Vec<Diagnostic>,
    type_checker: Option<&'a dyn TypeChecker>,
}

impl<'a> Transpiler<'a> {
    pub fn new(arena: &'a NodeArena, options: TranspileOptions) -> Self {
        Transpiler {
            arena,
            options,
            writer: SourceWriter::new(),
            diagnostics: Vec::new(),
            type_checker: None,
        }
    }

    /// Attach the type-resolution service queried by the collection facade.
    #[must_use]
    pub fn with_type_checker(mut self, type_checker: &'a dyn TypeChecker) -> Self {
        self.type_checker = Some(type_checker);
        self
    }

    /// Translate the tree rooted at `root`.
    ///
    /// Output and diagnostics of a previous call are discarded first, so one
    /// driver can translate several roots in turn. On error nothing is
    /// returned; the partial output stays in the writer for inspection.
    pub fn translate(&mut self, root: NodeIndex) -> Result<TranslationOutput> {
        self.writer = SourceWriter::new();
        self.diagnostics.clear();

        self.visit(root)?;

        debug!(
            file = %self.options.file_name,
            bytes = self.writer.len(),
            diagnostics = self.diagnostics.len(),
            "translated"
        );
        Ok(TranslationOutput {
            code: std::mem::take(&mut self.writer).finish(),
            diagnostics: std::mem::take(&mut self.diagnostics),
        })
    }

    /// Translate one node. This is the only traversal entry point.
    #[tracing::instrument(level = "trace", skip(self, idx), fields(idx = idx.0))]
    pub fn visit(&mut self, idx: NodeIndex) -> Result<()> {
        let kind = self.node(idx)?.kind;
        match kind {
            SyntaxKind::SourceFile
            | SyntaxKind::Block
            | SyntaxKind::ExpressionStatement
            | SyntaxKind::ReturnStatement
            | SyntaxKind::IfStatement
            | SyntaxKind::EmptyStatement => StatementTranslator.visit_node(self, idx),

            SyntaxKind::VariableStatement
            | SyntaxKind::VariableDeclarationList
            | SyntaxKind::VariableDeclaration
            | SyntaxKind::ClassDeclaration
            | SyntaxKind::InterfaceDeclaration
            | SyntaxKind::HeritageClause
            | SyntaxKind::PropertyDeclaration
            | SyntaxKind::Constructor
            | SyntaxKind::MethodDeclaration
            | SyntaxKind::Parameter
            | SyntaxKind::Decorator => DeclarationTranslator.visit_node(self, idx),

            SyntaxKind::PropertyAccessExpression
            | SyntaxKind::ElementAccessExpression
            | SyntaxKind::CallExpression
            | SyntaxKind::NewExpression
            | SyntaxKind::BinaryExpression
            | SyntaxKind::ParenthesizedExpression
            | SyntaxKind::ArrayLiteralExpression
            | SyntaxKind::ThisKeyword
            | SyntaxKind::SuperKeyword
            | SyntaxKind::QualifiedName => ExpressionTranslator.visit_node(self, idx),

            SyntaxKind::Identifier
            | SyntaxKind::NumericLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NullKeyword => LiteralTranslator.visit_node(self, idx),

            SyntaxKind::TypeReference
            | SyntaxKind::ArrayType
            | SyntaxKind::TypeParameter
            | SyntaxKind::AnyKeyword
            | SyntaxKind::BooleanKeyword
            | SyntaxKind::NumberKeyword
            | SyntaxKind::StringKeyword
            | SyntaxKind::VoidKeyword => TypeTranslator.visit_node(self, idx),

            // Tokens only appear inside their parent's translation, and the
            // remaining constructs have no Dart rendering yet.
            SyntaxKind::Unknown
            | SyntaxKind::EndOfFileToken
            | SyntaxKind::PlusToken
            | SyntaxKind::MinusToken
            | SyntaxKind::AsteriskToken
            | SyntaxKind::SlashToken
            | SyntaxKind::EqualsToken
            | SyntaxKind::EqualsEqualsEqualsToken
            | SyntaxKind::ExclamationEqualsEqualsToken
            | SyntaxKind::LessThanToken
            | SyntaxKind::GreaterThanToken
            | SyntaxKind::AmpersandAmpersandToken
            | SyntaxKind::BarBarToken
            | SyntaxKind::ExportKeyword
            | SyntaxKind::DeclareKeyword
            | SyntaxKind::AbstractKeyword
            | SyntaxKind::StaticKeyword
            | SyntaxKind::PublicKeyword
            | SyntaxKind::PrivateKeyword
            | SyntaxKind::ProtectedKeyword
            | SyntaxKind::ReadonlyKeyword
            | SyntaxKind::ExtendsKeyword
            | SyntaxKind::ImplementsKeyword
            | SyntaxKind::UnionType
            | SyntaxKind::FunctionType
            | SyntaxKind::ObjectLiteralExpression
            | SyntaxKind::ArrowFunction
            | SyntaxKind::TemplateExpression
            | SyntaxKind::EnumDeclaration
            | SyntaxKind::ModuleDeclaration
            | SyntaxKind::WhileStatement
            | SyntaxKind::ForStatement => UnsupportedSyntax.visit_node(self, idx),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The tree being translated. The returned borrow is independent of
    /// `self`, so node data can be held across `visit` calls.
    #[inline]
    pub fn arena(&self) -> &'a NodeArena {
        self.arena
    }

    /// Node header at `idx`, or `MissingNode` if the index is not in the tree.
    #[inline]
    pub fn node(&self, idx: NodeIndex) -> Result<&'a Node> {
        self.arena
            .get(idx)
            .ok_or(TranspileError::MissingNode { index: idx })
    }

    pub fn options(&self) -> &TranspileOptions {
        &self.options
    }

    /// Name of the library being produced; empty when not configured.
    pub fn library_name(&self) -> &str {
        &self.options.library_name
    }

    /// The configured type checker. Rules only ask when they need an answer,
    /// so a missing service is a hard failure.
    pub fn type_checker(&self) -> Result<&'a dyn TypeChecker> {
        self.type_checker
            .ok_or(TranspileError::TypeCheckerUnavailable)
    }

    /// Output written so far.
    pub fn output(&self) -> &str {
        self.writer.as_str()
    }

    /// Diagnostics reported so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Error for a node kind that the current rule cannot translate.
    pub fn unimplemented(&self, idx: NodeIndex) -> TranspileError {
        match self.arena.get(idx) {
            Some(node) => TranspileError::Unimplemented {
                kind: node.kind,
                file: self.options.file_name.clone(),
                pos: node.pos,
                end: node.end,
            },
            None => TranspileError::MissingNode { index: idx },
        }
    }
}
