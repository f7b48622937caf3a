//! The closed taxonomy of syntax node kinds.
//!
//! Every node in a [`NodeArena`](crate::NodeArena) carries exactly one
//! `SyntaxKind`. The enum is closed on purpose: consumers dispatch with an
//! exhaustive `match`, so adding a kind forces every dispatcher to decide
//! how to handle it.

use serde::{Deserialize, Serialize};

#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxKind {
    Unknown,
    EndOfFileToken,

    // Literals
    NumericLiteral,
    StringLiteral,

    // Names
    Identifier,
    QualifiedName,

    // Punctuation and operators
    PlusToken,
    MinusToken,
    AsteriskToken,
    SlashToken,
    EqualsToken,
    EqualsEqualsEqualsToken,
    ExclamationEqualsEqualsToken,
    LessThanToken,
    GreaterThanToken,
    AmpersandAmpersandToken,
    BarBarToken,

    // Value keywords
    TrueKeyword,
    FalseKeyword,
    NullKeyword,
    ThisKeyword,
    SuperKeyword,

    // Modifier and clause keywords
    ExportKeyword,
    DeclareKeyword,
    AbstractKeyword,
    StaticKeyword,
    PublicKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    ReadonlyKeyword,
    ExtendsKeyword,
    ImplementsKeyword,

    // Type keywords
    AnyKeyword,
    BooleanKeyword,
    NumberKeyword,
    StringKeyword,
    VoidKeyword,

    // Type nodes
    TypeParameter,
    TypeReference,
    ArrayType,
    UnionType,
    FunctionType,

    // Expressions
    ArrayLiteralExpression,
    ObjectLiteralExpression,
    PropertyAccessExpression,
    ElementAccessExpression,
    CallExpression,
    NewExpression,
    ParenthesizedExpression,
    BinaryExpression,
    ArrowFunction,
    TemplateExpression,

    // Class members and declaration parts
    Decorator,
    Parameter,
    PropertyDeclaration,
    MethodDeclaration,
    Constructor,
    HeritageClause,

    // Declarations
    VariableDeclaration,
    VariableDeclarationList,
    ClassDeclaration,
    InterfaceDeclaration,
    EnumDeclaration,
    ModuleDeclaration,

    // Statements
    Block,
    VariableStatement,
    EmptyStatement,
    ExpressionStatement,
    IfStatement,
    ReturnStatement,
    WhileStatement,
    ForStatement,

    SourceFile,
}

impl SyntaxKind {
    /// Source text of a punctuation or keyword token, `None` for composite kinds.
    pub const fn token_text(self) -> Option<&'static str> {
        let text = match self {
            SyntaxKind::PlusToken => "+",
            SyntaxKind::MinusToken => "-",
            SyntaxKind::AsteriskToken => "*",
            SyntaxKind::SlashToken => "/",
            SyntaxKind::EqualsToken => "=",
            SyntaxKind::EqualsEqualsEqualsToken => "===",
            SyntaxKind::ExclamationEqualsEqualsToken => "!==",
            SyntaxKind::LessThanToken => "<",
            SyntaxKind::GreaterThanToken => ">",
            SyntaxKind::AmpersandAmpersandToken => "&&",
            SyntaxKind::BarBarToken => "||",
            SyntaxKind::TrueKeyword => "true",
            SyntaxKind::FalseKeyword => "false",
            SyntaxKind::NullKeyword => "null",
            SyntaxKind::ThisKeyword => "this",
            SyntaxKind::SuperKeyword => "super",
            SyntaxKind::ExportKeyword => "export",
            SyntaxKind::DeclareKeyword => "declare",
            SyntaxKind::AbstractKeyword => "abstract",
            SyntaxKind::StaticKeyword => "static",
            SyntaxKind::PublicKeyword => "public",
            SyntaxKind::PrivateKeyword => "private",
            SyntaxKind::ProtectedKeyword => "protected",
            SyntaxKind::ReadonlyKeyword => "readonly",
            SyntaxKind::ExtendsKeyword => "extends",
            SyntaxKind::ImplementsKeyword => "implements",
            SyntaxKind::AnyKeyword => "any",
            SyntaxKind::BooleanKeyword => "boolean",
            SyntaxKind::NumberKeyword => "number",
            SyntaxKind::StringKeyword => "string",
            SyntaxKind::VoidKeyword => "void",
            _ => return None,
        };
        Some(text)
    }

    /// Binary operator tokens accepted by `BinaryExpression`.
    pub const fn is_binary_operator(self) -> bool {
        matches!(
            self,
            SyntaxKind::PlusToken
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
        )
    }

    pub const fn is_modifier(self) -> bool {
        matches!(
            self,
            SyntaxKind::ExportKeyword
                | SyntaxKind::DeclareKeyword
                | SyntaxKind::AbstractKeyword
                | SyntaxKind::StaticKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::ReadonlyKeyword
        )
    }

    pub const fn is_type_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::AnyKeyword
                | SyntaxKind::BooleanKeyword
                | SyntaxKind::NumberKeyword
                | SyntaxKind::StringKeyword
                | SyntaxKind::VoidKeyword
        )
    }

    pub const fn is_class_like(self) -> bool {
        matches!(
            self,
            SyntaxKind::ClassDeclaration | SyntaxKind::InterfaceDeclaration
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_text() {
        assert_eq!(SyntaxKind::NumberKeyword.token_text(), Some("number"));
        assert_eq!(SyntaxKind::EqualsEqualsEqualsToken.token_text(), Some("==="));
        assert_eq!(SyntaxKind::CallExpression.token_text(), None);
    }

    #[test]
    fn test_classification() {
        assert!(SyntaxKind::PlusToken.is_binary_operator());
        assert!(!SyntaxKind::Identifier.is_binary_operator());
        assert!(SyntaxKind::StaticKeyword.is_modifier());
        assert!(SyntaxKind::VoidKeyword.is_type_keyword());
        assert!(SyntaxKind::InterfaceDeclaration.is_class_like());
        assert!(!SyntaxKind::EnumDeclaration.is_class_like());
    }
}
