//! Thin node headers and typed data pools.
//!
//! Each node is a small fixed-size header (`Node`) holding its kind, flags,
//! source range and an index into the data pool for its kind. Kind-specific
//! fields live in typed pools on the [`NodeArena`], so walking headers stays
//! cache friendly and the tree owns every node in one place.
//!
//! Parent links are stored in a parallel `extended_info` vector and are set
//! by the `add_*` constructors when a parent is built over its children
//! (trees are built bottom-up).

use crate::base::{NodeIndex, NodeList};
use crate::flags::NodeFlags;
use crate::syntax_kind::SyntaxKind;
use serde::{Deserialize, Serialize};

/// Fixed-size node header.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub kind: SyntaxKind,
    pub flags: NodeFlags,
    /// Start position in source (character index)
    pub pos: u32,
    /// End position in source (character index)
    pub end: u32,
    /// Index into the kind's storage pool (`u32::MAX` = no data)
    pub data_index: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    #[inline]
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Node {
        Node {
            kind,
            flags: NodeFlags::empty(),
            pos,
            end,
            data_index: Self::NO_DATA,
        }
    }

    #[inline]
    pub fn with_data(kind: SyntaxKind, pos: u32, end: u32, data_index: u32) -> Node {
        Node {
            kind,
            flags: NodeFlags::empty(),
            pos,
            end,
            data_index,
        }
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        self.data_index != Self::NO_DATA
    }

    /// Length of the node's source range.
    #[inline]
    pub fn width(&self) -> u32 {
        self.end.saturating_sub(self.pos)
    }
}

/// Per-node information that is not part of the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedNodeInfo {
    pub parent: NodeIndex,
}

impl Default for ExtendedNodeInfo {
    fn default() -> Self {
        ExtendedNodeInfo {
            parent: NodeIndex::NONE,
        }
    }
}

// =============================================================================
// Typed Data Pools
// =============================================================================

/// Identifier
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentifierData {
    pub escaped_text: String,
}

/// String and numeric literals. `text` is the cooked value without quotes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralData {
    pub text: String,
}

/// `left.right` in type or namespace position.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QualifiedNameData {
    pub left: NodeIndex,
    pub right: NodeIndex,
}

/// `@expression`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DecoratorData {
    pub expression: NodeIndex,
}

/// Call and `new` expressions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CallExprData {
    pub expression: NodeIndex,
    pub type_arguments: Option<NodeList>,
    pub arguments: Option<NodeList>,
}

/// Property access (`a.b`) and element access (`a[b]`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    pub name_or_argument: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BinaryExprData {
    pub left: NodeIndex,
    pub operator_token: SyntaxKind,
    pub right: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParenthesizedData {
    pub expression: NodeIndex,
}

/// Array literal elements.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArrayLiteralData {
    pub elements: NodeList,
}

/// `Name<Args>` in type position.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeRefData {
    pub type_name: NodeIndex,
    pub type_arguments: Option<NodeList>,
}

/// `T[]`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArrayTypeData {
    pub element_type: NodeIndex,
}

/// `T extends C` in a type parameter list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeParameterData {
    pub name: NodeIndex,
    pub constraint: NodeIndex,
}

/// `extends A` / `implements A, B`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeritageData {
    pub token: SyntaxKind,
    pub types: NodeList,
}

/// Variable statement: modifiers plus one declaration list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableData {
    pub modifiers: Option<NodeList>,
    pub declaration_list: NodeIndex,
}

/// `var`/`let`/`const` list; the keyword is carried in the node flags.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableDeclarationListData {
    pub declarations: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableDeclarationData {
    pub name: NodeIndex,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

/// Class and interface declarations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub heritage_clauses: Option<NodeList>,
    pub members: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PropertyDeclData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConstructorData {
    pub modifiers: Option<NodeList>,
    pub parameters: NodeList,
    pub body: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MethodDeclData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub parameters: NodeList,
    pub type_annotation: NodeIndex,
    pub body: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParameterData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockData {
    pub statements: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExprStatementData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReturnData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IfStatementData {
    pub expression: NodeIndex,
    pub then_statement: NodeIndex,
    pub else_statement: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceFileData {
    pub file_name: String,
    pub statements: NodeList,
}

// =============================================================================
// Arena
// =============================================================================

/// Owner of every node of one syntax tree.
///
/// Built once by the front-end through the `add_*` methods, then only read.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
    pub extended_info: Vec<ExtendedNodeInfo>,
    pub identifiers: Vec<IdentifierData>,
    pub literals: Vec<LiteralData>,
    pub qualified_names: Vec<QualifiedNameData>,
    pub decorators: Vec<DecoratorData>,
    pub call_exprs: Vec<CallExprData>,
    pub access_exprs: Vec<AccessExprData>,
    pub binary_exprs: Vec<BinaryExprData>,
    pub parenthesized: Vec<ParenthesizedData>,
    pub array_literals: Vec<ArrayLiteralData>,
    pub type_refs: Vec<TypeRefData>,
    pub array_types: Vec<ArrayTypeData>,
    pub type_parameters: Vec<TypeParameterData>,
    pub heritage_clauses: Vec<HeritageData>,
    pub variables: Vec<VariableData>,
    pub variable_declaration_lists: Vec<VariableDeclarationListData>,
    pub variable_declarations: Vec<VariableDeclarationData>,
    pub classes: Vec<ClassData>,
    pub property_decls: Vec<PropertyDeclData>,
    pub constructors: Vec<ConstructorData>,
    pub method_decls: Vec<MethodDeclData>,
    pub parameters: Vec<ParameterData>,
    pub blocks: Vec<BlockData>,
    pub expr_statements: Vec<ExprStatementData>,
    pub return_data: Vec<ReturnData>,
    pub if_statements: Vec<IfStatementData>,
    pub source_files: Vec<SourceFileData>,
}
