//! Syntax tree data model for the tsdart translator.
//!
//! The tree is produced by an external TypeScript front-end and consumed
//! read-only by `tsdart-emitter`. This crate provides:
//! - The closed node taxonomy (`SyntaxKind`) and flag set (`NodeFlags`)
//! - Node handles and lists (`NodeIndex`, `NodeList`)
//! - The `NodeArena` that owns all nodes, with bottom-up `add_*`
//!   constructors that record parent links and typed `get_*` accessors

pub mod base;
pub use base::{NodeIndex, NodeList};

pub mod flags;
pub use flags::NodeFlags;

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

pub mod node;
pub use node::{Node, NodeArena};

mod node_access;
mod node_arena;
