//! Traversal and emission core of the TypeScript to Dart translator.
//!
//! Given a syntax tree in a [`NodeArena`](tsdart_syntax::NodeArena), a
//! [`Transpiler`] walks it depth first and writes Dart text, rewriting
//! built-in type names and collection operations on the way.
//!
//! ```ignore
//! let checker = DeclaredTypeChecker::new();
//! let mut transpiler = Transpiler::new(&arena, TranspileOptions::new("a.ts"))
//!     .with_type_checker(&checker);
//! let output = transpiler.translate(root)?;
//! ```

pub mod annotations;
pub mod error;
pub mod ident;
pub mod queries;
pub mod rules;
pub mod source_writer;
pub mod transpiler;
pub mod type_checker;
pub mod type_names;

pub use error::{Result, TranspileError};
pub use ident::ident;
pub use source_writer::SourceWriter;
pub use transpiler::{TranslationOutput, Transpiler, TranspilerStep};
pub use type_checker::{DeclaredTypeChecker, TypeChecker};
pub use type_names::remap_type_name;
