//! Translation rules, one per family of node kinds.
//!
//! The driver in [`crate::transpiler`] routes each `SyntaxKind` to exactly
//! one of these. Rules only talk to the `Transpiler` they are given.

use crate::error::Result;
use crate::transpiler::{Transpiler, TranspilerStep};
use tsdart_syntax::NodeIndex;

mod declarations;
mod expressions;
mod facade;
mod literals;
mod statements;
mod types;

pub use declarations::DeclarationTranslator;
pub use expressions::ExpressionTranslator;
pub use facade::FacadeConverter;
pub use literals::LiteralTranslator;
pub use statements::StatementTranslator;
pub use types::TypeTranslator;

/// Catch-all for kinds with no Dart rendering; always fails with
/// `Unimplemented`.
pub struct UnsupportedSyntax;

impl TranspilerStep for UnsupportedSyntax {}

/// Typed data of the node at `idx`. A header whose pool entry is missing
/// cannot be translated.
#[inline]
fn require<'d, T>(t: &Transpiler<'_>, idx: NodeIndex, data: Option<&'d T>) -> Result<&'d T> {
    data.ok_or_else(|| t.unimplemented(idx))
}
