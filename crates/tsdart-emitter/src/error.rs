//! Fatal translation errors.
//!
//! These abort a run. Recoverable problems are reported as
//! [`Diagnostic`](tsdart_common::Diagnostic)s instead and never surface here.

use thiserror::Error;
use tsdart_syntax::{NodeIndex, SyntaxKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranspileError {
    /// A node kind reached a rule that has no translation for it.
    #[error("{file}({pos}): unsupported syntax kind {kind:?} (range {pos}..{end})")]
    Unimplemented {
        kind: SyntaxKind,
        file: String,
        pos: u32,
        end: u32,
    },

    /// A rule queried the type checker but none was configured for the run.
    #[error("type checker requested, but none available")]
    TypeCheckerUnavailable,

    /// A child index that is not part of the arena.
    #[error("node {index:?} is not in the syntax tree")]
    MissingNode { index: NodeIndex },
}

pub type Result<T> = std::result::Result<T, TranspileError>;
