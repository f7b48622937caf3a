//! Node flag bits.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Boolean node properties set by the parser. The translator only reads them.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct NodeFlags: u16 {
        /// Variable declaration list declared with `let`.
        const LET = 1 << 0;
        /// Variable declaration list declared with `const`.
        const CONST = 1 << 1;
        /// Declaration is exported from its module.
        const EXPORT_CONTEXT = 1 << 2;
        /// Declaration is inside an ambient (`declare`) context.
        const AMBIENT = 1 << 3;
        /// Optional parameter or property (`x?: T`).
        const OPTIONAL = 1 << 4;

        const BLOCK_SCOPED = Self::LET.bits() | Self::CONST.bits();
    }
}
