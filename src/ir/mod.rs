//! IR node model consumed by constant reification and annotation matching.
//!
//! This is the slice of the backend's typed IR that the reifier reads: expressions (literals, vararg aggregates,
//! calls, and a few opaque shapes), their types, and the declaration handles that calls refer to.
//!
//! ## Notes
//!
//! - Nodes are plain owned data: no back-references into a semantic model. Anything the reifier needs to know
//!   about a declaration is asked through the capability traits in [`crate::descriptors`].
//! - Nodes are never mutated by this crate; they are `Send + Sync` and can be shared across threads.

pub mod decl;
pub mod expr;
pub mod types;

pub use decl::{DeclId, ModuleName, ValueParameter};
pub use expr::{
    CallTarget, ConstPayload, IrCall, IrCatch, IrConst, IrExpr, IrExprKind, TypeOperator, TypeOperatorCall, TypedExpr,
};
pub use irconst_core::ConstKind as IrConstKind;
pub use types::IrType;

/// Source span preserved from the frontend, for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IrSpan {
    pub start: usize,
    pub end: usize,
}

impl IrSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<IrSpan> for miette::SourceSpan {
    fn from(span: IrSpan) -> Self {
        (span.start, span.len()).into()
    }
}
