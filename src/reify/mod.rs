//! Constant reification: folding literal IR into typed [`ConstantValue`]s.
//!
//! ## Pipeline position
//!
//! ```text
//! typechecked IR → (annotation / interop passes) → ConstantReifier → ConstantValue
//! ```
//!
//! The passes that consume annotations (symbol export, platform interop) read annotation arguments through the
//! accessors here rather than inspecting IR literals directly.

pub mod arguments;
pub mod config;
pub mod errors;
pub mod reifier;
pub mod value;

pub use arguments::ValueArguments;
pub use config::{DEFAULT_MAX_DEPTH, NarrowingPolicy, ReifyConfig};
pub use errors::ReifyError;
pub use reifier::ConstantReifier;
pub use value::ConstantValue;

use crate::ir::IrExpr;

/// Reify `expr` with the default configuration.
pub fn reify(expr: &IrExpr) -> Result<ConstantValue, ReifyError> {
    ConstantReifier::new().reify(expr)
}
