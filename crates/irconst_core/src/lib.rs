//! Provide the pure, shared vocabulary used by IR constant reification and annotation matching.
//!
//! This crate is intentionally small and dependency-free. It contains:
//! - [`QualifiedName`], the dot-separated fully qualified name of a declaration;
//! - registry-first vocabularies in [`lang`]: constant (literal) kinds, class kinds, and well-known annotations.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, no logging, and no IR types.
//! - Callers work with stable ids (e.g. `ConstKind`, `AnnotationId`) instead of string comparisons.

pub mod lang;
pub mod names;

pub use lang::class_kinds::ClassKind;
pub use lang::const_kinds::ConstKind;
pub use names::{CONSTRUCTOR_MARKER, QualifiedName};
