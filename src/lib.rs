#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
//! IR constant reification and annotation-call matching.
//!
//! This crate sits between the backend's typed IR and the passes that read compile-time metadata from it
//! (symbol export, platform interop). It provides:
//!
//! - [`reify`]: folding literal and vararg IR nodes into typed [`ConstantValue`]s, and reading constant arguments
//!   off call sites by parameter name;
//! - [`annotations`]: deciding whether a call site applies a given annotation class, and searching annotation
//!   lists;
//! - [`descriptors`]: the narrow capability traits through which both ask questions of the semantic model.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **Internal consistency**: an annotation candidate that constructs a non-annotation class is a compiler bug and
//!   trips a `debug_assert!`; release builds treat it as a non-match.

pub mod annotations;
pub mod descriptors;
pub mod ir;
pub mod reify;

pub use annotations::{AnnotationCallRecord, AnnotationMatcher, any_matches, find_first_match, is_annotation_call};
pub use descriptors::{DescriptorModel, DescriptorTable};
pub use reify::{ConstantReifier, ConstantValue, ReifyConfig, ReifyError};

pub use irconst_core::{ClassKind, ConstKind, QualifiedName};
