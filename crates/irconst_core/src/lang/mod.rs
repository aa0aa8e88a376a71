//! Vocabulary registries.
//!
//! Callers work with **stable IDs** (e.g. `ConstKind`, `ClassKind`, `AnnotationId`) and look up spellings and
//! metadata via registry tables instead of scattering string comparisons across the compiler.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no IR types, no IO, no side effects.
//!
//! ## Examples
//! ```rust
//! use irconst_core::lang::const_kinds::{self, ConstKind};
//!
//! assert_eq!(const_kinds::from_str("Byte"), Some(ConstKind::Byte));
//! assert_eq!(const_kinds::as_str(ConstKind::Byte), "Byte");
//! ```

pub mod annotations;
pub mod class_kinds;
pub mod const_kinds;
pub mod registry;
