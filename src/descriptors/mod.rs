//! Descriptor-model capabilities.
//!
//! The reifier never walks a semantic model on its own. Every question it has about a declaration (its fully
//! qualified name, its parameters, what kind of class it is, its annotations) is asked through one of the narrow
//! traits below, passed explicitly into each operation.
//!
//! ## Notes
//!
//! - Implementations must be pure lookups: same handle, same answer.
//! - [`DescriptorTable`] is an in-memory implementation for embedders without a full semantic model, and for tests.

pub mod table;

pub use table::DescriptorTable;

use crate::ir::{DeclId, IrCall, ModuleName, ValueParameter};
use irconst_core::{ClassKind, QualifiedName};

/// Per-declaration metadata flags and annotations.
pub trait DeclarationMetadata {
    /// Annotation applications on `decl`, in source order. Each is a constructor call.
    fn annotations_of(&self, decl: DeclId) -> &[IrCall];

    fn is_external(&self, decl: DeclId) -> bool;

    /// Whether `decl` is declared inside a function body (or other non-member scope).
    fn is_local(&self, decl: DeclId) -> bool;

    fn is_anonymous_object(&self, decl: DeclId) -> bool;

    /// Whether a field is the backing field of a delegated property.
    fn is_delegated_field(&self, decl: DeclId) -> bool;

    fn owning_module(&self, decl: DeclId) -> Option<&ModuleName>;
}

/// Formal parameter lists of callees.
pub trait ParameterLookup {
    /// `None` when the callee is unknown to the model.
    fn formal_parameters_of(&self, callee: DeclId) -> Option<&[ValueParameter]>;
}

/// Class-kind queries.
pub trait ClassKindQuery {
    fn kind_of(&self, class: DeclId) -> Option<ClassKind>;

    /// The class a constructor builds.
    fn constructed_class(&self, ctor: DeclId) -> Option<DeclId>;
}

/// Fully qualified names of declarations.
pub trait FqNameResolver {
    fn fq_name_of(&self, decl: DeclId) -> Option<QualifiedName>;
}

/// Everything the reifier and annotation matchers can ask of a descriptor model.
pub trait DescriptorModel: DeclarationMetadata + ParameterLookup + ClassKindQuery + FqNameResolver {}

impl<T> DescriptorModel for T where T: DeclarationMetadata + ParameterLookup + ClassKindQuery + FqNameResolver {}
