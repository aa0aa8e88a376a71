//! Annotation-call matching.
//!
//! An annotation application is a constructor call to an annotation class. Matching compares the constructor's
//! fully qualified name against `<annotation fq name>.<init>`, so `a.Ann` never matches `a.AnnX` or `x.a.Ann`.
//!
//! Candidate lists are expected to contain only annotation-class constructor calls. A constructor of any other
//! class kind is a compiler bug upstream and trips a debug assertion; release builds treat it as a non-match.

use crate::descriptors::{ClassKindQuery, DeclarationMetadata, FqNameResolver};
use crate::ir::{DeclId, IrCall};
use irconst_core::QualifiedName;
use irconst_core::lang::annotations::{self, AnnotationId};

/// A call site paired with the fully qualified name of the annotation constructor it invokes.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationCallRecord<'a> {
    pub call: &'a IrCall,
    pub constructor_fq_name: QualifiedName,
}

impl AnnotationCallRecord<'_> {
    /// The annotation class's fully qualified name (constructor name minus the marker).
    pub fn annotation_fq_name(&self) -> Option<QualifiedName> {
        self.constructor_fq_name.parent()
    }
}

/// Resolve `call` to an annotation call record.
///
/// `None` when the call does not target a constructor, the constructed class is not an annotation class, or the
/// model cannot name the constructor.
pub fn annotation_call_record<'a, M>(call: &'a IrCall, model: &M) -> Option<AnnotationCallRecord<'a>>
where
    M: ClassKindQuery + FqNameResolver + ?Sized,
{
    let Some(ctor) = call.target.constructor() else {
        tracing::trace!(callee = %call.target.callee(), "annotation candidate is not a constructor call");
        return None;
    };
    let kind = model.constructed_class(ctor).and_then(|class| model.kind_of(class));
    if let Some(kind) = kind {
        debug_assert!(
            kind.is_annotation(),
            "annotation candidate {} constructs a `{}`, not an annotation class",
            ctor,
            kind
        );
    }
    if !kind.is_some_and(|k| k.is_annotation()) {
        return None;
    }

    Some(AnnotationCallRecord {
        call,
        constructor_fq_name: model.fq_name_of(ctor)?,
    })
}

/// Predicate for calls to one annotation class's constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationMatcher {
    constructor_fq_name: QualifiedName,
}

impl AnnotationMatcher {
    /// Match calls to the constructor of the annotation class named `fq_name`.
    pub fn new(fq_name: &QualifiedName) -> Self {
        Self {
            constructor_fq_name: fq_name.constructor(),
        }
    }

    pub fn well_known(id: AnnotationId) -> Self {
        Self::new(&annotations::fq_name(id))
    }

    pub fn matches<M>(&self, call: &IrCall, model: &M) -> bool
    where
        M: ClassKindQuery + FqNameResolver + ?Sized,
    {
        annotation_call_record(call, model)
            .is_some_and(|record| record.constructor_fq_name == self.constructor_fq_name)
    }
}

/// Whether `call` applies the annotation named `fq_name`.
pub fn is_annotation_call<M>(call: &IrCall, fq_name: &QualifiedName, model: &M) -> bool
where
    M: ClassKindQuery + FqNameResolver + ?Sized,
{
    AnnotationMatcher::new(fq_name).matches(call, model)
}

/// Whether any of `calls` applies the annotation named `fq_name`.
pub fn any_matches<'c, M>(calls: impl IntoIterator<Item = &'c IrCall>, fq_name: &QualifiedName, model: &M) -> bool
where
    M: ClassKindQuery + FqNameResolver + ?Sized,
{
    let matcher = AnnotationMatcher::new(fq_name);
    calls.into_iter().any(|call| matcher.matches(call, model))
}

/// The first of `calls`, in sequence order, that applies the annotation named `fq_name`.
#[tracing::instrument(level = "trace", skip_all, fields(annotation = %fq_name))]
pub fn find_first_match<'c, M>(
    calls: impl IntoIterator<Item = &'c IrCall>,
    fq_name: &QualifiedName,
    model: &M,
) -> Option<&'c IrCall>
where
    M: ClassKindQuery + FqNameResolver + ?Sized,
{
    let matcher = AnnotationMatcher::new(fq_name);
    calls.into_iter().find(|call| matcher.matches(call, model))
}

/// The first of `calls` applying a well-known annotation.
pub fn find_well_known<'c, M>(
    calls: impl IntoIterator<Item = &'c IrCall>,
    id: AnnotationId,
    model: &M,
) -> Option<&'c IrCall>
where
    M: ClassKindQuery + FqNameResolver + ?Sized,
{
    find_first_match(calls, &annotations::fq_name(id), model)
}

/// Whether `decl` carries the annotation named `fq_name`.
pub fn has_annotation<M>(decl: DeclId, fq_name: &QualifiedName, model: &M) -> bool
where
    M: DeclarationMetadata + ClassKindQuery + FqNameResolver + ?Sized,
{
    any_matches(model.annotations_of(decl), fq_name, model)
}

/// The first application of the annotation named `fq_name` on `decl`.
pub fn find_annotation<'m, M>(decl: DeclId, fq_name: &QualifiedName, model: &'m M) -> Option<&'m IrCall>
where
    M: DeclarationMetadata + ClassKindQuery + FqNameResolver + ?Sized,
{
    find_first_match(model.annotations_of(decl), fq_name, model)
}
