//! Well-known annotation vocabulary.
//!
//! Annotation classes the compiler looks for by name (symbol export, platform interop). Each entry records the
//! annotation's fully qualified name as its canonical spelling plus the names of its constructor parameters, so
//! callers read arguments through these constants rather than string literals.

use super::registry::{LangItemInfo, stable};
use crate::QualifiedName;

/// Stable identifier for a well-known annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationId {
    SymbolName,
    ExportForCppRuntime,
    ExportForCompiler,
    ThreadLocal,
    ObjCMethod,
    ObjCConstructor,
    ExternalObjCClass,
}

/// Parameter of `@SymbolName(name)` and `@ExportForCppRuntime(name)`.
pub const NAME_ARG: &str = "name";

/// Parameter of `@ObjCMethod(selector, bridge)`.
pub const SELECTOR_ARG: &str = "selector";

/// Parameter of `@ObjCMethod(selector, bridge)`.
pub const BRIDGE_ARG: &str = "bridge";

/// Parameter of `@ObjCConstructor(initSelector, designated)`.
pub const INIT_SELECTOR_ARG: &str = "initSelector";

/// Parameter of `@ObjCConstructor(initSelector, designated)`.
pub const DESIGNATED_ARG: &str = "designated";

/// Parameter of `@ExternalObjCClass(protocolGetter, binaryName)`.
pub const PROTOCOL_GETTER_ARG: &str = "protocolGetter";

/// Parameter of `@ExternalObjCClass(protocolGetter, binaryName)`.
pub const BINARY_NAME_ARG: &str = "binaryName";

/// Metadata for a well-known annotation.
#[derive(Debug, Clone, Copy)]
pub struct AnnotationInfo {
    pub info: LangItemInfo<AnnotationId>,
    /// Constructor parameter names, in declaration order.
    pub params: &'static [&'static str],
}

/// Registry of well-known annotations.
pub const ANNOTATIONS: &[AnnotationInfo] = &[
    annotation(
        AnnotationId::SymbolName,
        "native.SymbolName",
        &[NAME_ARG],
        "Bind a declaration to an explicit linker symbol.",
    ),
    annotation(
        AnnotationId::ExportForCppRuntime,
        "native.internal.ExportForCppRuntime",
        &[NAME_ARG],
        "Export a function to the C++ runtime under the given name.",
    ),
    annotation(
        AnnotationId::ExportForCompiler,
        "native.internal.ExportForCompiler",
        &[],
        "Keep a declaration reachable for compiler-generated code.",
    ),
    annotation(
        AnnotationId::ThreadLocal,
        "native.concurrent.ThreadLocal",
        &[],
        "Give a top-level property thread-local storage.",
    ),
    annotation(
        AnnotationId::ObjCMethod,
        "native.interop.ObjCMethod",
        &[SELECTOR_ARG, BRIDGE_ARG],
        "Map a function to an Objective-C method selector.",
    ),
    annotation(
        AnnotationId::ObjCConstructor,
        "native.interop.ObjCConstructor",
        &[INIT_SELECTOR_ARG, DESIGNATED_ARG],
        "Map a constructor to an Objective-C init selector.",
    ),
    annotation(
        AnnotationId::ExternalObjCClass,
        "native.interop.ExternalObjCClass",
        &[PROTOCOL_GETTER_ARG, BINARY_NAME_ARG],
        "Mark a class as implemented in Objective-C.",
    ),
];

/// Resolve a fully qualified annotation name to its stable id.
pub fn from_str(name: &str) -> Option<AnnotationId> {
    ANNOTATIONS.iter().find(|a| a.info.matches(name)).map(|a| a.info.id)
}

/// Return the fully qualified name (canonical spelling) for an annotation.
pub fn as_str(id: AnnotationId) -> &'static str {
    info_for(id).info.canonical
}

/// Return the fully qualified name for an annotation as a [`QualifiedName`].
pub fn fq_name(id: AnnotationId) -> QualifiedName {
    QualifiedName::new(as_str(id))
}

/// Return the constructor parameter names for an annotation.
pub fn params(id: AnnotationId) -> &'static [&'static str] {
    info_for(id).params
}

/// Return the metadata entry for an annotation.
pub fn info_for(id: AnnotationId) -> &'static AnnotationInfo {
    &ANNOTATIONS[id as usize]
}

const fn annotation(
    id: AnnotationId,
    fq_name: &'static str,
    params: &'static [&'static str],
    description: &'static str,
) -> AnnotationInfo {
    AnnotationInfo {
        info: stable(id, fq_name, description),
        params,
    }
}
