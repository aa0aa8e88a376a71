//! Class kind vocabulary.

use super::registry::{LangItemInfo, stable};

/// Stable identifier for the kind of a class-like declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    Interface,
    EnumClass,
    EnumEntry,
    AnnotationClass,
    Object,
}

/// Metadata entry for a class kind.
pub type ClassKindInfo = LangItemInfo<ClassKind>;

/// Registry of class kinds.
pub const CLASS_KINDS: &[ClassKindInfo] = &[
    stable(ClassKind::Class, "class", "An ordinary class."),
    stable(ClassKind::Interface, "interface", "An interface."),
    stable(ClassKind::EnumClass, "enum class", "An enum class."),
    stable(ClassKind::EnumEntry, "enum entry", "An entry of an enum class."),
    stable(
        ClassKind::AnnotationClass,
        "annotation class",
        "A class whose instances attach metadata to other declarations via constructor calls.",
    ),
    stable(ClassKind::Object, "object", "A singleton object declaration."),
];

impl ClassKind {
    pub fn is_annotation(self) -> bool {
        self == ClassKind::AnnotationClass
    }
}

impl std::fmt::Display for ClassKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(as_str(*self))
    }
}

/// Resolve a class kind spelling to its stable id.
pub fn from_str(name: &str) -> Option<ClassKind> {
    CLASS_KINDS.iter().find(|k| k.matches(name)).map(|k| k.id)
}

/// Return the canonical spelling for a class kind.
pub fn as_str(id: ClassKind) -> &'static str {
    info_for(id).canonical
}

/// Return the metadata entry for a class kind.
pub fn info_for(id: ClassKind) -> &'static ClassKindInfo {
    &CLASS_KINDS[id as usize]
}
