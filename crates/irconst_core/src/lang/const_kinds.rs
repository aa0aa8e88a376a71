//! Literal (constant) kind vocabulary.
//!
//! The closed set of kinds a literal IR node may carry. Each kind maps to exactly one constant-value variant.
//!
//! ## Notes
//! - `bits` is the storage width of the kind's value; `None` for kinds without a numeric width (`String`, `Null`).

use super::registry::{LangItemInfo, stable};

/// Stable identifier for a literal kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    String,
    Null,
}

/// Metadata for a literal kind.
#[derive(Debug, Clone, Copy)]
pub struct ConstKindInfo {
    pub info: LangItemInfo<ConstKind>,
    pub bits: Option<u32>,
}

/// Registry of all literal kinds.
pub const CONST_KINDS: &[ConstKindInfo] = &[
    kind(ConstKind::Boolean, "Boolean", Some(1), "Boolean literal (`true` / `false`)."),
    kind(ConstKind::Byte, "Byte", Some(8), "Signed 8-bit integer literal."),
    kind(ConstKind::Short, "Short", Some(16), "Signed 16-bit integer literal."),
    kind(ConstKind::Int, "Int", Some(32), "Signed 32-bit integer literal."),
    kind(ConstKind::Long, "Long", Some(64), "Signed 64-bit integer literal."),
    kind(ConstKind::Char, "Char", Some(32), "Character literal (a Unicode scalar value)."),
    kind(ConstKind::Float, "Float", Some(32), "IEEE-754 single-precision literal."),
    kind(ConstKind::Double, "Double", Some(64), "IEEE-754 double-precision literal."),
    kind(ConstKind::String, "String", None, "String literal."),
    kind(ConstKind::Null, "Null", None, "The null literal; carries no payload."),
];

impl ConstKind {
    /// Whether this kind is one of the signed integer kinds.
    pub fn is_integral(self) -> bool {
        matches!(self, ConstKind::Byte | ConstKind::Short | ConstKind::Int | ConstKind::Long)
    }

    pub fn is_floating(self) -> bool {
        matches!(self, ConstKind::Float | ConstKind::Double)
    }
}

impl std::fmt::Display for ConstKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(as_str(*self))
    }
}

/// Resolve a kind spelling to its stable id.
pub fn from_str(name: &str) -> Option<ConstKind> {
    CONST_KINDS.iter().find(|k| k.info.matches(name)).map(|k| k.info.id)
}

/// Return the canonical spelling for a kind.
pub fn as_str(id: ConstKind) -> &'static str {
    info_for(id).info.canonical
}

/// Return the storage width in bits for a kind, if it has one.
pub fn bits(id: ConstKind) -> Option<u32> {
    info_for(id).bits
}

/// Return the metadata entry for a kind.
pub fn info_for(id: ConstKind) -> &'static ConstKindInfo {
    // Table order follows the enum's declaration order.
    &CONST_KINDS[id as usize]
}

const fn kind(id: ConstKind, canonical: &'static str, bits: Option<u32>, description: &'static str) -> ConstKindInfo {
    ConstKindInfo {
        info: stable(id, canonical, description),
        bits,
    }
}
