//! IR type definitions
//!
//! Resolved types attached to IR expressions. Only as much structure as the reifier and the class lookups need.

use super::DeclId;
use irconst_core::ConstKind;

/// IR type representation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IrType {
    // Primitives
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    String,

    /// Type of the `null` literal.
    Null,

    /// A class type (`Foo` or `Foo?`).
    Class { class: DeclId, nullable: bool },

    /// Array (also the type of a vararg aggregate).
    Array(Box<IrType>),

    // Unknown (for error recovery)
    #[default]
    Unknown,
}

impl IrType {
    /// The type of a literal of the given kind.
    pub fn of_const_kind(kind: ConstKind) -> Self {
        match kind {
            ConstKind::Boolean => IrType::Boolean,
            ConstKind::Byte => IrType::Byte,
            ConstKind::Short => IrType::Short,
            ConstKind::Int => IrType::Int,
            ConstKind::Long => IrType::Long,
            ConstKind::Char => IrType::Char,
            ConstKind::Float => IrType::Float,
            ConstKind::Double => IrType::Double,
            ConstKind::String => IrType::String,
            ConstKind::Null => IrType::Null,
        }
    }

    pub fn class(class: DeclId) -> Self {
        IrType::Class { class, nullable: false }
    }

    /// The class declaration behind this type, if it is a class type.
    pub fn class_id(&self) -> Option<DeclId> {
        match self {
            IrType::Class { class, .. } => Some(*class),
            _ => None,
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, IrType::Null | IrType::Class { nullable: true, .. })
    }
}
