//! Declaration handles.
//!
//! The IR refers to declarations (classes, constructors, functions, fields) by opaque [`DeclId`] handles. What a
//! handle *means* is owned by the descriptor model; see [`crate::descriptors`].

use std::fmt;

/// Opaque handle to a declaration in the descriptor model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclId(pub u32);

impl fmt::Display for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decl#{}", self.0)
    }
}

/// A formal value parameter of a callee: its name and its argument slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueParameter {
    pub name: String,
    pub index: usize,
}

impl ValueParameter {
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

/// Name of the module (compilation unit or library) a declaration belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleName(pub String);

impl ModuleName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
