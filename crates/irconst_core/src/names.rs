//! Fully qualified declaration names.

use std::fmt;

/// Final segment naming a class constructor (`a.b.Ann.<init>`).
pub const CONSTRUCTOR_MARKER: &str = "<init>";

/// Segment separator in a [`QualifiedName`].
pub const SEPARATOR: char = '.';

/// A dot-separated fully qualified name, e.g. `native.interop.ObjCMethod`.
///
/// The empty name is the root package. Equality is exact string equality, so `a.B` and `a.BX` never compare
/// equal and neither do `a.B.<init>` and `a.BX.<init>`.
///
/// ## Examples
/// ```rust
/// use irconst_core::QualifiedName;
///
/// let ann = QualifiedName::new("native.SymbolName");
/// assert_eq!(ann.constructor().as_str(), "native.SymbolName.<init>");
/// assert_eq!(ann.short_name(), "SymbolName");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct QualifiedName(String);

impl QualifiedName {
    /// The root (empty) name.
    pub const fn root() -> Self {
        Self(String::new())
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the name's segments, outermost first. The root name has none.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR).filter(|s| !s.is_empty())
    }

    /// Append one segment.
    pub fn child(&self, segment: &str) -> Self {
        if self.is_root() {
            Self(segment.to_string())
        } else {
            Self(format!("{}{}{}", self.0, SEPARATOR, segment))
        }
    }

    /// Drop the last segment. Returns `None` for the root name.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        Some(match self.0.rfind(SEPARATOR) {
            Some(idx) => Self(self.0[..idx].to_string()),
            None => Self::root(),
        })
    }

    /// The last segment (empty for the root name).
    pub fn short_name(&self) -> &str {
        match self.0.rfind(SEPARATOR) {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }

    /// The name of this class's constructor: `self` joined with [`CONSTRUCTOR_MARKER`].
    pub fn constructor(&self) -> Self {
        self.child(CONSTRUCTOR_MARKER)
    }

    pub fn is_constructor(&self) -> bool {
        self.short_name() == CONSTRUCTOR_MARKER
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QualifiedName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for QualifiedName {
    fn from(name: String) -> Self {
        Self(name)
    }
}
