//! Shareable metadata for `irconst_core::lang` registries.
//!
//! This submodule provides the small, dependency-free metadata types reused across all registries.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in `const` tables.

/// Identify the version a vocabulary item is available since (free-form, e.g. `"0.1.0"`).
pub type SinceVersion = &'static str;

/// Describe the lifecycle status of a vocabulary item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Deprecated,
}

/// Shared metadata shape for “registry-first” vocabulary items.
///
/// Registries that need extra per-item data (e.g. bit widths, parameter names) wrap this struct in an
/// “extension” info type.
///
/// ## Notes
/// - `description` is mandatory to keep docs/tooling consistent.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub since_version: Option<SinceVersion>,
    pub stability: Stability,
}

impl<Id> LangItemInfo<Id> {
    /// Whether `name` is this item's canonical spelling or one of its aliases.
    pub fn matches(&self, name: &str) -> bool {
        self.canonical == name || self.aliases.contains(&name)
    }
}

/// Build a stable registry entry with no aliases.
pub const fn stable<Id>(id: Id, canonical: &'static str, description: &'static str) -> LangItemInfo<Id> {
    LangItemInfo {
        id,
        canonical,
        aliases: &[],
        description,
        since_version: Some("0.1.0"),
        stability: Stability::Stable,
    }
}
