//! Reification configuration.

/// How a stored literal payload is narrowed to its kind's width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NarrowingPolicy {
    /// Keep the low-order bits (integers) or convert with `as f32` (floats). Payloads built through the typed
    /// `IrConst` constructors always fit, so this never changes their value.
    #[default]
    Wrap,
    /// Reject payloads that do not fit the kind exactly.
    Strict,
}

/// Default limit on vararg nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Reifier configuration
#[derive(Debug, Clone)]
pub struct ReifyConfig {
    pub narrowing: NarrowingPolicy,
    /// Deepest vararg nesting accepted; the top-level expression is depth 0.
    pub max_depth: usize,
}

impl Default for ReifyConfig {
    fn default() -> Self {
        Self {
            narrowing: NarrowingPolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ReifyConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the narrowing policy
    pub fn with_narrowing(mut self, narrowing: NarrowingPolicy) -> Self {
        self.narrowing = narrowing;
        self
    }

    /// Set the deepest accepted vararg nesting
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Shorthand for `ReifyConfig::new().with_narrowing(NarrowingPolicy::Strict)`.
    pub fn strict() -> Self {
        Self::new().with_narrowing(NarrowingPolicy::Strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_wraps() {
        assert_eq!(ReifyConfig::default().narrowing, NarrowingPolicy::Wrap);
        assert_eq!(ReifyConfig::default().max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_with_narrowing() {
        assert_eq!(ReifyConfig::strict().narrowing, NarrowingPolicy::Strict);
        let config = ReifyConfig::strict().with_narrowing(NarrowingPolicy::Wrap);
        assert_eq!(config.narrowing, NarrowingPolicy::Wrap);
        assert_eq!(ReifyConfig::strict().with_max_depth(3).max_depth, 3);
    }
}
