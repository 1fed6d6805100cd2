//! Translator configuration.

use serde::{Deserialize, Serialize};

/// Default limit on parse-tree nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options controlling a [`Translator`](crate::Translator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Deepest parse-node nesting translated before failing with a
    /// depth-exceeded error.
    pub max_depth: usize,
}

impl TranslatorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(TranslatorConfig::default().max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(TranslatorConfig::new().with_max_depth(8).max_depth, 8);
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let config: TranslatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TranslatorConfig::default());

        let config: TranslatorConfig = serde_json::from_str(r#"{"max_depth": 16}"#).unwrap();
        assert_eq!(config.max_depth, 16);
    }
}
