//! Engine configuration types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Revision used when the board revision cannot be fetched
pub const DEFAULT_FALLBACK_REVISION: u8 = 3;

/// Allocation engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Reject every click (display only)
    pub readonly: bool,
    /// Board revision assumed when the revision fetch fails
    pub fallback_revision: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfig {
    /// Create an editable configuration
    pub const fn new() -> Self {
        Self {
            readonly: false,
            fallback_revision: DEFAULT_FALLBACK_REVISION,
        }
    }

    /// Create a display-only configuration
    pub const fn readonly() -> Self {
        Self {
            readonly: true,
            fallback_revision: DEFAULT_FALLBACK_REVISION,
        }
    }

    /// Override the fallback revision
    pub const fn with_fallback_revision(self, revision: u8) -> Self {
        Self {
            readonly: self.readonly,
            fallback_revision: revision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config() {
        let config = EngineConfig::default();
        assert!(!config.readonly);
        assert_eq!(config.fallback_revision, DEFAULT_FALLBACK_REVISION);

        let readonly = EngineConfig::readonly().with_fallback_revision(2);
        assert!(readonly.readonly);
        assert_eq!(readonly.fallback_revision, 2);
    }
}
