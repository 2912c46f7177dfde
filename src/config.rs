//! Engine configuration.
//!
//! Kept serde-friendly and cheap to clone so it can be embedded in
//! higher-level service configs.

use serde::{Deserialize, Serialize};

/// Tuning knobs for [`MatchingEngine`](crate::MatchingEngine).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of title suggestions returned per query.
    #[serde(default = "EngineConfig::default_suggest_limit")]
    pub suggest_limit: usize,
}

impl EngineConfig {
    pub(crate) fn default_suggest_limit() -> usize {
        10
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            suggest_limit: Self::default_suggest_limit(),
        }
    }
}
