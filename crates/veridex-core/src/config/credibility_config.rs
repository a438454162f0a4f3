use serde::{Deserialize, Serialize};

use super::defaults;

/// Credibility subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CredibilityConfig {
    /// Path to the source-credibility dataset.
    pub dataset_path: String,
}

impl Default for CredibilityConfig {
    fn default() -> Self {
        Self {
            dataset_path: defaults::DEFAULT_DATASET_PATH.to_string(),
        }
    }
}
