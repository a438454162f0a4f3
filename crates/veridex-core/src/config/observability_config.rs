use serde::{Deserialize, Serialize};

use super::defaults;

/// Logging configuration. The filter itself comes from the `VERIDEX_LOG`
/// environment variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Emit JSON log lines instead of human-readable ones.
    pub log_json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_json: defaults::DEFAULT_LOG_JSON,
        }
    }
}
