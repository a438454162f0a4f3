use serde::{Deserialize, Serialize};

use super::defaults;

/// Stance classification subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StanceConfig {
    /// Path to the ONNX NLI cross-encoder model. None → the chain starts
    /// at the lexical fallback.
    pub model_path: Option<String>,
    /// Apply the lexical-cue override when the NLI label is neutral.
    pub cue_override: bool,
}

impl Default for StanceConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            cue_override: defaults::DEFAULT_CUE_OVERRIDE,
        }
    }
}
