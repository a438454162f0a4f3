pub mod credibility_config;
pub mod defaults;
pub mod observability_config;
pub mod pipeline_config;
pub mod relevance_config;
pub mod stance_config;

pub use credibility_config::CredibilityConfig;
pub use observability_config::ObservabilityConfig;
pub use pipeline_config::PipelineConfig;
pub use relevance_config::RelevanceConfig;
pub use stance_config::StanceConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{VeridexError, VeridexResult};

/// Top-level configuration, one section per subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VeridexConfig {
    pub credibility: CredibilityConfig,
    pub relevance: RelevanceConfig,
    pub stance: StanceConfig,
    pub pipeline: PipelineConfig,
    pub observability: ObservabilityConfig,
}

impl VeridexConfig {
    /// Load configuration from a TOML file. A missing file yields defaults;
    /// an unparseable file is an error.
    pub fn load(path: impl AsRef<Path>) -> VeridexResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| VeridexError::Config {
            reason: format!("{}: {e}", path.display()),
        })
    }
}
