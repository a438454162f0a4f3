use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recorded when a provider chain falls past its preferred provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegradationEvent {
    /// Provider that failed or was unavailable.
    pub from_provider: String,
    /// Provider the chain fell back to.
    pub to_provider: String,
    pub reason: String,
    pub timestamp: DateTime<Utc>,
}

impl DegradationEvent {
    pub fn now(
        from_provider: impl Into<String>,
        to_provider: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            from_provider: from_provider.into(),
            to_provider: to_provider.into(),
            reason: reason.into(),
            timestamp: Utc::now(),
        }
    }
}
