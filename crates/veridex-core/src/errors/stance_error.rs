/// Stance classification subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum StanceError {
    #[error("model load failed: {path}: {reason}")]
    ModelLoadFailed { path: String, reason: String },

    #[error("classification failed: {reason}")]
    ClassificationFailed { reason: String },

    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("all NLI providers failed")]
    AllProvidersFailed,
}
