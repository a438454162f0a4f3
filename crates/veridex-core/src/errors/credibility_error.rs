/// Credibility subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum CredibilityError {
    #[error("credibility dataset not found: {path}")]
    DatasetMissing { path: String },

    #[error("credibility dataset unparseable: {path}: {reason}")]
    DatasetParse { path: String, reason: String },
}
