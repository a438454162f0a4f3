pub mod credibility_error;
pub mod pipeline_error;
pub mod relevance_error;
pub mod stance_error;

pub use credibility_error::CredibilityError;
pub use pipeline_error::PipelineError;
pub use relevance_error::RelevanceError;
pub use stance_error::StanceError;

/// Unified error type for the whole workspace.
///
/// Each subsystem defines its own error enum; they all convert into this
/// via `From` so `?` works across crate boundaries.
#[derive(Debug, thiserror::Error)]
pub enum VeridexError {
    #[error(transparent)]
    Credibility(#[from] CredibilityError),

    #[error(transparent)]
    Relevance(#[from] RelevanceError),

    #[error(transparent)]
    Stance(#[from] StanceError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("config error: {reason}")]
    Config { reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Workspace-wide result alias.
pub type VeridexResult<T> = Result<T, VeridexError>;
