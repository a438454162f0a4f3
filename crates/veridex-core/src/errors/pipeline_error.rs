/// Orchestration / external-collaborator errors.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("search failed: {reason}")]
    SearchFailed { reason: String },

    #[error("extraction failed for {url}: {reason}")]
    ExtractionFailed { url: String, reason: String },

    #[error("summarization failed: {reason}")]
    SummarizationFailed { reason: String },

    #[error("translation failed: {reason}")]
    TranslationFailed { reason: String },

    #[error("http request failed: {reason}")]
    HttpError { reason: String },

    #[error("request to {url} timed out after {attempts} attempts")]
    Timeout { url: String, attempts: u32 },

    #[error("empty claim")]
    EmptyClaim,
}
