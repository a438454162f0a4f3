use crate::errors::VeridexResult;

/// Evidence summarizer.
pub trait ISummarizer: Send + Sync {
    /// Produce a short summary of the given text.
    fn summarize(&self, text: &str) -> VeridexResult<String>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
