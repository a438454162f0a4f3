//! Chat-completion summarizer.

use std::sync::Arc;

use veridex_core::errors::{PipelineError, VeridexResult};
use veridex_core::traits::ISummarizer;

use crate::http::HttpClient;
use crate::llm;

pub struct RemoteSummarizer {
    http: Arc<HttpClient>,
    endpoint: String,
    api_key: Option<String>,
    model: Option<String>,
}

impl RemoteSummarizer {
    pub fn new(
        http: Arc<HttpClient>,
        endpoint: String,
        api_key: Option<String>,
        model: Option<String>,
    ) -> Self {
        Self {
            http,
            endpoint,
            api_key,
            model,
        }
    }

    /// The cue request matters: the stance classifier downstream reads the
    /// summary, so confirmations and denials must survive summarization.
    fn build_prompt(text: &str) -> String {
        format!(
            "Summarize this article in 3-5 sentences. Keep any confirmation, \
             denial, or verification statements about the events described.\n\n{text}"
        )
    }
}

impl ISummarizer for RemoteSummarizer {
    fn summarize(&self, text: &str) -> VeridexResult<String> {
        let prompt = Self::build_prompt(text);
        let summary = llm::chat_completion(
            &self.http,
            &self.endpoint,
            self.api_key.as_deref(),
            self.model.as_deref(),
            &prompt,
        )?
        .trim()
        .to_string();

        if summary.is_empty() {
            return Err(PipelineError::SummarizationFailed {
                reason: "model returned an empty summary".to_string(),
            }
            .into());
        }
        Ok(summary)
    }

    fn name(&self) -> &str {
        "remote-llm"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_asks_for_verification_cues() {
        let prompt = RemoteSummarizer::build_prompt("Article body.");
        assert!(prompt.contains("3-5 sentences"));
        assert!(prompt.contains("denial"));
        assert!(prompt.ends_with("Article body."));
    }
}
