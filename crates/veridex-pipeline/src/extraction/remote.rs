//! Remote LLM extraction strategy.
//!
//! Last resort in the extraction chain: ships the stripped page text to a
//! chat-completion endpoint and asks the model to isolate the article prose.
//! Only pages with a substantial amount of recoverable text are sent, and
//! the payload is clamped so a bloated page cannot blow the request budget.

use std::sync::Arc;

use veridex_core::errors::{PipelineError, VeridexResult};
use veridex_core::models::ExtractedArticle;
use veridex_core::traits::IArticleExtractor;

use crate::extraction::{page_title, strip_noise_blocks, strip_tags};
use crate::http::HttpClient;
use crate::llm;

/// Pages with less recoverable text than this are not worth a remote call.
const MIN_SOURCE_TEXT: usize = 200;
/// Upper bound on the number of characters sent to the model.
const INPUT_CLAMP_CHARS: usize = 2500;

pub struct RemoteLlmExtractor {
    http: Arc<HttpClient>,
    endpoint: String,
    api_key: Option<String>,
}

impl RemoteLlmExtractor {
    pub fn new(http: Arc<HttpClient>, endpoint: String, api_key: Option<String>) -> Self {
        Self {
            http,
            endpoint,
            api_key,
        }
    }

    fn build_prompt(clamped: &str) -> String {
        format!(
            "Extract the main article text from this page content. \
             Return only the article prose, no commentary.\n\n{clamped}"
        )
    }
}

impl IArticleExtractor for RemoteLlmExtractor {
    fn extract(&self, url: &str) -> VeridexResult<ExtractedArticle> {
        let html = self.http.get_text(url)?;
        let plain = strip_tags(&strip_noise_blocks(&html));

        if plain.len() < MIN_SOURCE_TEXT {
            return Err(PipelineError::ExtractionFailed {
                url: url.to_string(),
                reason: format!("only {} chars of page text", plain.len()),
            }
            .into());
        }

        let clamped: String = plain.chars().take(INPUT_CLAMP_CHARS).collect();
        let prompt = Self::build_prompt(&clamped);
        let text = llm::chat_completion(
            &self.http,
            &self.endpoint,
            self.api_key.as_deref(),
            None,
            &prompt,
        )?
        .trim()
        .to_string();

        if text.is_empty() {
            return Err(PipelineError::ExtractionFailed {
                url: url.to_string(),
                reason: "model returned no article text".to_string(),
            }
            .into());
        }

        Ok(ExtractedArticle {
            title: page_title(&html).unwrap_or_else(|| url.to_string()),
            text,
            method: self.name().to_string(),
        })
    }

    fn name(&self) -> &str {
        "remote-llm"
    }
}
