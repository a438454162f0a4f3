//! Evidence summarization.
//!
//! Article text is first narrowed to the sentences most likely to bear on
//! the claim, then clamped to a word budget, and finally summarized by a
//! remote chat-completion model when one is configured. The local
//! extractive summarizer covers the unconfigured and failure cases, so a
//! summary is produced whenever the input has any sentences at all.

mod extractive;
mod remote;

pub use extractive::ExtractiveSummarizer;
pub use remote::RemoteSummarizer;

use std::sync::Arc;

use tracing::warn;
use veridex_core::config::PipelineConfig;
use veridex_core::errors::VeridexResult;
use veridex_core::traits::ISummarizer;

use crate::http::HttpClient;
use crate::query;

/// Split on `.`, `!`, or `?` when followed by whitespace or end of input.
/// Terminators stay attached to their sentence.
pub(crate) fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        let at_boundary = match chars.peek() {
            Some((_, next)) => next.is_whitespace(),
            None => true,
        };
        if at_boundary {
            let end = idx + ch.len_utf8();
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = end;
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

/// Keep the sentences containing any claim keyword. When fewer than
/// `fallback_count` sentences match, the lead of the article is kept
/// instead.
pub(crate) fn prefilter_sentences(claim: &str, text: &str, fallback_count: usize) -> String {
    let keywords = query::content_keywords(claim);
    let sentences = split_sentences(text);

    let relevant: Vec<&str> = sentences
        .iter()
        .copied()
        .filter(|sentence| {
            let folded = sentence.to_lowercase();
            keywords.iter().any(|keyword| folded.contains(keyword.as_str()))
        })
        .collect();

    if relevant.len() < fallback_count {
        sentences
            .into_iter()
            .take(fallback_count)
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        relevant.join(" ")
    }
}

/// Cap text at `max_words` whitespace-separated words.
pub(crate) fn clamp_words(text: &str, max_words: usize) -> String {
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prefilter, clamp, and summarize evidence text, preferring the remote
/// model and falling back to local extraction.
pub struct Summarizer {
    remote: Option<RemoteSummarizer>,
    extractive: ExtractiveSummarizer,
    word_clamp: usize,
    prefilter_top_k: usize,
}

impl Summarizer {
    pub fn from_config(config: &PipelineConfig, http: Arc<HttpClient>) -> Self {
        let remote = config.summarizer_endpoint.as_ref().map(|endpoint| {
            RemoteSummarizer::new(
                Arc::clone(&http),
                endpoint.clone(),
                config.summarizer_api_key.clone(),
                config.summarizer_model.clone(),
            )
        });
        Self {
            remote,
            extractive: ExtractiveSummarizer::default(),
            word_clamp: config.summary_word_clamp,
            prefilter_top_k: config.prefilter_top_k,
        }
    }

    pub fn summarize_evidence(&self, claim: &str, text: &str) -> VeridexResult<String> {
        let focused = prefilter_sentences(claim, text, self.prefilter_top_k);
        let clamped = clamp_words(&focused, self.word_clamp);

        if let Some(remote) = &self.remote {
            match remote.summarize(&clamped) {
                Ok(summary) => return Ok(summary),
                Err(error) => warn!(
                    provider = remote.name(),
                    %error,
                    "remote summarizer failed, falling back to extractive"
                ),
            }
        }
        self.extractive.summarize(&clamped)
    }
}
