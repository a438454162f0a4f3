use serde::{Deserialize, Serialize};

use super::defaults;

/// Orchestration and external-collaborator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// SERP-style search API endpoint.
    pub search_endpoint: String,
    /// Search API key. None → the search provider reports itself failed.
    pub search_api_key: Option<String>,
    /// Result pages fetched per query.
    pub search_pages: usize,
    /// Results requested per page.
    pub search_page_size: usize,

    /// Remote-call timeout in seconds.
    pub http_timeout_secs: u64,
    /// Bounded retry attempts for remote calls.
    pub http_max_retries: u32,
    /// Initial backoff in milliseconds (doubles per retry).
    pub http_initial_backoff_ms: u64,

    /// Chat-completions-style summarization endpoint. None → local
    /// extractive summarization only.
    pub summarizer_endpoint: Option<String>,
    pub summarizer_api_key: Option<String>,
    pub summarizer_model: Option<String>,
    /// Word cap applied to summarizer input.
    pub summary_word_clamp: usize,
    /// Sentences kept by the claim-keyword prefilter fallback.
    pub prefilter_top_k: usize,

    /// Remote LLM extraction endpoint appended to the extractor chain.
    pub extractor_endpoint: Option<String>,
    pub extractor_api_key: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            search_endpoint: defaults::DEFAULT_SEARCH_ENDPOINT.to_string(),
            search_api_key: None,
            search_pages: defaults::DEFAULT_SEARCH_PAGES,
            search_page_size: defaults::DEFAULT_SEARCH_PAGE_SIZE,
            http_timeout_secs: defaults::DEFAULT_HTTP_TIMEOUT_SECS,
            http_max_retries: defaults::DEFAULT_HTTP_MAX_RETRIES,
            http_initial_backoff_ms: defaults::DEFAULT_HTTP_INITIAL_BACKOFF_MS,
            summarizer_endpoint: None,
            summarizer_api_key: None,
            summarizer_model: None,
            summary_word_clamp: defaults::DEFAULT_SUMMARY_WORD_CLAMP,
            prefilter_top_k: defaults::DEFAULT_PREFILTER_TOP_K,
            extractor_endpoint: None,
            extractor_api_key: None,
        }
    }
}
