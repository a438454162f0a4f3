//! Default values for all configuration structs.
//!
//! Single source of truth: `Default` impls pull from here, never inline
//! their own numbers.

/// Path to the source-credibility dataset (JSON, `{"data": [...]}`).
pub const DEFAULT_DATASET_PATH: &str = "data/source_credibility.json";

/// Cosine-similarity cutoff for headline relevance. Loose enough to keep
/// paraphrased headlines, tight enough to drop topic-adjacent noise;
/// deployments wanting precision over recall raise it toward 0.9.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.8;

/// Embedding dimensionality (shared by the ONNX and hashed providers).
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;

/// Max entries in the embedding cache.
pub const DEFAULT_EMBEDDING_CACHE_CAPACITY: u64 = 10_000;

/// Whether the lexical-cue override for Neutral NLI results is applied.
pub const DEFAULT_CUE_OVERRIDE: bool = true;

/// Search API endpoint (SERP-style JSON).
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://serpapi.com/search";

/// Result pages fetched per query, and results per page.
pub const DEFAULT_SEARCH_PAGES: usize = 2;
pub const DEFAULT_SEARCH_PAGE_SIZE: usize = 10;

/// Remote-call timeout, retries, and initial backoff.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_HTTP_MAX_RETRIES: u32 = 3;
pub const DEFAULT_HTTP_INITIAL_BACKOFF_MS: u64 = 500;

/// Word cap on summarizer input.
pub const DEFAULT_SUMMARY_WORD_CLAMP: usize = 900;

/// Sentences kept by the claim-keyword prefilter when too few match.
pub const DEFAULT_PREFILTER_TOP_K: usize = 5;

/// Sentences emitted by the local extractive summarizer.
pub const DEFAULT_EXTRACTIVE_SENTENCES: usize = 3;

/// Emit JSON log lines instead of human-readable ones.
pub const DEFAULT_LOG_JSON: bool = false;
