use serde::{Deserialize, Serialize};

use super::defaults;

/// Semantic relevance subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelevanceConfig {
    /// Cosine-similarity cutoff for admitting a headline.
    pub similarity_threshold: f64,
    /// Path to the ONNX sentence-embedding model. None → the chain starts
    /// at the hashed-feature fallback.
    pub model_path: Option<String>,
    /// Embedding dimensionality.
    pub dimensions: usize,
    /// Max entries in the embedding cache.
    pub cache_capacity: u64,
}

impl Default for RelevanceConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            model_path: None,
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            cache_capacity: defaults::DEFAULT_EMBEDDING_CACHE_CAPACITY,
        }
    }
}
