//! In-memory embedding cache.
//!
//! TinyLFU admission, size-aware eviction, per-entry TTL. Keys are blake3
//! hashes of the embedded text, so identical claims and headlines are
//! embedded once per session.

use std::time::Duration;

use moka::sync::Cache;

/// Embedding cache keyed by content hash.
pub struct EmbeddingCache {
    cache: Cache<String, Vec<f32>>,
}

impl EmbeddingCache {
    /// Create a cache holding at most `max_entries` embeddings.
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(1800)) // 30 min idle
            .time_to_live(Duration::from_secs(6 * 3600)) // 6 hour cap
            .build();

        Self { cache }
    }

    /// blake3 hash of the text, hex-encoded. The cache key.
    pub fn content_hash(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    pub fn get(&self, content_hash: &str) -> Option<Vec<f32>> {
        self.cache.get(content_hash)
    }

    pub fn insert(&self, content_hash: String, embedding: Vec<f32>) {
        self.cache.insert(content_hash, embedding);
    }

    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let cache = EmbeddingCache::new(16);
        let key = EmbeddingCache::content_hash("some headline");
        cache.insert(key.clone(), vec![0.5, 0.25]);
        assert_eq!(cache.get(&key), Some(vec![0.5, 0.25]));
    }

    #[test]
    fn miss_returns_none() {
        let cache = EmbeddingCache::new(16);
        assert_eq!(cache.get("not-a-key"), None);
    }

    #[test]
    fn same_text_same_key_different_text_different_key() {
        assert_eq!(
            EmbeddingCache::content_hash("claim"),
            EmbeddingCache::content_hash("claim")
        );
        assert_ne!(
            EmbeddingCache::content_hash("claim"),
            EmbeddingCache::content_hash("claim!")
        );
    }

    #[test]
    fn clear_removes_entries() {
        let cache = EmbeddingCache::new(16);
        cache.insert("a".to_string(), vec![1.0]);
        cache.clear();
        assert_eq!(cache.get("a"), None);
    }
}
