//! Semantic relevance filter: embeds the claim and candidate headlines,
//! keeps the ones whose cosine similarity clears the configured cutoff.

use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use veridex_core::config::RelevanceConfig;
use veridex_core::errors::{RelevanceError, VeridexResult};
use veridex_core::models::{DegradationEvent, RankedMatch, ScoredArticle};

use crate::cache::EmbeddingCache;
use crate::chain::ProviderChain;
use crate::providers::{HashedEmbeddingProvider, OnnxEmbeddingProvider};
use crate::similarity;

/// Embedding-backed headline filter.
///
/// Providers are consulted in order (ONNX model first when configured,
/// hashed-feature fallback last); embeddings are cached by content hash
/// so repeated claims and recurring headlines skip inference.
pub struct RelevanceEngine {
    chain: ProviderChain,
    cache: EmbeddingCache,
    config: RelevanceConfig,
}

impl RelevanceEngine {
    pub fn new(config: RelevanceConfig) -> Self {
        let mut chain = ProviderChain::new();

        if let Some(path) = &config.model_path {
            match OnnxEmbeddingProvider::load(path, config.dimensions) {
                Ok(provider) => chain.push(Box::new(provider)),
                Err(e) => {
                    warn!(path = %path, error = %e, "embedding model unavailable, using fallback");
                }
            }
        }
        chain.push(Box::new(HashedEmbeddingProvider::new(config.dimensions)));

        let cache = EmbeddingCache::new(config.cache_capacity);
        Self {
            chain,
            cache,
            config,
        }
    }

    /// Rank `articles` against `claim` by title similarity.
    ///
    /// Returns matches at or above the similarity threshold, sorted by
    /// similarity descending; ties keep their input order.
    pub fn filter_by_similarity(
        &mut self,
        claim: &str,
        articles: &[ScoredArticle],
    ) -> VeridexResult<Vec<RankedMatch>> {
        if articles.is_empty() {
            info!("no admitted articles to rank");
            return Ok(Vec::new());
        }

        let claim_embedding = self.embed_cached(claim)?;
        let title_embeddings = self.embed_titles(articles)?;

        let threshold = self.config.similarity_threshold;
        let mut matches: Vec<RankedMatch> = articles
            .par_iter()
            .zip(title_embeddings.par_iter())
            .filter_map(|(article, embedding)| {
                let similarity = f64::from(similarity::cosine(&claim_embedding, embedding));
                (similarity >= threshold).then(|| RankedMatch {
                    title: article.title.clone(),
                    url: article.url.clone(),
                    similarity,
                })
            })
            .collect();

        matches.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
        });

        info!(
            candidates = articles.len(),
            kept = matches.len(),
            threshold,
            "similarity filter applied"
        );
        Ok(matches)
    }

    /// Embed a single text, serving from the cache when possible.
    pub fn embed_cached(&mut self, text: &str) -> VeridexResult<Vec<f32>> {
        let key = EmbeddingCache::content_hash(text);
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit);
        }
        let (embedding, provider) = self.chain.embed(text)?;
        debug!(provider = %provider, "embedded uncached text");
        self.cache.insert(key, embedding.clone());
        Ok(embedding)
    }

    /// Embed all titles, batching only the cache misses.
    fn embed_titles(&mut self, articles: &[ScoredArticle]) -> VeridexResult<Vec<Vec<f32>>> {
        let mut slots: Vec<Option<Vec<f32>>> = Vec::with_capacity(articles.len());
        let mut missing: Vec<usize> = Vec::new();

        for (i, article) in articles.iter().enumerate() {
            let key = EmbeddingCache::content_hash(&article.title);
            match self.cache.get(&key) {
                Some(hit) => slots.push(Some(hit)),
                None => {
                    slots.push(None);
                    missing.push(i);
                }
            }
        }

        if !missing.is_empty() {
            let texts: Vec<String> = missing
                .iter()
                .map(|&i| articles[i].title.clone())
                .collect();
            let (embedded, provider) = self.chain.embed_batch(&texts)?;
            debug!(count = embedded.len(), provider = %provider, "embedded uncached titles");

            for (&i, embedding) in missing.iter().zip(embedded) {
                let key = EmbeddingCache::content_hash(&articles[i].title);
                self.cache.insert(key, embedding.clone());
                slots[i] = Some(embedding);
            }
        }

        slots
            .into_iter()
            .map(|slot| {
                slot.ok_or_else(|| {
                    RelevanceError::InferenceFailed {
                        reason: "missing embedding after batch fill".to_string(),
                    }
                    .into()
                })
            })
            .collect()
    }

    /// Provider fallbacks recorded since the last drain.
    pub fn drain_degradation_events(&mut self) -> Vec<DegradationEvent> {
        self.chain.drain_events()
    }

    pub fn active_provider_name(&self) -> &str {
        self.chain.active_provider_name()
    }
}
