//! # veridex-relevance
//!
//! Ranks credibility-admitted headlines by semantic similarity to the
//! claim. Embeddings come from a provider fallback chain (ONNX model,
//! then a deterministic hashed-feature provider) behind a content-hash
//! cache.

pub mod cache;
pub mod chain;
pub mod engine;
pub mod providers;
pub mod similarity;

pub use cache::EmbeddingCache;
pub use chain::ProviderChain;
pub use engine::RelevanceEngine;
pub use providers::{HashedEmbeddingProvider, OnnxEmbeddingProvider};
pub use similarity::cosine;
