//! # veridex-pipeline
//!
//! End-to-end claim verification. Wires the credibility filter, the
//! relevance filter, the stance classifier, and the aggregator behind
//! the external collaborators (search, extraction, summarization,
//! translation) and produces one `VerificationResult` per claim.

pub mod engine;
pub mod extraction;
pub mod http;
mod llm;
pub mod query;
pub mod search;
pub mod summarize;
pub mod telemetry;
pub mod translate;

pub use engine::VerificationEngine;
pub use extraction::ExtractionChain;
pub use http::HttpClient;
pub use search::SerpSearchProvider;
pub use summarize::Summarizer;
pub use translate::PassthroughTranslator;
