//! # veridex-credibility
//!
//! Maps source editorial metadata to 0–100 credibility scores and filters
//! article batches down to the credible subset passed to later stages.

pub mod dataset;
pub mod domain;
pub mod filter;
pub mod scorer;

pub use dataset::SourceDataset;
pub use domain::registrable_domain;
pub use filter::{ArticleCredibilityFilter, ScoreOutcome};
pub use scorer::{DomainCredibilityScorer, NeutralFallback, ScorerWeights};
