//! # veridex-core
//!
//! Foundation crate for the Veridex claim-verification pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod numeric;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VeridexConfig;
pub use errors::{VeridexError, VeridexResult};
pub use models::{
    CredibilityBand, EvidenceJudgment, RankedMatch, RawArticle, ScoredArticle, SourceProfile,
    Stance, Verdict, VerificationResult,
};
pub use numeric::round2;
