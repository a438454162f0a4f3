pub mod article;
pub mod degradation_event;
pub mod extracted;
pub mod judgment;
pub mod ranked_match;
pub mod source_profile;
pub mod verification;

pub use article::{CredibilityBand, RawArticle, ScoredArticle};
pub use degradation_event::DegradationEvent;
pub use extracted::ExtractedArticle;
pub use judgment::{EvidenceJudgment, NliLabel, NliOutcome, Stance};
pub use ranked_match::RankedMatch;
pub use source_profile::SourceProfile;
pub use verification::{ReliableSource, Verdict, VerificationResult, VerificationStatus};
