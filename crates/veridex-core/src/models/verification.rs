use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Final verdict on a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    True,
    False,
    Undetermined,
}

/// How the verification run terminated.
///
/// `Undetermined` verdicts come in three flavors the caller must be able
/// to tell apart: evidence was weighed and came out inconclusive
/// (`Verified`), nothing survived the filters (`NoEvidence`), or articles
/// were admitted but every one failed extraction or judgment
/// (`InsufficientEvidence`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Verified,
    NoEvidence,
    InsufficientEvidence,
}

/// One source that contributed evidence, with its credibility score.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReliableSource {
    pub url: String,
    pub domain: String,
    pub credibility_score: f64,
}

/// Terminal output of a verification run. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VerificationResult {
    pub id: String,
    pub claim: String,
    /// Mean evidentiary confidence in [0,100], independent of direction.
    pub truth_score: f64,
    /// Confidence-weighted average of stance signs, in [-1,1].
    pub weighted_stance: f64,
    pub verdict: Verdict,
    pub status: VerificationStatus,
    pub reliable_sources: Vec<ReliableSource>,
    /// Joined summaries of the strongest evidence (first three judgments).
    pub summary: String,
    /// Number of judgments that reached the aggregator.
    pub evidence_count: usize,
    #[ts(type = "string")]
    pub checked_at: DateTime<Utc>,
}

impl VerificationResult {
    /// Nothing survived the credibility and relevance filters.
    pub fn no_evidence(claim: impl Into<String>) -> Self {
        Self::terminal(
            claim,
            VerificationStatus::NoEvidence,
            "No articles available for verification.",
        )
    }

    /// Articles were admitted but every extraction or judgment failed.
    pub fn insufficient_evidence(claim: impl Into<String>) -> Self {
        Self::terminal(
            claim,
            VerificationStatus::InsufficientEvidence,
            "No valid extraction results.",
        )
    }

    fn terminal(claim: impl Into<String>, status: VerificationStatus, summary: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            claim: claim.into(),
            truth_score: 0.0,
            weighted_stance: 0.0,
            verdict: Verdict::Undetermined,
            status,
            reliable_sources: Vec::new(),
            summary: summary.to_string(),
            evidence_count: 0,
            checked_at: Utc::now(),
        }
    }
}
