use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Directional relationship of one piece of evidence to the claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    Supports,
    Refutes,
    Neutral,
}

impl Stance {
    /// Sign used by the aggregator: Supports +1, Neutral 0, Refutes −1.
    pub fn sign(&self) -> f64 {
        match self {
            Self::Supports => 1.0,
            Self::Neutral => 0.0,
            Self::Refutes => -1.0,
        }
    }
}

/// Raw label emitted by a natural-language-inference classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NliLabel {
    Entailment,
    Contradiction,
    Neutral,
}

/// Raw NLI classifier output before stance mapping.
#[derive(Debug, Clone, Copy)]
pub struct NliOutcome {
    pub label: NliLabel,
    /// Label probability in [0,1].
    pub score: f64,
}

/// One article's verdict contribution: stance plus confidence.
///
/// Produced by the stance classifier; the aggregator folds these into
/// the verdict and the result assembly surfaces url and summary.
/// Confidence is always on the 0–100 scale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvidenceJudgment {
    pub url: String,
    pub stance: Stance,
    /// Evidentiary confidence in [0,100].
    pub confidence: f64,
    /// The evidence summary this judgment was made on.
    pub summary: String,
}
