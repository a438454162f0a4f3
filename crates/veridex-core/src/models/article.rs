use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants;

/// An article as returned by the search provider, before any scoring.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawArticle {
    pub title: String,
    pub url: String,
    /// Search-result snippet, when the provider returns one.
    pub snippet: Option<String>,
    /// 1-based position in search-result order.
    pub rank: usize,
}

impl RawArticle {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: None,
            rank: 0,
        }
    }
}

/// Credibility band derived from a 0–100 credibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CredibilityBand {
    /// Score ≥ 80.
    Trusted,
    /// Score ≥ 60.
    MostlyReliable,
    /// Score ≥ 40.
    Questionable,
    /// Everything below 40.
    Unreliable,
}

impl CredibilityBand {
    /// Band a 0–100 credibility score by fixed thresholds.
    pub fn from_score(score: f64) -> Self {
        if score >= constants::BAND_TRUSTED_MIN {
            Self::Trusted
        } else if score >= constants::BAND_MOSTLY_RELIABLE_MIN {
            Self::MostlyReliable
        } else if score >= constants::BAND_QUESTIONABLE_MIN {
            Self::Questionable
        } else {
            Self::Unreliable
        }
    }
}

/// An article annotated with its source's credibility assessment.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredArticle {
    pub title: String,
    pub url: String,
    /// Registrable domain the credibility lookup ran against.
    pub domain: String,
    /// 0–100 composite credibility score.
    pub credibility_score: f64,
    pub band: CredibilityBand,
    /// Bias label from the matched profile, or "Unknown" on a lookup miss.
    pub bias_label: String,
    /// Factual-reporting label from the matched profile, or "Unknown".
    pub factuality_label: String,
}
