//! Weighted credibility scoring over source editorial metadata.
//!
//! Four independent lookup tables (bias, factual reporting, credibility
//! label, media type) each map a categorical label to a weight in [0,1];
//! the composite emphasizes bias, factual record, and third-party
//! credibility equally, with media type as a minor tiebreak.

use veridex_core::constants;
use veridex_core::models::SourceProfile;
use veridex_core::numeric::round2;

/// Neutral fallback policy: what an article gets when no source profile
/// matches its domain, and what a missing label normalizes to inside the
/// tables. Kept as named values so the defaults are visible and testable.
pub struct NeutralFallback;

impl NeutralFallback {
    /// Composite score assigned on a dataset lookup miss.
    pub const SCORE: f64 = constants::NEUTRAL_FALLBACK_SCORE;
    /// Label shown for bias/factuality when no profile matched.
    pub const UNKNOWN_LABEL: &'static str = "Unknown";
    /// What a missing categorical label normalizes to before table lookup.
    pub const MISSING_LABEL: &'static str = constants::NEUTRAL_FALLBACK_LABEL;
    /// Table weight for any label the tables do not know.
    pub const WEIGHT: f64 = 0.5;
}

/// Relative weight of each signal in the composite score.
#[derive(Debug, Clone, Copy)]
pub struct ScorerWeights {
    pub bias: f64,
    pub factual: f64,
    pub credibility: f64,
    pub media_type: f64,
}

impl Default for ScorerWeights {
    fn default() -> Self {
        Self {
            bias: 0.3,
            factual: 0.3,
            credibility: 0.3,
            media_type: 0.1,
        }
    }
}

/// Bias-label weight. 0.0 for conspiracy/pseudoscience up to 1.0 for
/// pro-science; the misspelled dataset variant is tolerated.
fn bias_weight(label: &str) -> f64 {
    match label {
        "conspiracy-pseudoscience" | "conspiracy-pseuscience" => 0.0,
        "questionable" => 0.1,
        "satire" => 0.2,
        "right" | "left" => 0.4,
        "right-center" | "left-center" => 0.6,
        "least biased" => 0.9,
        "pro-science" => 1.0,
        _ => NeutralFallback::WEIGHT,
    }
}

fn factual_weight(label: &str) -> f64 {
    match label {
        "very low" => 0.0,
        "low" => 0.2,
        "mixed" => 0.4,
        "mostly factual" => 0.7,
        "high" => 0.85,
        "very high" => 1.0,
        "n/a" => 0.5,
        _ => NeutralFallback::WEIGHT,
    }
}

fn credibility_weight(label: &str) -> f64 {
    match label {
        "low" => 0.2,
        "medium" => 0.6,
        // The dataset carries a trailing-space variant of "high".
        "high" | "high " => 0.9,
        "n/a" => 0.5,
        _ => NeutralFallback::WEIGHT,
    }
}

fn media_type_weight(label: &str) -> f64 {
    match label {
        "government" => 1.0,
        "journal" => 0.9,
        "news agency" => 0.85,
        "newspaper" => 0.8,
        "radio station" | "tv station" => 0.7,
        "organization/foundation" => 0.65,
        "magazine" => 0.6,
        "website" => 0.5,
        "n/a" => 0.5,
        _ => NeutralFallback::WEIGHT,
    }
}

/// Normalize a label for table lookup: trim, lowercase, missing → "n/a".
fn normalize(label: Option<&str>) -> String {
    label
        .unwrap_or(NeutralFallback::MISSING_LABEL)
        .trim()
        .to_lowercase()
}

/// Maps a source profile to a 0–100 credibility score.
#[derive(Debug, Clone, Default)]
pub struct DomainCredibilityScorer {
    weights: ScorerWeights,
}

impl DomainCredibilityScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScorerWeights) -> Self {
        Self { weights }
    }

    /// Score a profile (or its absence). Never fails: unknown labels fall
    /// back to the neutral weight, a missing profile to the neutral score.
    pub fn score(&self, profile: Option<&SourceProfile>) -> f64 {
        let Some(profile) = profile else {
            return NeutralFallback::SCORE;
        };

        let bias = bias_weight(&normalize(profile.bias.as_deref()));
        let factual = factual_weight(&normalize(profile.factual_reporting.as_deref()));
        let credibility = credibility_weight(&normalize(profile.credibility.as_deref()));
        let media = media_type_weight(&normalize(profile.media_type.as_deref()));

        let composite = bias * self.weights.bias
            + factual * self.weights.factual
            + credibility * self.weights.credibility
            + media * self.weights.media_type;

        round2(composite * 100.0)
    }
}
