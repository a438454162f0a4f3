//! Confidence-weighted aggregation of evidence judgments.

use tracing::info;

use veridex_core::constants::{VERDICT_FALSE_MAX, VERDICT_TRUE_MIN};
use veridex_core::models::{EvidenceJudgment, Verdict};
use veridex_core::round2;

/// Aggregated view over one claim's judgments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateOutcome {
    /// Σ(sign·confidence) / Σ(confidence), in [-1,1]. Zero when total
    /// confidence is zero.
    pub weighted_stance: f64,
    /// Mean confidence across all judgments, direction-blind.
    pub truth_score: f64,
    pub verdict: Verdict,
}

/// Folds judgments into a verdict.
///
/// Supports pulls the weighted stance toward +1, Refutes toward −1;
/// Neutral contributes its confidence to the denominator only, diluting
/// both directions. The verdict is decided on the unrounded stance; the
/// reported fields are rounded to 2 decimals.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvidenceAggregator;

impl EvidenceAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate a batch of judgments.
    ///
    /// Callers with zero judgments should short-circuit to a terminal
    /// result instead; an empty batch here yields the zeroed
    /// Undetermined outcome.
    pub fn aggregate(&self, judgments: &[EvidenceJudgment]) -> AggregateOutcome {
        if judgments.is_empty() {
            return AggregateOutcome {
                weighted_stance: 0.0,
                truth_score: 0.0,
                verdict: Verdict::Undetermined,
            };
        }

        let total_confidence: f64 = judgments.iter().map(|j| j.confidence).sum();
        let directed: f64 = judgments
            .iter()
            .map(|j| j.stance.sign() * j.confidence)
            .sum();

        let weighted_stance = if total_confidence > 0.0 {
            directed / total_confidence
        } else {
            0.0
        };

        let verdict = if weighted_stance > VERDICT_TRUE_MIN {
            Verdict::True
        } else if weighted_stance < VERDICT_FALSE_MAX {
            Verdict::False
        } else {
            Verdict::Undetermined
        };

        let truth_score = round2(total_confidence / judgments.len() as f64);

        info!(
            judgments = judgments.len(),
            weighted_stance, truth_score, verdict = ?verdict,
            "evidence aggregated"
        );

        AggregateOutcome {
            weighted_stance: round2(weighted_stance),
            truth_score,
            verdict,
        }
    }
}
