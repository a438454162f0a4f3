//! Stance classification over evidence summaries.

use tracing::{debug, warn};

use veridex_core::config::StanceConfig;
use veridex_core::errors::VeridexResult;
use veridex_core::models::{DegradationEvent, EvidenceJudgment, NliLabel, NliOutcome, Stance};
use veridex_core::round2;

use crate::chain::NliChain;
use crate::cues::{self, CueMatch};
use crate::providers::{LexicalNliProvider, OnnxNliProvider};

/// Maps NLI outcomes on (evidence, claim) pairs to stance judgments.
///
/// Entailment supports the claim at the label probability; contradiction
/// refutes it at the inverted probability; neutral stands unless the
/// lexical cue scan finds an unambiguous verdict phrase in the evidence.
pub struct StanceClassifier {
    chain: NliChain,
    config: StanceConfig,
}

impl StanceClassifier {
    pub fn new(config: StanceConfig) -> Self {
        let mut chain = NliChain::new();
        if let Some(path) = &config.model_path {
            match OnnxNliProvider::load(path) {
                Ok(provider) => chain.push(Box::new(provider)),
                Err(e) => {
                    warn!(path = %path, error = %e, "NLI model unavailable, using fallback");
                }
            }
        }
        chain.push(Box::new(LexicalNliProvider::new()));
        Self { chain, config }
    }

    /// Build a classifier over a prepared chain. Used by tests and by
    /// callers that bring their own providers.
    pub fn with_chain(chain: NliChain, config: StanceConfig) -> Self {
        Self { chain, config }
    }

    /// Judge one evidence summary against the claim.
    pub fn judge(
        &mut self,
        claim: &str,
        url: &str,
        evidence: &str,
    ) -> VeridexResult<EvidenceJudgment> {
        let (outcome, provider) = self.chain.classify(evidence, claim)?;
        debug!(
            provider = %provider,
            label = ?outcome.label,
            score = outcome.score,
            "NLI outcome"
        );

        let (stance, confidence) = self.map_outcome(outcome, evidence);
        Ok(EvidenceJudgment {
            url: url.to_string(),
            stance,
            confidence: round2(confidence),
            summary: evidence.to_string(),
        })
    }

    fn map_outcome(&self, outcome: NliOutcome, evidence: &str) -> (Stance, f64) {
        let raw = outcome.score * 100.0;
        match outcome.label {
            NliLabel::Entailment => (Stance::Supports, raw),
            NliLabel::Contradiction => (Stance::Refutes, (1.0 - outcome.score) * 100.0),
            NliLabel::Neutral if self.config.cue_override => match cues::evaluate(evidence) {
                CueMatch::Negative => (Stance::Refutes, (90.0 - raw).max(0.0)),
                CueMatch::Positive => (Stance::Supports, (raw + 10.0).min(100.0)),
                CueMatch::Both | CueMatch::None => (Stance::Neutral, raw),
            },
            NliLabel::Neutral => (Stance::Neutral, raw),
        }
    }

    /// Provider fallbacks recorded since the last drain.
    pub fn drain_degradation_events(&mut self) -> Vec<DegradationEvent> {
        self.chain.drain_events()
    }

    pub fn active_provider_name(&self) -> &str {
        self.chain.active_provider_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veridex_core::traits::INliProvider;

    struct FixedNli {
        label: NliLabel,
        score: f64,
    }
    impl INliProvider for FixedNli {
        fn classify(&self, _premise: &str, _hypothesis: &str) -> VeridexResult<NliOutcome> {
            Ok(NliOutcome {
                label: self.label,
                score: self.score,
            })
        }
        fn name(&self) -> &str {
            "fixed"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    fn classifier(label: NliLabel, score: f64, cue_override: bool) -> StanceClassifier {
        let mut chain = NliChain::new();
        chain.push(Box::new(FixedNli { label, score }));
        StanceClassifier::with_chain(
            chain,
            StanceConfig {
                model_path: None,
                cue_override,
            },
        )
    }

    #[test]
    fn entailment_maps_to_supports() {
        let mut c = classifier(NliLabel::Entailment, 0.87, true);
        let j = c
            .judge("claim", "https://a.com", "evidence restates the claim")
            .unwrap();
        assert_eq!(j.stance, Stance::Supports);
        assert_eq!(j.confidence, 87.0);
    }

    #[test]
    fn contradiction_confidence_is_inverted() {
        let mut c = classifier(NliLabel::Contradiction, 0.9, true);
        let j = c.judge("claim", "https://a.com", "evidence text").unwrap();
        assert_eq!(j.stance, Stance::Refutes);
        assert_eq!(j.confidence, 10.0);
    }

    #[test]
    fn neutral_with_denial_cue_becomes_refutes() {
        let mut c = classifier(NliLabel::Neutral, 0.55, true);
        let j = c
            .judge("claim", "https://a.com", "Officials denied the report.")
            .unwrap();
        assert_eq!(j.stance, Stance::Refutes);
        assert_eq!(j.confidence, 35.0);
    }

    #[test]
    fn neutral_with_confirmation_cue_becomes_supports_capped() {
        let mut c = classifier(NliLabel::Neutral, 0.95, true);
        let j = c
            .judge("claim", "https://a.com", "The ministry confirmed the rollout.")
            .unwrap();
        assert_eq!(j.stance, Stance::Supports);
        assert_eq!(j.confidence, 100.0);
    }

    #[test]
    fn neutral_with_mixed_cues_stays_neutral() {
        let mut c = classifier(NliLabel::Neutral, 0.55, true);
        let j = c
            .judge(
                "claim",
                "https://a.com",
                "One outlet confirmed it, another denied it.",
            )
            .unwrap();
        assert_eq!(j.stance, Stance::Neutral);
        assert_eq!(j.confidence, 55.0);
    }

    #[test]
    fn override_disabled_leaves_neutral_untouched() {
        let mut c = classifier(NliLabel::Neutral, 0.55, false);
        let j = c
            .judge("claim", "https://a.com", "Officials denied the report.")
            .unwrap();
        assert_eq!(j.stance, Stance::Neutral);
        assert_eq!(j.confidence, 55.0);
    }

    #[test]
    fn judgment_carries_url_and_summary() {
        let mut c = classifier(NliLabel::Entailment, 0.8, true);
        let j = c
            .judge("claim", "https://outlet.com/story", "the summary text")
            .unwrap();
        assert_eq!(j.url, "https://outlet.com/story");
        assert_eq!(j.summary, "the summary text");
    }

    #[test]
    fn lexical_fallback_chain_is_usable_end_to_end() {
        let mut c = StanceClassifier::new(StanceConfig {
            model_path: None,
            cue_override: true,
        });
        assert_eq!(c.active_provider_name(), "lexical-overlap");
        let j = c
            .judge(
                "mars rover discovered water",
                "https://a.com",
                "The mars rover discovered water ice today.",
            )
            .unwrap();
        assert_eq!(j.stance, Stance::Supports);
    }
}
