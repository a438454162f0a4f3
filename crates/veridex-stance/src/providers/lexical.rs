//! Word-overlap NLI fallback.
//!
//! When no cross-encoder model is on disk the chain still needs a
//! classifier. This one measures how much of the hypothesis vocabulary
//! the premise covers: high coverage reads as entailment (or
//! contradiction when the premise is negated), low coverage as neutral.

use std::collections::HashSet;

use veridex_core::errors::VeridexResult;
use veridex_core::models::{NliLabel, NliOutcome};
use veridex_core::traits::INliProvider;

/// Tokens that flip high-coverage premises from entailment to
/// contradiction.
const NEGATION_MARKERS: [&str; 6] = ["not", "never", "denied", "denies", "false", "without"];

/// Coverage below this is neutral regardless of negation.
const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.6;

/// Deterministic lexical-overlap classifier, always available.
pub struct LexicalNliProvider {
    overlap_threshold: f64,
}

impl Default for LexicalNliProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LexicalNliProvider {
    pub fn new() -> Self {
        Self {
            overlap_threshold: DEFAULT_OVERLAP_THRESHOLD,
        }
    }

    fn content_words(text: &str) -> HashSet<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|w| w.len() >= 3)
            .map(str::to_lowercase)
            .collect()
    }
}

impl INliProvider for LexicalNliProvider {
    fn classify(&self, premise: &str, hypothesis: &str) -> VeridexResult<NliOutcome> {
        let hypothesis_words = Self::content_words(hypothesis);
        if hypothesis_words.is_empty() {
            return Ok(NliOutcome {
                label: NliLabel::Neutral,
                score: 0.5,
            });
        }

        let premise_words = Self::content_words(premise);
        let covered = hypothesis_words
            .iter()
            .filter(|w| premise_words.contains(*w))
            .count();
        let coverage = covered as f64 / hypothesis_words.len() as f64;

        let outcome = if coverage >= self.overlap_threshold {
            let negated = NEGATION_MARKERS
                .iter()
                .any(|m| premise_words.contains(*m));
            NliOutcome {
                label: if negated {
                    NliLabel::Contradiction
                } else {
                    NliLabel::Entailment
                },
                score: (0.5 + coverage / 2.0).min(0.95),
            }
        } else {
            NliOutcome {
                label: NliLabel::Neutral,
                score: (1.0 - coverage).clamp(0.5, 0.95),
            }
        };
        Ok(outcome)
    }

    fn name(&self) -> &str {
        "lexical-overlap"
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restated_claim_reads_as_entailment() {
        let provider = LexicalNliProvider::new();
        let outcome = provider
            .classify(
                "The mars rover discovered water ice beneath the surface today.",
                "mars rover discovered water",
            )
            .unwrap();
        assert_eq!(outcome.label, NliLabel::Entailment);
        assert!(outcome.score > 0.5);
    }

    #[test]
    fn negated_restatement_reads_as_contradiction() {
        let provider = LexicalNliProvider::new();
        let outcome = provider
            .classify(
                "The agency said the mars rover never discovered water.",
                "mars rover discovered water",
            )
            .unwrap();
        assert_eq!(outcome.label, NliLabel::Contradiction);
    }

    #[test]
    fn unrelated_premise_reads_as_neutral() {
        let provider = LexicalNliProvider::new();
        let outcome = provider
            .classify(
                "Quarterly earnings beat analyst expectations.",
                "mars rover discovered water",
            )
            .unwrap();
        assert_eq!(outcome.label, NliLabel::Neutral);
        assert!(outcome.score >= 0.5);
    }

    #[test]
    fn empty_hypothesis_is_neutral() {
        let provider = LexicalNliProvider::new();
        let outcome = provider.classify("Some premise text here.", "a an").unwrap();
        assert_eq!(outcome.label, NliLabel::Neutral);
        assert_eq!(outcome.score, 0.5);
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        let provider = LexicalNliProvider::new();
        for (premise, hypothesis) in [
            ("exact same words here", "exact same words here"),
            ("nothing shared", "totally different content"),
            ("", "claim words"),
        ] {
            let outcome = provider.classify(premise, hypothesis).unwrap();
            assert!((0.0..=1.0).contains(&outcome.score));
        }
    }
}
