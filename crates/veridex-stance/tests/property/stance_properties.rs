//! Property tests for stance mapping: confidence bounds, label routing,
//! and cue-override behavior hold for arbitrary classifier outputs.

use proptest::prelude::*;

use veridex_core::config::StanceConfig;
use veridex_core::errors::VeridexResult;
use veridex_core::models::{NliLabel, NliOutcome, Stance};
use veridex_core::round2;
use veridex_core::traits::INliProvider;
use veridex_stance::cues::{self, CueMatch};
use veridex_stance::{NliChain, StanceClassifier};

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

fn arb_label() -> impl Strategy<Value = NliLabel> {
    prop_oneof![
        Just(NliLabel::Entailment),
        Just(NliLabel::Contradiction),
        Just(NliLabel::Neutral),
    ]
}

proptest! {
    #[test]
    fn confidence_stays_on_the_percent_scale(
        label in arb_label(),
        score in 0.0f64..=1.0,
        evidence in "[ -~]{0,80}",
        cue_override in any::<bool>(),
    ) {
        let mut c = classifier(label, score, cue_override);
        let judgment = c.judge("claim", "https://a.com", &evidence).unwrap();
        prop_assert!((0.0..=100.0).contains(&judgment.confidence));
    }

    #[test]
    fn entailment_always_supports(score in 0.0f64..=1.0, evidence in "[ -~]{0,80}") {
        let mut c = classifier(NliLabel::Entailment, score, true);
        let judgment = c.judge("claim", "https://a.com", &evidence).unwrap();
        prop_assert_eq!(judgment.stance, Stance::Supports);
        prop_assert_eq!(judgment.confidence, round2(score * 100.0));
    }

    #[test]
    fn contradiction_always_refutes_with_inverted_confidence(
        score in 0.0f64..=1.0,
        evidence in "[ -~]{0,80}",
    ) {
        let mut c = classifier(NliLabel::Contradiction, score, true);
        let judgment = c.judge("claim", "https://a.com", &evidence).unwrap();
        prop_assert_eq!(judgment.stance, Stance::Refutes);
        prop_assert_eq!(judgment.confidence, round2((1.0 - score) * 100.0));
    }

    // q/x/z strings cannot contain any cue phrase, so neutral labels
    // must pass through untouched.
    #[test]
    fn neutral_without_cues_stays_neutral(score in 0.0f64..=1.0, base in "[qxz ]{0,40}") {
        let mut c = classifier(NliLabel::Neutral, score, true);
        let judgment = c.judge("claim", "https://a.com", &base).unwrap();
        prop_assert_eq!(judgment.stance, Stance::Neutral);
        prop_assert_eq!(judgment.confidence, round2(score * 100.0));
    }

    #[test]
    fn appending_denial_turns_cuefree_text_negative(base in "[qxz ]{0,40}") {
        let text = format!("{base} denied");
        prop_assert_eq!(cues::evaluate(&text), CueMatch::Negative);
    }

    #[test]
    fn appending_both_cue_kinds_yields_both(base in "[qxz ]{0,40}") {
        let text = format!("{base} confirmed yet denied");
        prop_assert_eq!(cues::evaluate(&text), CueMatch::Both);
    }
}
