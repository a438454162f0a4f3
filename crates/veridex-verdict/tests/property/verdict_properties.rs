//! Property tests for the aggregator: output ranges, unanimity, and
//! stance-flip symmetry hold for arbitrary judgment batches.

use proptest::prelude::*;

use veridex_core::models::{EvidenceJudgment, Stance, Verdict};
use veridex_core::round2;
use veridex_verdict::EvidenceAggregator;

fn arb_stance() -> impl Strategy<Value = Stance> {
    prop_oneof![
        Just(Stance::Supports),
        Just(Stance::Refutes),
        Just(Stance::Neutral),
    ]
}

fn arb_judgment() -> impl Strategy<Value = EvidenceJudgment> {
    (arb_stance(), 0.0f64..=100.0).prop_map(|(stance, confidence)| EvidenceJudgment {
        url: "https://example.com/".to_string(),
        stance,
        confidence,
        summary: String::new(),
    })
}

fn arb_judgments() -> impl Strategy<Value = Vec<EvidenceJudgment>> {
    prop::collection::vec(arb_judgment(), 0..20)
}

fn flip(stance: Stance) -> Stance {
    match stance {
        Stance::Supports => Stance::Refutes,
        Stance::Refutes => Stance::Supports,
        Stance::Neutral => Stance::Neutral,
    }
}

proptest! {
    #[test]
    fn weighted_stance_stays_in_unit_range(judgments in arb_judgments()) {
        let out = EvidenceAggregator::new().aggregate(&judgments);
        prop_assert!((-1.0..=1.0).contains(&out.weighted_stance));
    }

    #[test]
    fn truth_score_is_the_rounded_mean_confidence(judgments in arb_judgments()) {
        let out = EvidenceAggregator::new().aggregate(&judgments);
        if judgments.is_empty() {
            prop_assert_eq!(out.truth_score, 0.0);
        } else {
            let mean =
                judgments.iter().map(|j| j.confidence).sum::<f64>() / judgments.len() as f64;
            prop_assert_eq!(out.truth_score, round2(mean));
        }
        prop_assert!((0.0..=100.0).contains(&out.truth_score));
    }

    #[test]
    fn unanimous_support_with_any_confidence_is_true(
        confidences in prop::collection::vec(1.0f64..=100.0, 1..10),
    ) {
        let judgments: Vec<EvidenceJudgment> = confidences
            .iter()
            .map(|&c| EvidenceJudgment {
                url: "https://example.com/".to_string(),
                stance: Stance::Supports,
                confidence: c,
                summary: String::new(),
            })
            .collect();
        let out = EvidenceAggregator::new().aggregate(&judgments);
        prop_assert_eq!(out.weighted_stance, 1.0);
        prop_assert_eq!(out.verdict, Verdict::True);
    }

    #[test]
    fn flipping_every_stance_negates_the_outcome(judgments in arb_judgments()) {
        let flipped: Vec<EvidenceJudgment> = judgments
            .iter()
            .map(|j| EvidenceJudgment {
                stance: flip(j.stance),
                ..j.clone()
            })
            .collect();

        let out = EvidenceAggregator::new().aggregate(&judgments);
        let out_flipped = EvidenceAggregator::new().aggregate(&flipped);

        prop_assert_eq!(out_flipped.weighted_stance, -out.weighted_stance);
        prop_assert_eq!(out_flipped.truth_score, out.truth_score);
        let expected = match out.verdict {
            Verdict::True => Verdict::False,
            Verdict::False => Verdict::True,
            Verdict::Undetermined => Verdict::Undetermined,
        };
        prop_assert_eq!(out_flipped.verdict, expected);
    }
}
