//! Property tests for the similarity filter: ordering, threshold
//! behavior, and cosine bounds hold for arbitrary inputs.

use proptest::prelude::*;

use veridex_core::config::RelevanceConfig;
use veridex_core::models::{CredibilityBand, ScoredArticle};
use veridex_relevance::{cosine, RelevanceEngine};

fn engine(threshold: f64) -> RelevanceEngine {
    RelevanceEngine::new(RelevanceConfig {
        similarity_threshold: threshold,
        model_path: None,
        dimensions: 64,
        cache_capacity: 256,
    })
}

fn article(index: usize, title: &str) -> ScoredArticle {
    ScoredArticle {
        title: title.to_string(),
        url: format!("https://example.com/article/{index}"),
        domain: "example.com".to_string(),
        credibility_score: 75.0,
        band: CredibilityBand::MostlyReliable,
        bias_label: "Least Biased".to_string(),
        factuality_label: "High".to_string(),
    }
}

fn arb_title() -> impl Strategy<Value = String> {
    "[a-z]{2,8}( [a-z]{2,8}){0,4}"
}

fn arb_titles() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_title(), 0..10)
}

fn arb_threshold_pair() -> impl Strategy<Value = (f64, f64)> {
    (0.0f64..=1.0, 0.0f64..=1.0).prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
}

proptest! {
    #[test]
    fn results_are_sorted_descending(claim in arb_title(), titles in arb_titles()) {
        let mut engine = engine(0.0);
        let articles: Vec<ScoredArticle> = titles
            .iter()
            .enumerate()
            .map(|(i, t)| article(i, t))
            .collect();
        let matches = engine.filter_by_similarity(&claim, &articles).unwrap();
        for pair in matches.windows(2) {
            prop_assert!(pair[0].similarity >= pair[1].similarity);
        }
    }

    #[test]
    fn every_match_clears_the_threshold(
        claim in arb_title(),
        titles in arb_titles(),
        threshold in 0.0f64..=1.0,
    ) {
        let mut engine = engine(threshold);
        let articles: Vec<ScoredArticle> = titles
            .iter()
            .enumerate()
            .map(|(i, t)| article(i, t))
            .collect();
        let matches = engine.filter_by_similarity(&claim, &articles).unwrap();
        for m in &matches {
            prop_assert!(m.similarity >= threshold);
        }
    }

    #[test]
    fn raising_the_threshold_never_adds_matches(
        claim in arb_title(),
        titles in arb_titles(),
        (low, high) in arb_threshold_pair(),
    ) {
        let articles: Vec<ScoredArticle> = titles
            .iter()
            .enumerate()
            .map(|(i, t)| article(i, t))
            .collect();

        let kept_low = engine(low).filter_by_similarity(&claim, &articles).unwrap();
        let kept_high = engine(high).filter_by_similarity(&claim, &articles).unwrap();

        prop_assert!(kept_high.len() <= kept_low.len());
        for m in &kept_high {
            prop_assert!(kept_low.iter().any(|k| k.url == m.url));
        }
    }

    #[test]
    fn cosine_stays_bounded(
        a in prop::collection::vec(-10.0f32..10.0, 1..64),
        b in prop::collection::vec(-10.0f32..10.0, 1..64),
    ) {
        let sim = cosine(&a, &b);
        prop_assert!((-1.0 - 1e-4..=1.0 + 1e-4).contains(&f64::from(sim)));
    }
}
