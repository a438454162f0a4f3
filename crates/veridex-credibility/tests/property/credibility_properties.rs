//! Property-based tests for credibility scoring and filtering.

use proptest::prelude::*;

use veridex_core::models::{CredibilityBand, RawArticle, SourceProfile};
use veridex_credibility::{ArticleCredibilityFilter, DomainCredibilityScorer, SourceDataset};

fn arb_label() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        // labels the tables know
        prop_oneof![
            Just("conspiracy-pseudoscience"),
            Just("questionable"),
            Just("satire"),
            Just("right"),
            Just("left"),
            Just("right-center"),
            Just("left-center"),
            Just("least biased"),
            Just("pro-science"),
            Just("very low"),
            Just("low"),
            Just("mixed"),
            Just("mostly factual"),
            Just("high"),
            Just("very high"),
            Just("medium"),
            Just("government"),
            Just("journal"),
            Just("news agency"),
            Just("newspaper"),
            Just("radio station"),
            Just("tv station"),
            Just("organization/foundation"),
            Just("magazine"),
            Just("website"),
            Just("n/a"),
        ]
        .prop_map(|s| Some(s.to_string())),
        // arbitrary junk the tables do not know
        "[a-zA-Z /-]{0,24}".prop_map(Some),
    ]
}

proptest! {
    /// Any combination of labels, known or junk, scores inside [0,100].
    #[test]
    fn score_is_always_in_range(
        bias in arb_label(),
        factual in arb_label(),
        credibility in arb_label(),
        media in arb_label(),
    ) {
        let profile = SourceProfile::new(
            "https://example.com/",
            bias.as_deref(),
            factual.as_deref(),
            credibility.as_deref(),
            media.as_deref(),
        );
        let score = DomainCredibilityScorer::new().score(Some(&profile));
        prop_assert!((0.0..=100.0).contains(&score));
    }

    /// The band always agrees with the score that produced it.
    #[test]
    fn band_matches_score(score in 0.0f64..=100.0) {
        let band = CredibilityBand::from_score(score);
        match band {
            CredibilityBand::Trusted => prop_assert!(score >= 80.0),
            CredibilityBand::MostlyReliable => prop_assert!((60.0..80.0).contains(&score)),
            CredibilityBand::Questionable => prop_assert!((40.0..60.0).contains(&score)),
            CredibilityBand::Unreliable => prop_assert!(score < 40.0),
        }
    }

    /// Admitted articles are a subset of all scored articles, every one of
    /// them at or above the admission threshold.
    #[test]
    fn admitted_is_a_thresholded_subset(
        sites in proptest::collection::vec(("[a-z]{1,12}", any::<bool>()), 0..8),
    ) {
        let dataset = SourceDataset::from_profiles(vec![SourceProfile::new(
            "https://www.trusted-wire.com/",
            Some("least biased"),
            Some("very high"),
            Some("high"),
            Some("news agency"),
        )]);

        let articles: Vec<RawArticle> = sites
            .iter()
            .enumerate()
            .map(|(i, (title, trusted))| {
                let url = if *trusted {
                    "https://www.trusted-wire.com/story".to_string()
                } else {
                    format!("https://unknown-{i}.io/story")
                };
                RawArticle::new(title.clone(), url)
            })
            .collect();

        let filter = ArticleCredibilityFilter::new(dataset);
        let out = filter.score_articles(&articles);

        prop_assert!(out.admitted.len() <= out.all.len());
        let expected_admitted = sites.iter().filter(|(_, trusted)| *trusted).count();
        prop_assert_eq!(out.admitted.len(), expected_admitted);
        for a in &out.admitted {
            prop_assert!(a.credibility_score >= 60.0);
            prop_assert!(out.all.iter().any(|s| s.url == a.url));
        }
    }
}
