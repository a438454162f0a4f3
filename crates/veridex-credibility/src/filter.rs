//! Batch credibility filtering: score every retrieved article, band it,
//! and admit only the credible subset downstream.

use tracing::info;

use veridex_core::constants;
use veridex_core::models::{CredibilityBand, RawArticle, ScoredArticle};
use veridex_core::numeric::round2;

use crate::dataset::SourceDataset;
use crate::domain::registrable_domain;
use crate::scorer::{DomainCredibilityScorer, NeutralFallback};

/// Result of scoring a batch of articles.
#[derive(Debug, Clone, Default)]
pub struct ScoreOutcome {
    /// Every scored article, in input order.
    pub all: Vec<ScoredArticle>,
    /// Articles with score ≥ the admission threshold, the only objects
    /// passed downstream.
    pub admitted: Vec<ScoredArticle>,
    /// Mean score across all scored articles, 0.0 for an empty batch.
    pub mean_score: f64,
}

/// Applies the domain scorer to article batches.
pub struct ArticleCredibilityFilter {
    dataset: SourceDataset,
    scorer: DomainCredibilityScorer,
}

impl ArticleCredibilityFilter {
    pub fn new(dataset: SourceDataset) -> Self {
        Self {
            dataset,
            scorer: DomainCredibilityScorer::new(),
        }
    }

    pub fn with_scorer(dataset: SourceDataset, scorer: DomainCredibilityScorer) -> Self {
        Self { dataset, scorer }
    }

    /// Score every article and split out the admitted subset.
    ///
    /// Articles without a URL are dropped. A lookup miss is not an error:
    /// the article gets the neutral score and unknown labels. Empty input
    /// yields an empty outcome with mean 0.0.
    pub fn score_articles(&self, articles: &[RawArticle]) -> ScoreOutcome {
        let mut all = Vec::with_capacity(articles.len());
        let mut admitted = Vec::new();

        for article in articles {
            if article.url.is_empty() {
                continue;
            }

            let domain = registrable_domain(&article.url);
            let profile = self.dataset.lookup(&domain);
            let score = self.scorer.score(profile);

            let (bias_label, factuality_label) = match profile {
                Some(p) => (
                    p.bias
                        .clone()
                        .unwrap_or_else(|| NeutralFallback::UNKNOWN_LABEL.to_string()),
                    p.factual_reporting
                        .clone()
                        .unwrap_or_else(|| NeutralFallback::UNKNOWN_LABEL.to_string()),
                ),
                None => (
                    NeutralFallback::UNKNOWN_LABEL.to_string(),
                    NeutralFallback::UNKNOWN_LABEL.to_string(),
                ),
            };

            let scored = ScoredArticle {
                title: article.title.clone(),
                url: article.url.clone(),
                domain,
                credibility_score: score,
                band: CredibilityBand::from_score(score),
                bias_label,
                factuality_label,
            };

            if score >= constants::ADMISSION_MIN_SCORE {
                admitted.push(scored.clone());
            }
            all.push(scored);
        }

        let mean_score = if all.is_empty() {
            0.0
        } else {
            round2(all.iter().map(|a| a.credibility_score).sum::<f64>() / all.len() as f64)
        };

        info!(
            scored = all.len(),
            admitted = admitted.len(),
            mean_score,
            "credibility filtering complete"
        );

        ScoreOutcome {
            all,
            admitted,
            mean_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veridex_core::models::SourceProfile;

    fn dataset() -> SourceDataset {
        SourceDataset::from_profiles(vec![
            SourceProfile::new(
                "https://www.reuters.com/",
                Some("least biased"),
                Some("very high"),
                Some("high"),
                Some("news agency"),
            ),
            SourceProfile::new(
                "https://conspiracy-daily.example.net/",
                Some("conspiracy-pseudoscience"),
                Some("very low"),
                Some("low"),
                Some("website"),
            ),
        ])
    }

    fn article(title: &str, url: &str) -> RawArticle {
        RawArticle::new(title, url)
    }

    #[test]
    fn scores_band_and_admit() {
        let filter = ArticleCredibilityFilter::new(dataset());
        let out = filter.score_articles(&[
            article("a", "https://www.reuters.com/world/x"),
            article("b", "https://conspiracy-daily.example.net/p"),
            article("c", "https://totally-unknown.io/q"),
        ]);

        assert_eq!(out.all.len(), 3);
        // least biased 0.9, very high 1.0, high 0.9, news agency 0.85 → 92.5
        assert_eq!(out.all[0].credibility_score, 92.5);
        assert_eq!(out.all[0].band, CredibilityBand::Trusted);
        // all-bottom labels → 11.0
        assert_eq!(out.all[1].credibility_score, 11.0);
        assert_eq!(out.all[1].band, CredibilityBand::Unreliable);
        // lookup miss → neutral 50, unknown labels
        assert_eq!(out.all[2].credibility_score, 50.0);
        assert_eq!(out.all[2].bias_label, "Unknown");

        // only the trusted article clears the admission threshold
        assert_eq!(out.admitted.len(), 1);
        assert_eq!(out.admitted[0].url, "https://www.reuters.com/world/x");

        assert_eq!(out.mean_score, round2((92.5 + 11.0 + 50.0) / 3.0));
    }

    #[test]
    fn empty_input_yields_empty_outcome() {
        let filter = ArticleCredibilityFilter::new(dataset());
        let out = filter.score_articles(&[]);
        assert!(out.all.is_empty());
        assert!(out.admitted.is_empty());
        assert_eq!(out.mean_score, 0.0);
    }

    #[test]
    fn urlless_articles_are_dropped() {
        let filter = ArticleCredibilityFilter::new(dataset());
        let out = filter.score_articles(&[article("no url", "")]);
        assert!(out.all.is_empty());
        assert_eq!(out.mean_score, 0.0);
    }

    #[test]
    fn empty_dataset_scores_everything_neutral() {
        let filter = ArticleCredibilityFilter::new(SourceDataset::empty());
        let out = filter.score_articles(&[article("a", "https://www.reuters.com/x")]);
        assert_eq!(out.all[0].credibility_score, 50.0);
        assert!(out.admitted.is_empty());
    }

    #[test]
    fn refiltering_admitted_output_is_idempotent() {
        let filter = ArticleCredibilityFilter::new(dataset());
        let first = filter.score_articles(&[
            article("a", "https://www.reuters.com/world/x"),
            article("b", "https://conspiracy-daily.example.net/p"),
        ]);

        let readmitted: Vec<RawArticle> = first
            .admitted
            .iter()
            .map(|s| article(&s.title, &s.url))
            .collect();
        let second = filter.score_articles(&readmitted);

        assert_eq!(second.all.len(), first.admitted.len());
        assert_eq!(second.admitted.len(), first.admitted.len());
        for (a, b) in second.admitted.iter().zip(first.admitted.iter()) {
            assert_eq!(a.url, b.url);
            assert_eq!(a.credibility_score, b.credibility_score);
            assert_eq!(a.band, b.band);
        }
    }
}
