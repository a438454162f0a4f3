use criterion::{criterion_group, criterion_main, Criterion};

use veridex_core::models::{RawArticle, SourceProfile};
use veridex_credibility::{ArticleCredibilityFilter, DomainCredibilityScorer, SourceDataset};

fn sample_dataset(size: usize) -> SourceDataset {
    let profiles = (0..size)
        .map(|i| {
            SourceProfile::new(
                format!("https://www.outlet-{i}.com/"),
                Some("least biased"),
                Some("high"),
                Some("high"),
                Some("newspaper"),
            )
        })
        .collect();
    SourceDataset::from_profiles(profiles)
}

fn bench_score_single(c: &mut Criterion) {
    let profile = SourceProfile::new(
        "https://www.reuters.com/",
        Some("least biased"),
        Some("very high"),
        Some("high"),
        Some("news agency"),
    );
    let scorer = DomainCredibilityScorer::new();

    c.bench_function("score_single_profile", |b| {
        b.iter(|| scorer.score(Some(&profile)))
    });
}

fn bench_filter_batch(c: &mut Criterion) {
    let filter = ArticleCredibilityFilter::new(sample_dataset(500));
    let articles: Vec<RawArticle> = (0..20)
        .map(|i| {
            RawArticle::new(
                format!("headline number {i}"),
                format!("https://www.outlet-{}.com/story-{i}", i * 17 % 500),
            )
        })
        .collect();

    c.bench_function("filter_batch_20_of_500", |b| {
        b.iter(|| filter.score_articles(&articles))
    });
}

criterion_group!(benches, bench_score_single, bench_filter_batch);
criterion_main!(benches);
