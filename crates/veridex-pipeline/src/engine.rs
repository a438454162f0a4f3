//! Claim verification orchestration.
//!
//! `VerificationEngine` owns one instance of every pipeline stage and runs
//! a claim through them in order: translate, search, credibility filter,
//! relevance filter, then per-article extraction, summarization, and stance
//! judgment, finishing with evidence aggregation. Stage failures on a single
//! article are logged and skip that article; only claim-level problems
//! (an empty claim, a malformed configuration) surface as errors.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use veridex_core::config::VeridexConfig;
use veridex_core::errors::{PipelineError, VeridexResult};
use veridex_core::models::{
    EvidenceJudgment, RankedMatch, ReliableSource, VerificationResult, VerificationStatus,
};
use veridex_core::traits::{ISearchProvider, ITranslator};
use veridex_credibility::{ArticleCredibilityFilter, SourceDataset};
use veridex_relevance::RelevanceEngine;
use veridex_stance::StanceClassifier;
use veridex_verdict::{AggregateOutcome, EvidenceAggregator};

use crate::extraction::{
    DomParagraphExtractor, ExtractionChain, FullTextExtractor, RemoteLlmExtractor,
};
use crate::http::HttpClient;
use crate::query;
use crate::search::SerpSearchProvider;
use crate::summarize::Summarizer;
use crate::telemetry;
use crate::translate::PassthroughTranslator;

pub struct VerificationEngine {
    search: Box<dyn ISearchProvider>,
    translator: Box<dyn ITranslator>,
    extraction: ExtractionChain,
    summarizer: Summarizer,
    credibility: ArticleCredibilityFilter,
    relevance: RelevanceEngine,
    stance: StanceClassifier,
    aggregator: EvidenceAggregator,
}

impl VerificationEngine {
    /// Build a fully wired engine from configuration.
    pub fn new(config: VeridexConfig) -> VeridexResult<Self> {
        telemetry::init_tracing(&config.observability);

        let http = Arc::new(HttpClient::new(
            Duration::from_secs(config.pipeline.http_timeout_secs),
            config.pipeline.http_max_retries,
            Duration::from_millis(config.pipeline.http_initial_backoff_ms),
        )?);

        let search = Box::new(SerpSearchProvider::new(
            Arc::clone(&http),
            config.pipeline.search_endpoint.clone(),
            config.pipeline.search_api_key.clone(),
            config.pipeline.search_pages,
            config.pipeline.search_page_size,
        ));

        let mut extraction = ExtractionChain::new();
        extraction.push(Box::new(DomParagraphExtractor::new(Arc::clone(&http))));
        extraction.push(Box::new(FullTextExtractor::new(Arc::clone(&http))));
        if let Some(endpoint) = &config.pipeline.extractor_endpoint {
            extraction.push(Box::new(RemoteLlmExtractor::new(
                Arc::clone(&http),
                endpoint.clone(),
                config.pipeline.extractor_api_key.clone(),
            )));
        }

        let summarizer = Summarizer::from_config(&config.pipeline, Arc::clone(&http));
        let credibility = ArticleCredibilityFilter::new(SourceDataset::load_or_empty(
            &config.credibility.dataset_path,
        ));

        Ok(Self {
            search,
            translator: Box::new(PassthroughTranslator),
            extraction,
            summarizer,
            credibility,
            relevance: RelevanceEngine::new(config.relevance),
            stance: StanceClassifier::new(config.stance),
            aggregator: EvidenceAggregator::new(),
        })
    }

    /// Assemble an engine from externally built stages. Intended for tests
    /// and embeddings that substitute their own collaborators.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        search: Box<dyn ISearchProvider>,
        translator: Box<dyn ITranslator>,
        extraction: ExtractionChain,
        summarizer: Summarizer,
        credibility: ArticleCredibilityFilter,
        relevance: RelevanceEngine,
        stance: StanceClassifier,
    ) -> Self {
        Self {
            search,
            translator,
            extraction,
            summarizer,
            credibility,
            relevance,
            stance,
            aggregator: EvidenceAggregator::new(),
        }
    }

    /// Verify a claim end to end.
    ///
    /// Terminal short-circuits return a result rather than an error: no
    /// search hits or no admitted articles yield a `NoEvidence` result,
    /// and admitted articles that all fail extraction or judgment yield
    /// `InsufficientEvidence`.
    pub fn verify(&mut self, claim: &str) -> VeridexResult<VerificationResult> {
        let request_id = Uuid::new_v4().to_string();
        let span = info_span!("verify", request = %request_id);
        let _guard = span.enter();

        let claim = claim.trim();
        if claim.is_empty() {
            return Err(PipelineError::EmptyClaim.into());
        }

        let canonical = self.translator.translate(claim)?;
        let search_query = query::build_query(&canonical);
        info!(
            query = %search_query,
            provider = self.search.name(),
            "searching for evidence"
        );

        let articles = match self.search.search(&search_query) {
            Ok(articles) => articles,
            Err(error) => {
                warn!(%error, "search failed, treating as no evidence");
                Vec::new()
            }
        };
        if articles.is_empty() {
            info!(claim, "no search results");
            return Ok(VerificationResult::no_evidence(claim));
        }

        let scored = self.credibility.score_articles(&articles);
        if scored.admitted.is_empty() {
            info!(
                scored = scored.all.len(),
                mean_score = scored.mean_score,
                "no articles cleared the credibility threshold"
            );
            return Ok(VerificationResult::no_evidence(claim));
        }

        let matches = self
            .relevance
            .filter_by_similarity(&canonical, &scored.admitted)?;
        self.log_degradations();
        if matches.is_empty() {
            info!(admitted = scored.admitted.len(), "no articles matched the claim");
            return Ok(VerificationResult::no_evidence(claim));
        }

        let sources: HashMap<&str, (&str, f64)> = scored
            .admitted
            .iter()
            .map(|article| {
                (
                    article.url.as_str(),
                    (article.domain.as_str(), article.credibility_score),
                )
            })
            .collect();

        let mut judgments = Vec::new();
        for matched in &matches {
            match self.judge_article(&canonical, matched) {
                Ok(judgment) => judgments.push(judgment),
                Err(error) => warn!(url = %matched.url, %error, "skipping article"),
            }
        }
        self.log_degradations();

        if judgments.is_empty() {
            info!(matched = matches.len(), "every matched article failed");
            return Ok(VerificationResult::insufficient_evidence(claim));
        }

        let outcome = self.aggregator.aggregate(&judgments);
        info!(
            verdict = ?outcome.verdict,
            weighted_stance = outcome.weighted_stance,
            truth_score = outcome.truth_score,
            evidence = judgments.len(),
            "claim verified"
        );

        Ok(Self::assemble(request_id, claim, judgments, outcome, &sources))
    }

    fn judge_article(
        &mut self,
        claim: &str,
        matched: &RankedMatch,
    ) -> VeridexResult<EvidenceJudgment> {
        let article = self.extraction.extract(&matched.url)?;
        debug!(
            url = %matched.url,
            method = %article.method,
            chars = article.text.len(),
            "extracted article"
        );
        let summary = self.summarizer.summarize_evidence(claim, &article.text)?;
        self.stance.judge(claim, &matched.url, &summary)
    }

    fn assemble(
        id: String,
        claim: &str,
        judgments: Vec<EvidenceJudgment>,
        outcome: AggregateOutcome,
        sources: &HashMap<&str, (&str, f64)>,
    ) -> VerificationResult {
        let reliable_sources = judgments
            .iter()
            .filter_map(|judgment| {
                sources
                    .get(judgment.url.as_str())
                    .map(|(domain, score)| ReliableSource {
                        url: judgment.url.clone(),
                        domain: domain.to_string(),
                        credibility_score: *score,
                    })
            })
            .collect();

        let summary = judgments
            .iter()
            .take(3)
            .map(|judgment| judgment.summary.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        VerificationResult {
            id,
            claim: claim.to_string(),
            truth_score: outcome.truth_score,
            weighted_stance: outcome.weighted_stance,
            verdict: outcome.verdict,
            status: VerificationStatus::Verified,
            reliable_sources,
            summary,
            evidence_count: judgments.len(),
            checked_at: Utc::now(),
        }
    }

    fn log_degradations(&mut self) {
        for event in self.relevance.drain_degradation_events() {
            warn!(
                from = %event.from_provider,
                to = %event.to_provider,
                reason = %event.reason,
                "relevance provider degraded"
            );
        }
        for event in self.stance.drain_degradation_events() {
            warn!(
                from = %event.from_provider,
                to = %event.to_provider,
                reason = %event.reason,
                "stance provider degraded"
            );
        }
    }
}
