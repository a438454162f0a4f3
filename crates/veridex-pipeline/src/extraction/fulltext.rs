//! Whole-page fallback extraction: strip boilerplate elements and every
//! remaining tag, keep whatever prose is left. Noisier than the
//! paragraph strategy but works on pages that do not mark up their
//! prose.

use std::sync::Arc;

use veridex_core::errors::{PipelineError, VeridexResult};
use veridex_core::models::ExtractedArticle;
use veridex_core::traits::IArticleExtractor;

use crate::http::HttpClient;

use super::{page_title, strip_noise_blocks, strip_tags, MIN_LOCAL_TEXT};

/// Second-choice local strategy.
pub struct FullTextExtractor {
    http: Arc<HttpClient>,
}

impl FullTextExtractor {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    fn full_text(html: &str) -> String {
        strip_tags(&strip_noise_blocks(html))
    }
}

impl IArticleExtractor for FullTextExtractor {
    fn extract(&self, url: &str) -> VeridexResult<ExtractedArticle> {
        let html = self.http.get_text(url)?;
        let text = Self::full_text(&html);

        if text.len() <= MIN_LOCAL_TEXT {
            return Err(PipelineError::ExtractionFailed {
                url: url.to_string(),
                reason: format!("recovered only {} chars of page text", text.len()),
            }
            .into());
        }

        let title = page_title(&html).unwrap_or_else(|| url.to_string());
        Ok(ExtractedArticle {
            title,
            text,
            method: self.name().to_string(),
        })
    }

    fn name(&self) -> &str {
        "fulltext-strip"
    }
}
