//! Paragraph-oriented extraction. News CMSes emit article prose as
//! `<p>` elements; collecting those and ignoring everything else gets a
//! clean body on most outlets.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use veridex_core::errors::{PipelineError, VeridexResult};
use veridex_core::models::ExtractedArticle;
use veridex_core::traits::IArticleExtractor;

use crate::http::HttpClient;

use super::{page_title, strip_noise_blocks, strip_tags, MIN_LOCAL_TEXT};

static RE_PARAGRAPH: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?is)<p[^>]*>(.*?)</p>").ok());

/// First-choice local strategy.
pub struct DomParagraphExtractor {
    http: Arc<HttpClient>,
}

impl DomParagraphExtractor {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Join the stripped contents of every paragraph element.
    fn paragraphs_text(html: &str) -> String {
        let Some(re) = RE_PARAGRAPH.as_ref() else {
            return String::new();
        };
        let paragraphs: Vec<String> = re
            .captures_iter(html)
            .filter_map(|c| c.get(1))
            .map(|m| strip_tags(m.as_str()))
            .filter(|p| !p.is_empty())
            .collect();
        paragraphs.join(" ")
    }
}

impl IArticleExtractor for DomParagraphExtractor {
    fn extract(&self, url: &str) -> VeridexResult<ExtractedArticle> {
        let html = self.http.get_text(url)?;
        let text = Self::paragraphs_text(&strip_noise_blocks(&html));

        if text.len() <= MIN_LOCAL_TEXT {
            return Err(PipelineError::ExtractionFailed {
                url: url.to_string(),
                reason: format!("recovered only {} chars of paragraph text", text.len()),
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
        "dom-paragraphs"
    }
}
