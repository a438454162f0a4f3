//! Article extraction: ordered strategy chain over `IArticleExtractor`
//! implementations, first success wins.

pub mod dom;
pub mod fulltext;
pub mod remote;

pub use dom::DomParagraphExtractor;
pub use fulltext::FullTextExtractor;
pub use remote::RemoteLlmExtractor;

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use veridex_core::errors::{PipelineError, VeridexResult};
use veridex_core::models::ExtractedArticle;
use veridex_core::traits::IArticleExtractor;

/// Local strategies must recover strictly more than this many characters
/// of body text to count as a success.
pub const MIN_LOCAL_TEXT: usize = 50;

static RE_TITLE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").ok());
static RE_COMMENT: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").ok());
static RE_TAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?s)<[^>]+>").ok());
static RE_WHITESPACE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s+").ok());

/// Elements whose entire content is boilerplate, not article text.
/// `head` is listed after `header`; the `\b` keeps them from matching
/// each other's tags.
static NOISE_BLOCKS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        "script", "style", "nav", "footer", "header", "head", "aside", "form", "button",
        "noscript",
    ]
    .iter()
    .filter_map(|tag| Regex::new(&format!(r"(?is)<{tag}\b[^>]*>.*?</{tag}>")).ok())
    .collect()
});

/// Remove boilerplate elements wholesale.
fn strip_noise_blocks(html: &str) -> String {
    let mut out = html.to_string();
    if let Some(re) = RE_COMMENT.as_ref() {
        out = re.replace_all(&out, " ").into_owned();
    }
    for re in NOISE_BLOCKS.iter() {
        out = re.replace_all(&out, " ").into_owned();
    }
    out
}

/// Drop every remaining tag, decode common entities, collapse runs of
/// whitespace.
fn strip_tags(html: &str) -> String {
    let mut out = html.to_string();
    if let Some(re) = RE_TAG.as_ref() {
        out = re.replace_all(&out, " ").into_owned();
    }
    out = decode_entities(&out);
    if let Some(re) = RE_WHITESPACE.as_ref() {
        out = re.replace_all(&out, " ").into_owned();
    }
    out.trim().to_string()
}

/// Decode the handful of entities that show up in article prose.
/// `&amp;` goes last so double-encoded text is not decoded twice.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

/// The page `<title>`, when present and non-empty after stripping.
fn page_title(html: &str) -> Option<String> {
    let re = RE_TITLE.as_ref()?;
    let captured = re.captures(html)?.get(1)?.as_str();
    let title = strip_tags(captured);
    (!title.is_empty()).then_some(title)
}

/// Ordered extraction strategies; the first success wins.
///
/// Unlike the embedding and NLI chains this is a chain of equals, so no
/// degradation events are recorded; a strategy miss is normal operation.
pub struct ExtractionChain {
    extractors: Vec<Box<dyn IArticleExtractor>>,
}

impl Default for ExtractionChain {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionChain {
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    pub fn push(&mut self, extractor: Box<dyn IArticleExtractor>) {
        self.extractors.push(extractor);
    }

    /// Try each strategy in order; return the first extracted article.
    pub fn extract(&self, url: &str) -> VeridexResult<ExtractedArticle> {
        let mut last_error = None;

        for extractor in &self.extractors {
            match extractor.extract(url) {
                Ok(article) => {
                    debug!(method = extractor.name(), url, "extraction succeeded");
                    return Ok(article);
                }
                Err(e) => {
                    debug!(
                        strategy = extractor.name(),
                        url,
                        error = %e,
                        "extraction strategy failed, trying next"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            PipelineError::ExtractionFailed {
                url: url.to_string(),
                reason: "no extraction strategies configured".to_string(),
            }
            .into()
        }))
    }

    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}
