//! SERP-style web search provider.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use veridex_core::errors::{PipelineError, VeridexResult};
use veridex_core::models::RawArticle;
use veridex_core::traits::ISearchProvider;

use crate::http::HttpClient;

#[derive(Debug, Deserialize)]
struct SerpResponse {
    #[serde(default)]
    organic_results: Vec<SerpResult>,
}

#[derive(Debug, Deserialize)]
struct SerpResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    snippet: Option<String>,
}

/// Search provider speaking the SERP JSON API dialect.
///
/// Fetches a fixed number of result pages; a failed page is logged and
/// skipped, so a partial outage degrades to fewer candidates rather than
/// a failed verification.
pub struct SerpSearchProvider {
    http: Arc<HttpClient>,
    endpoint: String,
    api_key: Option<String>,
    pages: usize,
    page_size: usize,
}

impl SerpSearchProvider {
    pub fn new(
        http: Arc<HttpClient>,
        endpoint: String,
        api_key: Option<String>,
        pages: usize,
        page_size: usize,
    ) -> Self {
        Self {
            http,
            endpoint,
            api_key,
            pages,
            page_size,
        }
    }

    /// Flatten one page's organic results, assigning 1-based ranks
    /// offset by the page start.
    fn parse_page(value: serde_json::Value, start: usize) -> Vec<RawArticle> {
        let parsed: SerpResponse = match serde_json::from_value(value) {
            Ok(p) => p,
            Err(e) => {
                warn!(error = %e, "unexpected search response shape");
                return Vec::new();
            }
        };

        parsed
            .organic_results
            .into_iter()
            .enumerate()
            .filter(|(_, r)| !r.link.is_empty())
            .map(|(i, r)| RawArticle {
                title: r.title,
                url: r.link,
                snippet: r.snippet,
                rank: start + i + 1,
            })
            .collect()
    }
}

impl ISearchProvider for SerpSearchProvider {
    fn search(&self, query: &str) -> VeridexResult<Vec<RawArticle>> {
        let Some(api_key) = &self.api_key else {
            return Err(PipelineError::SearchFailed {
                reason: "no search API key configured".to_string(),
            }
            .into());
        };

        let mut articles = Vec::new();
        for page in 0..self.pages {
            let start = page * self.page_size;
            let params: Vec<(&str, String)> = vec![
                ("engine", "google".to_string()),
                ("q", query.to_string()),
                ("num", self.page_size.to_string()),
                ("start", start.to_string()),
                ("api_key", api_key.clone()),
            ];

            match self.http.get_json(&self.endpoint, &params) {
                Ok(value) => articles.extend(Self::parse_page(value, start)),
                Err(e) => {
                    warn!(page, error = %e, "search page failed, skipping");
                }
            }
        }

        debug!(query, results = articles.len(), "search complete");
        Ok(articles)
    }

    fn name(&self) -> &str {
        "serp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    fn provider(api_key: Option<&str>) -> SerpSearchProvider {
        let http = Arc::new(
            HttpClient::new(Duration::from_secs(1), 0, Duration::from_millis(10)).unwrap(),
        );
        SerpSearchProvider::new(
            http,
            "https://serp.invalid/search".to_string(),
            api_key.map(str::to_string),
            2,
            10,
        )
    }

    #[test]
    fn missing_api_key_is_a_search_failure() {
        let err = provider(None).search("mars rover").unwrap_err();
        assert!(err.to_string().contains("no search API key"));
    }

    #[test]
    fn page_results_get_global_ranks() {
        let page = json!({
            "organic_results": [
                {"title": "first", "link": "https://a.com/1", "snippet": "s1"},
                {"title": "second", "link": "https://b.com/2"},
            ]
        });
        let articles = SerpSearchProvider::parse_page(page, 10);
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].rank, 11);
        assert_eq!(articles[1].rank, 12);
        assert_eq!(articles[0].snippet.as_deref(), Some("s1"));
        assert_eq!(articles[1].snippet, None);
    }

    #[test]
    fn entries_without_links_are_skipped() {
        let page = json!({
            "organic_results": [
                {"title": "no link here"},
                {"title": "kept", "link": "https://c.com/3"},
            ]
        });
        let articles = SerpSearchProvider::parse_page(page, 0);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].url, "https://c.com/3");
        // rank reflects result position, not post-filter position
        assert_eq!(articles[0].rank, 2);
    }

    #[test]
    fn malformed_payload_yields_no_articles() {
        let articles = SerpSearchProvider::parse_page(json!({"error": "quota"}), 0);
        assert!(articles.is_empty());
    }
}
