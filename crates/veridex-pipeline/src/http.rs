//! Blocking HTTP helper with retry, exponential backoff, and timeout,
//! shared by every remote collaborator (search, extraction,
//! summarization).

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use veridex_core::errors::{PipelineError, VeridexResult};

/// User agent presented when fetching article pages; some outlets serve
/// bot UAs an empty shell.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// Ceiling on the doubling backoff.
const MAX_BACKOFF: Duration = Duration::from_secs(8);

/// Shared blocking HTTP client. One instance per pipeline; connections
/// are pooled by reqwest underneath.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::blocking::Client,
    max_retries: u32,
    initial_backoff: Duration,
}

impl HttpClient {
    pub fn new(
        timeout: Duration,
        max_retries: u32,
        initial_backoff: Duration,
    ) -> VeridexResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .gzip(true)
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .map_err(|e| PipelineError::HttpError {
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            max_retries,
            initial_backoff,
        })
    }

    /// GET with query parameters, returning parsed JSON.
    pub fn get_json(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> VeridexResult<serde_json::Value> {
        let response = self.send_with_retries(url, || self.client.get(url).query(params))?;
        response.json().map_err(|e| {
            PipelineError::HttpError {
                reason: format!("deserialization failed: {e}"),
            }
            .into()
        })
    }

    /// POST a JSON payload, optionally bearer-authenticated, returning
    /// parsed JSON.
    pub fn post_json<Req: Serialize>(
        &self,
        url: &str,
        payload: &Req,
        bearer: Option<&str>,
    ) -> VeridexResult<serde_json::Value> {
        let response = self.send_with_retries(url, || {
            let mut request = self.client.post(url).json(payload);
            if let Some(token) = bearer {
                request = request.bearer_auth(token);
            }
            request
        })?;
        response.json().map_err(|e| {
            PipelineError::HttpError {
                reason: format!("deserialization failed: {e}"),
            }
            .into()
        })
    }

    /// GET returning the raw body, for article pages.
    pub fn get_text(&self, url: &str) -> VeridexResult<String> {
        let response = self.send_with_retries(url, || self.client.get(url))?;
        response.text().map_err(|e| {
            PipelineError::HttpError {
                reason: format!("body read failed: {e}"),
            }
            .into()
        })
    }

    /// Retry loop shared by all methods. 4xx responses return
    /// immediately; 5xx and transport errors back off and retry.
    fn send_with_retries(
        &self,
        url: &str,
        build: impl Fn() -> reqwest::blocking::RequestBuilder,
    ) -> VeridexResult<reqwest::blocking::Response> {
        let mut backoff = self.initial_backoff;
        let mut last_error = String::new();
        let mut timed_out = false;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                debug!(attempt, max = self.max_retries, ?backoff, "retrying request");
                std::thread::sleep(backoff);
                backoff = (backoff * 2).min(MAX_BACKOFF);
            }

            match build().send() {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }
                    if status.is_client_error() {
                        let body = response.text().unwrap_or_default();
                        return Err(PipelineError::HttpError {
                            reason: format!("HTTP {status}: {body}"),
                        }
                        .into());
                    }
                    timed_out = false;
                    last_error = format!("HTTP {status}");
                }
                Err(e) => {
                    timed_out = e.is_timeout();
                    last_error = e.to_string();
                }
            }
        }

        if timed_out {
            return Err(PipelineError::Timeout {
                url: url.to_string(),
                attempts: self.max_retries + 1,
            }
            .into());
        }
        Err(PipelineError::HttpError {
            reason: format!("all {} retries exhausted: {last_error}", self.max_retries),
        }
        .into())
    }
}
