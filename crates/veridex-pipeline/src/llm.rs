//! Chat-completions plumbing shared by the remote extractor and the
//! remote summarizer.

use serde::Deserialize;

use veridex_core::errors::{PipelineError, VeridexResult};

use crate::http::HttpClient;

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: String,
}

/// Send one user prompt to a chat-completions endpoint and return the
/// first choice's content. Callers validate the content for their own
/// purposes; an empty completion is returned as an empty string.
pub(crate) fn chat_completion(
    http: &HttpClient,
    endpoint: &str,
    api_key: Option<&str>,
    model: Option<&str>,
    prompt: &str,
) -> VeridexResult<String> {
    let mut body = serde_json::json!({
        "messages": [{"role": "user", "content": prompt}],
    });
    if let Some(model) = model {
        body["model"] = serde_json::Value::String(model.to_string());
    }

    let value = http.post_json(endpoint, &body, api_key)?;
    let parsed: ChatResponse =
        serde_json::from_value(value).map_err(|e| PipelineError::HttpError {
            reason: format!("unexpected completion shape: {e}"),
        })?;

    Ok(parsed
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .unwrap_or_default())
}
