use async_trait::async_trait;
use log::debug;

use crate::config::{DEFAULT_INFERENCE_URL, DEFAULT_MODEL};
use crate::{Error, Result};

/// Upper bound on generated summary length, in model tokens
pub const MAX_LENGTH: u32 = 100;
/// Lower bound on generated summary length, in model tokens
pub const MIN_LENGTH: u32 = 30;

/// A model turning a chunk of text into a shorter summary
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize_chunk(&self, chunk: &str) -> Result<String>;
}

/// Summarize every chunk in order and join the results with single spaces.
///
/// The first failing chunk aborts the whole run.
pub async fn summarize_all<I>(summarizer: &dyn Summarizer, chunks: I) -> Result<String>
where
    I: IntoIterator<Item = String>,
{
    let mut summaries = Vec::new();
    for (i, chunk) in chunks.into_iter().enumerate() {
        debug!("Summarizing chunk {i} ({} chars)", chunk.len());
        summaries.push(summarizer.summarize_chunk(&chunk).await?);
    }
    Ok(summaries.join(" "))
}

/// Summarizer backed by the Hugging Face inference API
#[derive(Debug, Clone)]
pub struct HuggingFaceSummarizer {
    client: reqwest::Client,
    endpoint: String,
    api_token: Option<String>,
}

impl HuggingFaceSummarizer {
    pub fn new(client: reqwest::Client, api_token: Option<String>) -> Self {
        Self::with_endpoint(client, DEFAULT_INFERENCE_URL, DEFAULT_MODEL, api_token)
    }

    pub fn with_endpoint(client: reqwest::Client, base_url: &str, model: &str, api_token: Option<String>) -> Self {
        Self {
            client,
            endpoint: format!("{}/models/{model}", base_url.trim_end_matches('/')),
            api_token,
        }
    }
}

#[async_trait]
impl Summarizer for HuggingFaceSummarizer {
    async fn summarize_chunk(&self, chunk: &str) -> Result<String> {
        debug!("Summarizing via {}", self.endpoint);

        let body = serde_json::json!({
            "inputs": chunk,
            "parameters": {
                "max_length": MAX_LENGTH,
                "min_length": MIN_LENGTH,
                "do_sample": false
            }
        });

        let mut req = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&body);
        if let Some(token) = &self.api_token {
            req = req.bearer_auth(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| Error::Summarization(format!("model request failed: {e}")))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| Error::Summarization(format!("reading model response failed: {e}")))?;

        let json: serde_json::Value = serde_json::from_str(&text)
            .map_err(|_| Error::Summarization(format!("model returned {status}: {text}")))?;

        if !status.is_success() {
            let message = extract_error(&json).unwrap_or(text);
            return Err(Error::Summarization(format!("model returned {status}: {message}")));
        }

        extract_summary_text(&json)
    }
}

fn extract_error(json: &serde_json::Value) -> Option<String> {
    json.get("error").and_then(|e| e.as_str()).map(|s| s.to_string())
}

fn extract_summary_text(json: &serde_json::Value) -> Result<String> {
    if let Some(message) = extract_error(json) {
        return Err(Error::Summarization(message));
    }
    json.get(0)
        .and_then(|first| first.get("summary_text"))
        .and_then(|t| t.as_str())
        .map(|t| t.to_string())
        .ok_or_else(|| Error::Summarization("unexpected model response format".to_string()))
}
