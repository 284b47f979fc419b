//! Form client for a running summarization server.

use eyre::{Result, bail, eyre};
use log::debug;
use serde::Serialize;

use crate::server::{SUMMARIZATION_FAILED, SummarizeRequest};

/// Smallest word limit the form accepts
pub const MIN_WORD_LIMIT: usize = 50;
/// Word limits move in steps of this size
pub const WORD_LIMIT_STEP: usize = 50;

const NO_SUMMARY: &str = "No summary available.";

/// What the server answered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Summary { summary: String },
    Failed { error: String, details: Option<String> },
}

/// Parse and validate a word limit as entered in the form
pub fn parse_word_limit(s: &str) -> std::result::Result<usize, String> {
    let n: usize = s.trim().parse().map_err(|_| format!("'{s}' is not a whole number"))?;
    if n < MIN_WORD_LIMIT {
        return Err(format!("word limit must be at least {MIN_WORD_LIMIT}"));
    }
    if n % WORD_LIMIT_STEP != 0 {
        return Err(format!("word limit must be a multiple of {WORD_LIMIT_STEP}"));
    }
    Ok(n)
}

/// Post a summarize request to `server_url` and interpret the answer
pub async fn request_summary(
    client: &reqwest::Client,
    server_url: &str,
    video_url: &str,
    max_words: Option<usize>,
) -> Result<Reply> {
    let video_url = video_url.trim();
    if video_url.is_empty() {
        bail!("Please enter a YouTube video URL.");
    }

    let endpoint = format!("{}/summarize", server_url.trim_end_matches('/'));
    debug!("Posting to {endpoint}");

    let payload = SummarizeRequest {
        url: video_url.to_string(),
        max_words,
    };

    let resp = client
        .post(&endpoint)
        .json(&payload)
        .send()
        .await
        .map_err(|e| eyre!("Error connecting to the backend: {e}"))?;

    let status = resp.status();
    let json: serde_json::Value = resp.json().await.unwrap_or_default();
    Ok(interpret(status, &json))
}

fn interpret(status: reqwest::StatusCode, json: &serde_json::Value) -> Reply {
    let field = |name: &str| json.get(name).and_then(|v| v.as_str()).map(|s| s.to_string());

    if status == reqwest::StatusCode::OK {
        Reply::Summary {
            summary: field("summary").unwrap_or_else(|| NO_SUMMARY.to_string()),
        }
    } else {
        Reply::Failed {
            error: field("error").unwrap_or_else(|| SUMMARIZATION_FAILED.to_string()),
            details: field("details"),
        }
    }
}
