use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),

    #[error("No transcript available for video {video_id}: {reason}")]
    TranscriptUnavailable { video_id: String, reason: String },

    #[error("Summarization failed: {0}")]
    Summarization(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn unavailable(video_id: &str, reason: impl Into<String>) -> Self {
        Error::TranscriptUnavailable {
            video_id: video_id.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
