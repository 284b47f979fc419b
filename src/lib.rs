pub mod chunk;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod server;
pub mod service;
pub mod summarize;
pub mod trim;
pub mod youtube;

use std::sync::LazyLock;

use regex::Regex;

pub use error::{Error, Result};

/// A single captioned segment
#[derive(Debug, Clone)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Complete transcript for a video
#[derive(Debug, Clone)]
pub struct Transcript {
    pub video_id: String,
    pub title: String,
    pub language: String,
    pub segments: Vec<Segment>,
}

impl Transcript {
    /// Segment texts joined with single spaces, in reading order
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// An 11-character YouTube video identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").expect("video id pattern is valid"));

/// Extract the video ID from a YouTube URL.
///
/// Takes the first 11-character run of `[0-9A-Za-z_-]` that directly follows
/// `v=` or `/`. Bare IDs without either prefix are rejected.
pub fn extract_video_id(url: &str) -> Result<VideoId> {
    let url = url.trim();
    VIDEO_ID_RE
        .captures(url)
        .map(|caps| VideoId(caps[1].to_string()))
        .ok_or_else(|| Error::InvalidUrl(url.to_string()))
}
