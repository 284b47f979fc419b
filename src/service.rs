use std::sync::Arc;

use log::{debug, info};

use crate::chunk::{DEFAULT_CHUNK_SIZE, chunks};
use crate::config::DEFAULT_LANGUAGE;
use crate::summarize::{Summarizer, summarize_all};
use crate::trim::trim;
use crate::youtube::TranscriptProvider;
use crate::{Result, extract_video_id};

/// URL in, word-limited summary out.
///
/// Cheap to clone; collaborators are shared behind `Arc`.
#[derive(Clone)]
pub struct SummarizationService {
    transcripts: Arc<dyn TranscriptProvider>,
    summarizer: Arc<dyn Summarizer>,
    language: String,
    chunk_size: usize,
}

impl SummarizationService {
    pub fn new(transcripts: Arc<dyn TranscriptProvider>, summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            transcripts,
            summarizer,
            language: DEFAULT_LANGUAGE.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub async fn summarize(&self, url: &str, max_words: Option<usize>) -> Result<String> {
        let video_id = extract_video_id(url)?;
        info!("Summarizing video {video_id} (max_words={max_words:?})");

        let transcript = self.transcripts.fetch(&video_id, &[self.language.as_str()]).await?;
        let text = transcript.text();
        debug!(
            "Transcript for {video_id} ({:?}, {}): {} segments, {} words",
            transcript.title,
            transcript.language,
            transcript.segments.len(),
            text.split_whitespace().count()
        );

        let combined = summarize_all(self.summarizer.as_ref(), chunks(&text, self.chunk_size)).await?;
        Ok(trim(&combined, max_words))
    }
}
