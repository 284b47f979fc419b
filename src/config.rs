use std::path::PathBuf;
use std::time::Duration;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::chunk::DEFAULT_CHUNK_SIZE;

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";
pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_YOUTUBE_URL: &str = "https://www.youtube.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Environment variable holding the inference API token
pub const TOKEN_ENV: &str = "HF_TOKEN";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub bind: Option<String>,
    pub server_url: Option<String>,
    pub language: Option<String>,
    pub chunk_size: Option<usize>,
    pub model: Option<String>,
    pub inference_url: Option<String>,
    pub youtube_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl Config {
    /// Load config from ~/.config/ytsum/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }

    pub fn bind(&self) -> &str {
        self.bind.as_deref().unwrap_or(DEFAULT_BIND)
    }

    pub fn server_url(&self) -> &str {
        self.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE)
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn inference_url(&self) -> &str {
        self.inference_url.as_deref().unwrap_or(DEFAULT_INFERENCE_URL)
    }

    pub fn youtube_url(&self) -> &str {
        self.youtube_url.as_deref().unwrap_or(DEFAULT_YOUTUBE_URL)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS))
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytsum")
        .join("config.toml")
}

/// Inference API token from the environment, if set and non-empty
pub fn api_token() -> Option<String> {
    std::env::var(TOKEN_ENV)
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}
