use anyhow::{Context, Result};

use crate::models::assessment::ReplyFormat;

pub const DEFAULT_BASE_URL: &str = "https://api.cerebras.ai/v1";
pub const DEFAULT_MODEL: &str = "llama3.1-8b";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Application configuration loaded from environment variables.
/// The API key is only required by stages that call the model.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub reply_format: ReplyFormat,
    pub rust_log: String,
}

/// Everything the completion client needs, handed to it explicitly.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let reply_format = match std::env::var("REPLY_FORMAT") {
            Ok(raw) => raw
                .parse::<ReplyFormat>()
                .map_err(anyhow::Error::msg)
                .context("REPLY_FORMAT is invalid")?,
            Err(_) => ReplyFormat::default(),
        };

        Ok(Config {
            api_key: std::env::var("CEREBRAS_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            base_url: std::env::var("COMPLETION_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            model: std::env::var("COMPLETION_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            timeout_secs: match std::env::var("COMPLETION_TIMEOUT_SECS") {
                Ok(raw) => raw
                    .parse::<u64>()
                    .context("COMPLETION_TIMEOUT_SECS must be a whole number of seconds")?,
                Err(_) => DEFAULT_TIMEOUT_SECS,
            },
            reply_format,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Settings for the completion client. Fails if no API key is configured.
    pub fn completion_config(&self) -> Result<CompletionConfig> {
        let api_key = self
            .api_key
            .clone()
            .context("Required environment variable 'CEREBRAS_API_KEY' is not set")?;

        Ok(CompletionConfig {
            api_key,
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            timeout_secs: self.timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> Config {
        Config {
            api_key: api_key.map(str::to_string),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 30,
            reply_format: ReplyFormat::LabeledText,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_completion_config_requires_api_key() {
        let err = config(None).completion_config().unwrap_err();
        assert!(err.to_string().contains("CEREBRAS_API_KEY"));
    }

    #[test]
    fn test_completion_config_carries_settings() {
        let cc = config(Some("secret")).completion_config().unwrap();
        assert_eq!(cc.api_key, "secret");
        assert_eq!(cc.model, DEFAULT_MODEL);
        assert_eq!(cc.base_url, DEFAULT_BASE_URL);
        assert_eq!(cc.timeout_secs, 30);
    }
}
