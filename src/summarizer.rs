use crate::config::Config;
use anyhow::{anyhow, Result};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
const SYSTEM_PROMPT: &str = "You are a helpful assistant that summarizes code.";

/// Client for one-line file summaries backed by the OpenAI chat API.
pub struct Summarizer {
    config: Config,
    client: Client,
}

impl Summarizer {
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { config, client })
    }

    /// Summarize a single file. This never fails: read errors, API errors
    /// and malformed responses all collapse into an error string that takes
    /// the summary's place, so one broken file cannot abort a batch.
    pub async fn summarize(&self, path: &Path) -> String {
        match self.try_summarize(path).await {
            Ok(summary) => summary,
            Err(e) => format!("Error analyzing file: {}", e),
        }
    }

    async fn try_summarize(&self, path: &Path) -> Result<String> {
        let content = tokio::fs::read_to_string(path).await?;

        let prompt = format!(
            "Please provide a one-line summary of what this script does:\n\n{}\n\nOne-line summary:",
            content
        );

        let payload = serde_json::json!({
            "model": self.config.model,
            "messages": [
                {
                    "role": "system",
                    "content": SYSTEM_PROMPT
                },
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature
        });

        let response = self
            .client
            .post(OPENAI_CHAT_URL)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(anyhow!("OpenAI API error: {}", error_text));
        }

        let response_json: serde_json::Value = response.json().await?;
        let summary = response_json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| anyhow!("Invalid response format from OpenAI"))?;

        Ok(summary.trim().to_string())
    }
}
