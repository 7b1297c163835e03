use anyhow::anyhow;
use std::env;

/// Runtime configuration for a summarization run. Built once at startup and
/// passed down explicitly; no module reads the environment after this.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub max_tokens: usize,
    pub temperature: f32,
    pub timeout_seconds: u64,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// `OPENAI_API_KEY` and `OPENAI_API_MODEL` are required; either one
    /// missing is a fatal startup error. Callers that want `.env` support
    /// should load it before calling this.
    pub fn from_env() -> crate::Result<Self> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| anyhow!("OPENAI_API_KEY not found in environment or .env file"))?;
        let model = env::var("OPENAI_API_MODEL")
            .map_err(|_| anyhow!("OPENAI_API_MODEL not found in environment or .env file"))?;

        Ok(Self {
            api_key,
            model,
            max_tokens: 1000,
            temperature: 0.0,
            timeout_seconds: 300,
        })
    }
}
