//! AI provider configuration.

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ConfigError;

/// Settings for the external reply generator.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Groq API key. Required; there is no unauthenticated mode.
    pub groq_api_key: Secret<String>,

    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the OpenAI-compatible API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum retries on transient failures.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_model() -> String {
    "openai/gpt-oss-20b".to_string()
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

fn default_max_retries() -> u32 {
    2
}

impl AiConfig {
    /// Returns the API key for handing to the provider.
    pub fn api_key(&self) -> &str {
        self.groq_api_key.expose_secret()
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.groq_api_key.expose_secret().trim().is_empty() {
            return Err(ConfigError::validation("ai.groq_api_key must be set"));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::validation("ai.timeout_secs must be non-zero"));
        }
        Ok(())
    }
}
