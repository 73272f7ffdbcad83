//! Groq Provider - ReplyGenerator over Groq's OpenAI-compatible API.
//!
//! Sends the off-script question as a single-message chat completion and
//! returns the first choice. Retries transient failures with exponential
//! backoff; everything else maps straight to a [`ReplyError`] variant.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GroqConfig::new(api_key)
//!     .with_model("openai/gpt-oss-20b")
//!     .with_timeout(Duration::from_secs(20));
//!
//! let provider = GroqProvider::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{ReplyError, ReplyGenerator};

/// Configuration for the Groq provider.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model identifier.
    pub model: String,
    /// Base URL for the OpenAI-compatible API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
}

impl GroqConfig {
    /// Creates a configuration with the given API key and reference defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "openai/gpt-oss-20b".to_string(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            timeout: Duration::from_secs(20),
            max_retries: 2,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Groq chat-completions implementation of [`ReplyGenerator`].
pub struct GroqProvider {
    config: GroqConfig,
    client: Client,
}

impl GroqProvider {
    /// Creates a provider with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized; this happens at
    /// startup, never mid-conversation.
    pub fn new(config: GroqConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    async fn send_request(&self, prompt: &str) -> Result<Response, ReplyError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ReplyError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    ReplyError::network(format!("Connection failed: {}", e))
                } else {
                    ReplyError::network(e.to_string())
                }
            })
    }

    async fn parse_response(&self, response: Response) -> Result<String, ReplyError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => ReplyError::AuthenticationFailed,
                429 => ReplyError::rate_limited(30),
                400 => ReplyError::InvalidRequest(body),
                500..=599 => {
                    ReplyError::unavailable(format!("server error {}: {}", status, body))
                }
                _ => ReplyError::network(format!("unexpected status {}: {}", status, body)),
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ReplyError::parse(format!("failed to parse response: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ReplyError::parse("no choices in response"))
    }
}

#[async_trait]
impl ReplyGenerator for GroqProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ReplyError> {
        let mut attempt = 0;
        loop {
            let result = match self.send_request(prompt).await {
                Ok(response) => self.parse_response(response).await,
                Err(err) => Err(err),
            };

            match result {
                Ok(reply) => return Ok(reply),
                Err(err) if err.is_retryable() && attempt < self.config.max_retries => {
                    tracing::debug!(attempt, error = %err, "retrying reply generation");
                    // Backoff: 1s, 2s, 4s, ...
                    sleep(Duration::from_secs(1 << attempt)).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

// ----- Wire types -----

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}
