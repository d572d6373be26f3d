//! OpenAI-compatible chat-completions provider
//!
//! Works with any endpoint speaking the `/chat/completions` protocol.
//!
//! # Features
//!
//! - Bearer-token authentication, key read from the environment
//! - Retry with exponential backoff on transport errors, 429 and 5xx
//! - Per-request timeout
//!
//! # Examples
//!
//! ```no_run
//! use halfpace_llm::{LlmConfig, OpenAiProvider};
//!
//! let provider = OpenAiProvider::from_config(&LlmConfig::default())?;
//! # Ok::<(), halfpace_llm::LlmError>(())
//! ```

use crate::config::LlmConfig;
use crate::LlmError;
use halfpace_domain::traits::LlmProvider as LlmProviderTrait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default API base URL
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// OpenAI-compatible chat provider
pub struct OpenAiProvider {
    endpoint: String,
    model: String,
    api_key: String,
    max_tokens: u32,
    temperature: f32,
    max_retries: u32,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiProvider {
    /// Create a provider with an explicit API key
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        let defaults = LlmConfig::default();
        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
            max_tokens: defaults.max_tokens,
            temperature: defaults.temperature,
            max_retries: defaults.max_retries,
            client,
        })
    }

    /// Create a provider from configuration, reading the key from the environment
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| LlmError::MissingApiKey(config.api_key_env.clone()))?;

        Ok(
            Self::new(&config.endpoint, &config.model, api_key, config.timeout())?
                .with_max_tokens(config.max_tokens)
                .with_temperature(config.temperature)
                .with_max_retries(config.max_retries),
        )
    }

    /// Set the maximum number of tokens in the answer
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the maximum number of attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.endpoint);
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        // Retry logic with exponential backoff
        let mut attempts = 0;
        loop {
            attempts += 1;
            match self.send_once(&url, &body).await {
                Ok(content) => return Ok(content),
                Err(e) if e.is_retryable() && attempts < self.max_retries => {
                    let delay = Duration::from_secs(2u64.pow(attempts - 1));
                    warn!("Attempt {} failed ({}), retrying in {:?}", attempts, e, delay);
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send_once(
        &self,
        url: &str,
        body: &ChatCompletionRequest<'_>,
    ) -> Result<String, LlmError> {
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout
                } else {
                    LlmError::Communication(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        debug!(status = status.as_u16(), "chat completion response");

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    LlmError::Authentication(format!("HTTP {}: {}", status, error_text))
                }
                StatusCode::NOT_FOUND => LlmError::ModelNotAvailable(self.model.clone()),
                StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded,
                s if s.is_server_error() => {
                    LlmError::Communication(format!("HTTP {}: {}", status, error_text))
                }
                _ => LlmError::InvalidResponse(format!("HTTP {}: {}", status, error_text)),
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| LlmError::InvalidResponse("Response has no content".to_string()))
    }
}

impl LlmProviderTrait for OpenAiProvider {
    type Error = LlmError;

    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, system: &str, prompt: &str) -> Result<String, Self::Error> {
        self.complete(system, prompt).await
    }
}
