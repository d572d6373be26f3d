//! Halfpace LLM Provider Layer
//!
//! Language-model collaborators for the comparison step. Implements the
//! `LlmProvider` trait from `halfpace-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: deterministic canned answers for tests and offline use
//! - `OpenAiProvider`: OpenAI-compatible chat-completions API
//!
//! # Examples
//!
//! ```
//! use halfpace_llm::{Comparator, MockProvider};
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let comparator = Comparator::new(MockProvider::new("Jesteś w czołówce."));
//! let summary = runtime
//!     .block_on(comparator.compare("23 minuty", "Miejsce Czas", None))
//!     .unwrap();
//! assert_eq!(summary, "Jesteś w czołówce.");
//! ```

#![warn(missing_docs)]

mod comparator;
mod config;
mod error;
pub mod openai;
mod prompt;

use halfpace_domain::traits::LlmProvider as LlmProviderTrait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub use comparator::Comparator;
pub use config::{LlmConfig, ProviderKind};
pub use error::{ComparisonError, FailureKind, LlmError};
pub use openai::OpenAiProvider;
pub use prompt::{ComparisonPrompt, SYSTEM_PROMPT};

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured answers without any network calls. Specific answers
/// are chosen by substring match on the prompt, in the order they were added.
///
/// # Examples
///
/// ```
/// use halfpace_llm::{LlmError, MockProvider};
///
/// let mut provider = MockProvider::new("default");
/// provider.add_response("kobietą", "Na tle kobiet wypadasz dobrze.");
/// provider.add_error("401", LlmError::Authentication("bad key".into()));
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: Result<String, LlmError>,
    responses: Arc<Mutex<Vec<(String, Result<String, LlmError>)>>>,
    call_count: Arc<Mutex<usize>>,
    last_request: Arc<Mutex<Option<(String, String)>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self::with_default(Ok(response.into()))
    }

    /// Create a MockProvider that fails every request with `error`
    pub fn failing(error: LlmError) -> Self {
        Self::with_default(Err(error))
    }

    fn with_default(default_response: Result<String, LlmError>) -> Self {
        Self {
            default_response,
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Answer prompts containing `pattern` with `response`
    pub fn add_response(&mut self, pattern: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).push((pattern.into(), Ok(response.into())));
    }

    /// Fail prompts containing `pattern` with `error`
    pub fn add_error(&mut self, pattern: impl Into<String>, error: LlmError) {
        lock(&self.responses).push((pattern.into(), Err(error)));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *lock(&self.call_count)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *lock(&self.call_count) = 0;
    }

    /// The (system, prompt) pair of the most recent request
    pub fn last_request(&self) -> Option<(String, String)> {
        lock(&self.last_request).clone()
    }

    fn answer(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        *lock(&self.call_count) += 1;
        *lock(&self.last_request) = Some((system.to_string(), prompt.to_string()));

        lock(&self.responses)
            .iter()
            .find(|(pattern, _)| prompt.contains(pattern.as_str()))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| self.default_response.clone())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn model_name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, system: &str, prompt: &str) -> Result<String, Self::Error> {
        self.answer(system, prompt)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.generate("system", "any prompt").await;
        assert_eq!(result.unwrap(), "Test response");
    }

    #[tokio::test]
    async fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("kobietą", "female answer");
        provider.add_response("mężczyzną", "male answer");

        assert_eq!(provider.generate("s", "jestem kobietą").await.unwrap(), "female answer");
        assert_eq!(provider.generate("s", "jestem mężczyzną").await.unwrap(), "male answer");
        assert_eq!(provider.generate("s", "nic").await.unwrap(), "Default mock response");
    }

    #[tokio::test]
    async fn test_mock_provider_first_pattern_wins() {
        let mut provider = MockProvider::default();
        provider.add_response("23", "first");
        provider.add_response("minuty", "second");
        assert_eq!(provider.generate("s", "23 minuty").await.unwrap(), "first");
    }

    #[tokio::test]
    async fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");
        assert_eq!(provider.call_count(), 0);

        provider.generate("s", "prompt1").await.unwrap();
        provider.generate("s", "prompt2").await.unwrap();
        assert_eq!(provider.call_count(), 2);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad prompt", LlmError::Timeout);

        let result = provider.generate("s", "a bad prompt").await;
        assert_eq!(result, Err(LlmError::Timeout));
    }

    #[tokio::test]
    async fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.generate("s", "test").await.unwrap();

        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
        assert_eq!(
            provider2.last_request(),
            Some(("s".to_string(), "test".to_string()))
        );
    }
}
