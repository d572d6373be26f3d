//! Comparison of a runner's self-report against historical results

use crate::error::ComparisonError;
use crate::prompt::{ComparisonPrompt, SYSTEM_PROMPT};
use halfpace_domain::traits::LlmProvider;
use tracing::{info, warn};

/// Asks a language model to compare the runner with past race results
///
/// The comparison is independent from extraction and prediction: a failure
/// here is returned as a [`ComparisonError`] for display and never affects
/// the parsed record or the predicted time.
pub struct Comparator<L>
where
    L: LlmProvider,
{
    provider: L,
}

impl<L> Comparator<L>
where
    L: LlmProvider + Sync,
    L::Error: Into<ComparisonError> + std::fmt::Display,
{
    /// Create a new Comparator
    pub fn new(provider: L) -> Self {
        Self { provider }
    }

    /// The underlying provider
    pub fn provider(&self) -> &L {
        &self.provider
    }

    /// Produce a short natural-language comparison
    pub async fn compare(
        &self,
        user_text: &str,
        sample: &str,
        predicted_half: Option<&str>,
    ) -> Result<String, ComparisonError> {
        let mut prompt = ComparisonPrompt::new(user_text, sample);
        if let Some(predicted) = predicted_half {
            prompt = prompt.with_prediction(predicted);
        }
        let prompt = prompt.build();

        info!(
            model = self.provider.model_name(),
            "Requesting comparison, prompt length {}",
            prompt.len()
        );

        match self.provider.generate(SYSTEM_PROMPT, &prompt).await {
            Ok(summary) => Ok(summary.trim().to_string()),
            Err(e) => {
                warn!("Comparison failed: {}", e);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FailureKind, LlmError, MockProvider};

    #[tokio::test]
    async fn test_compare_returns_trimmed_summary() {
        let comparator = Comparator::new(MockProvider::new("  Biegasz szybciej niż średnia.\n"));
        let summary = comparator.compare("23 minuty", "sample", None).await.unwrap();
        assert_eq!(summary, "Biegasz szybciej niż średnia.");
    }

    #[tokio::test]
    async fn test_compare_sends_system_prompt_and_prediction() {
        let provider = MockProvider::new("ok");
        let comparator = Comparator::new(provider.clone());
        comparator
            .compare("23 minuty", "sample", Some("01:45:48"))
            .await
            .unwrap();

        let (system, prompt) = provider.last_request().unwrap();
        assert_eq!(system, SYSTEM_PROMPT);
        assert!(prompt.contains("01:45:48"));
        assert!(prompt.contains("23 minuty"));
    }

    #[tokio::test]
    async fn test_compare_maps_errors_to_kinds() {
        let provider = MockProvider::failing(LlmError::Authentication("HTTP 401".into()));
        let comparator = Comparator::new(provider);
        let error = comparator.compare("x", "y", None).await.unwrap_err();
        assert_eq!(error.kind, FailureKind::Auth);
    }
}
