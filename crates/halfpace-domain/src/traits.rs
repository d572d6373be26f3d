//! Trait definitions for external interactions
//!
//! These traits define the boundary between the pure parsing/prediction code and
//! infrastructure. Implementations live in other crates.

use std::future::Future;

/// Trait for language-model providers
///
/// Implemented by the infrastructure layer (halfpace-llm). The extractor and the
/// predictor never call a provider; only the comparison step of the front end does.
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Name of the model answering requests, for logging
    fn model_name(&self) -> &str;

    /// Generate a completion for `prompt` under the given system instruction
    fn generate(
        &self,
        system: &str,
        prompt: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
