//! Error types for LLM providers and the comparison step

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors that can occur during LLM operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Request did not complete in time
    #[error("Request timed out")]
    Timeout,

    /// Credentials were rejected
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// No API key in the environment
    #[error("API key not set (expected in ${0})")]
    MissingApiKey(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

impl LlmError {
    /// Coarse classification shown to the user
    pub fn kind(&self) -> FailureKind {
        match self {
            LlmError::Communication(_) | LlmError::Timeout | LlmError::RateLimitExceeded => {
                FailureKind::Transport
            }
            LlmError::Authentication(_) | LlmError::MissingApiKey(_) => FailureKind::Auth,
            LlmError::InvalidResponse(_) | LlmError::ModelNotAvailable(_) | LlmError::Other(_) => {
                FailureKind::Unknown
            }
        }
    }

    /// Whether a retry could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            LlmError::Communication(_) | LlmError::Timeout | LlmError::RateLimitExceeded
        )
    }
}

/// Kind of a failed comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// Network, timeout or rate limiting
    Transport,
    /// Missing or rejected credentials
    Auth,
    /// Anything else
    Unknown,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FailureKind::Transport => "transport",
            FailureKind::Auth => "auth",
            FailureKind::Unknown => "unknown",
        })
    }
}

/// A failed comparison, ready for display
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{kind} error: {message}")]
pub struct ComparisonError {
    /// Classification
    pub kind: FailureKind,
    /// Human-readable detail
    pub message: String,
}

impl ComparisonError {
    /// Create a comparison error
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<LlmError> for ComparisonError {
    fn from(e: LlmError) -> Self {
        Self::new(e.kind(), e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(LlmError::Timeout.kind(), FailureKind::Transport);
        assert_eq!(LlmError::Communication("x".into()).kind(), FailureKind::Transport);
        assert_eq!(LlmError::Authentication("401".into()).kind(), FailureKind::Auth);
        assert_eq!(LlmError::MissingApiKey("OPENAI_API_KEY".into()).kind(), FailureKind::Auth);
        assert_eq!(LlmError::InvalidResponse("x".into()).kind(), FailureKind::Unknown);
    }

    #[test]
    fn test_retryable() {
        assert!(LlmError::RateLimitExceeded.is_retryable());
        assert!(!LlmError::Authentication("401".into()).is_retryable());
    }

    #[test]
    fn test_comparison_error_from_llm_error() {
        let error: ComparisonError = LlmError::MissingApiKey("OPENAI_API_KEY".into()).into();
        assert_eq!(error.kind, FailureKind::Auth);
        assert_eq!(
            error.to_string(),
            "auth error: API key not set (expected in $OPENAI_API_KEY)"
        );
    }
}
