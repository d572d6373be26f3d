//! Error types for the Predictor

use thiserror::Error;

/// Errors that can occur when configuring a prediction model
#[derive(Error, Debug, PartialEq)]
pub enum PredictorError {
    /// A distance was zero, negative or not finite
    #[error("Invalid distance: {0} km")]
    InvalidDistance(f64),

    /// The exponent was zero, negative or not finite
    #[error("Invalid exponent: {0}")]
    InvalidExponent(f64),

    /// A named distance was not recognized
    #[error("Unknown race distance: {0}")]
    UnknownDistance(String),

    /// Configuration could not be read or written
    #[error("Configuration error: {0}")]
    Config(String),
}
