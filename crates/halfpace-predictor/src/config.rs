//! Configuration for the Predictor

use crate::error::PredictorError;
use crate::model::{RiegelModel, FIVE_K_KM, HALF_MARATHON_KM, RIEGEL_EXPONENT};
use serde::{Deserialize, Serialize};

/// Configuration for the Predictor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Distance of the known performance (km)
    #[serde(default = "default_from_km")]
    pub from_km: f64,

    /// Distance to predict (km)
    #[serde(default = "default_to_km")]
    pub to_km: f64,

    /// Fatigue exponent
    #[serde(default = "default_exponent")]
    pub exponent: f64,
}

impl PredictorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), PredictorError> {
        self.model().map(|_| ())
    }

    /// Build the model described by this configuration
    pub fn model(&self) -> Result<RiegelModel, PredictorError> {
        RiegelModel::with_exponent(self.from_km, self.to_km, self.exponent)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, PredictorError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| PredictorError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, PredictorError> {
        toml::to_string_pretty(self)
            .map_err(|e| PredictorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for PredictorConfig {
    /// 5 km → half marathon
    fn default() -> Self {
        Self {
            from_km: FIVE_K_KM,
            to_km: HALF_MARATHON_KM,
            exponent: RIEGEL_EXPONENT,
        }
    }
}

fn default_from_km() -> f64 {
    FIVE_K_KM
}

fn default_to_km() -> f64 {
    HALF_MARATHON_KM
}

fn default_exponent() -> f64 {
    RIEGEL_EXPONENT
}
