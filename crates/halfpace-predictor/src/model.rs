//! Riegel power-law extrapolation between race distances

use crate::error::PredictorError;
use halfpace_domain::RaceTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 5 km in kilometres
pub const FIVE_K_KM: f64 = 5.0;

/// 10 km in kilometres
pub const TEN_K_KM: f64 = 10.0;

/// Half marathon in kilometres
pub const HALF_MARATHON_KM: f64 = 21.097;

/// Marathon in kilometres
pub const MARATHON_KM: f64 = 42.195;

/// Fatigue exponent from Riegel's model
pub const RIEGEL_EXPONENT: f64 = 1.06;

/// Resolve a race distance name (`5k`, `10k`, `half`, `marathon`) to kilometres
pub fn distance_km(name: &str) -> Result<f64, PredictorError> {
    match name.to_lowercase().as_str() {
        "5k" | "5km" => Ok(FIVE_K_KM),
        "10k" | "10km" => Ok(TEN_K_KM),
        "half" | "half-marathon" | "polmaraton" | "półmaraton" => Ok(HALF_MARATHON_KM),
        "marathon" | "maraton" => Ok(MARATHON_KM),
        _ => Err(PredictorError::UnknownDistance(name.to_string())),
    }
}

/// `t2 = t1 * (to_km / from_km) ^ exponent`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiegelModel {
    /// Distance of the known performance (km)
    pub from_km: f64,

    /// Distance to predict (km)
    pub to_km: f64,

    /// Fatigue exponent
    pub exponent: f64,
}

impl RiegelModel {
    /// Create a model between two distances with the standard exponent
    pub fn new(from_km: f64, to_km: f64) -> Result<Self, PredictorError> {
        Self::with_exponent(from_km, to_km, RIEGEL_EXPONENT)
    }

    /// Create a model with a custom exponent
    pub fn with_exponent(from_km: f64, to_km: f64, exponent: f64) -> Result<Self, PredictorError> {
        let model = Self {
            from_km,
            to_km,
            exponent,
        };
        model.validate()?;
        Ok(model)
    }

    /// 5 km → half marathon with exponent 1.06
    pub const fn five_k_to_half_marathon() -> Self {
        Self {
            from_km: FIVE_K_KM,
            to_km: HALF_MARATHON_KM,
            exponent: RIEGEL_EXPONENT,
        }
    }

    /// Validate the model
    pub fn validate(&self) -> Result<(), PredictorError> {
        for distance in [self.from_km, self.to_km] {
            if !distance.is_finite() || distance <= 0.0 {
                return Err(PredictorError::InvalidDistance(distance));
            }
        }
        if !self.exponent.is_finite() || self.exponent <= 0.0 {
            return Err(PredictorError::InvalidExponent(self.exponent));
        }
        Ok(())
    }

    /// The factor applied to the known time
    pub fn multiplier(&self) -> f64 {
        (self.to_km / self.from_km).powf(self.exponent)
    }

    /// Predict the time at `to_km`, truncated to whole seconds
    pub fn predict(&self, known: RaceTime) -> RaceTime {
        let predicted = known.total_seconds() as f64 * self.multiplier();
        // `as` saturates on overflow and truncates the fraction.
        let predicted = RaceTime::from_seconds(predicted as u64);
        debug!(%known, %predicted, "Riegel prediction");
        predicted
    }
}

impl Default for RiegelModel {
    fn default() -> Self {
        Self::five_k_to_half_marathon()
    }
}

/// Predict a half-marathon time from a 5 km time
///
/// # Examples
///
/// ```
/// use halfpace_domain::RaceTime;
/// use halfpace_predictor::{format_duration, predict};
///
/// let half = predict(RaceTime::from_minutes_seconds(23, 0));
/// assert_eq!(format_duration(half.total_seconds()), "01:45:48");
/// ```
pub fn predict(five_k_time: RaceTime) -> RaceTime {
    RiegelModel::five_k_to_half_marathon().predict(five_k_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_three_minutes() {
        // 1380 * (21.097 / 5)^1.06 = 6348.1...
        let half = predict(RaceTime::from_minutes_seconds(23, 0));
        assert_eq!(half.total_seconds(), 6348);
    }

    #[test]
    fn test_zero_in_zero_out() {
        assert_eq!(predict(RaceTime::ZERO), RaceTime::ZERO);
    }

    #[test]
    fn test_prediction_is_slower_than_input() {
        let five_k = RaceTime::from_minutes_seconds(20, 0);
        assert!(predict(five_k) > five_k);
    }

    #[test]
    fn test_multiplier() {
        let multiplier = RiegelModel::default().multiplier();
        assert!((multiplier - 4.6000837).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_models() {
        assert_eq!(
            RiegelModel::new(0.0, HALF_MARATHON_KM),
            Err(PredictorError::InvalidDistance(0.0))
        );
        assert_eq!(
            RiegelModel::with_exponent(FIVE_K_KM, HALF_MARATHON_KM, -1.0),
            Err(PredictorError::InvalidExponent(-1.0))
        );
        assert!(RiegelModel::new(FIVE_K_KM, f64::NAN).is_err());
    }

    #[test]
    fn test_marathon_model() {
        let model = RiegelModel::new(HALF_MARATHON_KM, MARATHON_KM).unwrap();
        let marathon = model.predict(RaceTime::from_hms(1, 45, 0));
        // 6300 * (42.195 / 21.097)^1.06 = 13_135.4...
        assert_eq!(marathon.total_seconds(), 13135);
    }

    #[test]
    fn test_distance_names() {
        assert_eq!(distance_km("5k").unwrap(), FIVE_K_KM);
        assert_eq!(distance_km("Half").unwrap(), HALF_MARATHON_KM);
        assert_eq!(distance_km("maraton").unwrap(), MARATHON_KM);
        assert!(distance_km("ultra").is_err());
    }
}
