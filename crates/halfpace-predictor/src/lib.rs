//! Halfpace Predictor
//!
//! Extrapolates a 5 km time to a half-marathon time with Riegel's formula:
//!
//! ```text
//! t2 = t1 * (21.097 / 5) ^ 1.06
//! ```
//!
//! The result is truncated to whole seconds and rendered as `HH:MM:SS`. Callers
//! are expected to have a parsed [`RaceTime`](halfpace_domain::RaceTime) in hand;
//! nothing in this crate reads text.

#![warn(missing_docs)]

mod config;
mod error;
mod format;
mod model;

pub use config::PredictorConfig;
pub use error::PredictorError;
pub use format::format_duration;
pub use model::{
    distance_km, predict, RiegelModel, FIVE_K_KM, HALF_MARATHON_KM, MARATHON_KM,
    RIEGEL_EXPONENT, TEN_K_KM,
};
