//! Race time module - elapsed time over a race distance

use serde::{Deserialize, Serialize};
use std::fmt;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3600;

/// A non-negative elapsed time, stored as total whole seconds
///
/// The components returned by [`hours`](Self::hours), [`minutes`](Self::minutes)
/// and [`seconds`](Self::seconds) are always normalized: seconds and minutes are
/// in `[0, 60)`. Inputs such as `23:75` are accepted and normalized to `24:15`.
///
/// # Examples
///
/// ```
/// use halfpace_domain::RaceTime;
///
/// let time = RaceTime::from_minutes_seconds(23, 15);
/// assert_eq!(time.total_seconds(), 1395);
/// assert_eq!(time.to_string(), "23:15");
///
/// let long = RaceTime::from_hms(1, 45, 48);
/// assert_eq!(long.to_string(), "01:45:48");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RaceTime(u64);

impl RaceTime {
    /// Zero elapsed time
    pub const ZERO: RaceTime = RaceTime(0);

    /// Create a race time from total whole seconds
    pub fn from_seconds(total_seconds: u64) -> Self {
        Self(total_seconds)
    }

    /// Create a race time from minutes and seconds
    pub fn from_minutes_seconds(minutes: u64, seconds: u64) -> Self {
        Self::from_hms(0, minutes, seconds)
    }

    /// Create a race time from hours, minutes and seconds
    pub fn from_hms(hours: u64, minutes: u64, seconds: u64) -> Self {
        Self(
            hours
                .saturating_mul(SECONDS_PER_HOUR)
                .saturating_add(minutes.saturating_mul(SECONDS_PER_MINUTE))
                .saturating_add(seconds),
        )
    }

    /// Total whole seconds
    pub fn total_seconds(&self) -> u64 {
        self.0
    }

    /// Whole hours
    pub fn hours(&self) -> u64 {
        self.0 / SECONDS_PER_HOUR
    }

    /// Minutes past the hour, in `[0, 60)`
    pub fn minutes(&self) -> u64 {
        (self.0 % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE
    }

    /// Seconds past the minute, in `[0, 60)`
    pub fn seconds(&self) -> u64 {
        self.0 % SECONDS_PER_MINUTE
    }
}

impl fmt::Display for RaceTime {
    /// `MM:SS` under one hour, `HH:MM:SS` from one hour on
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < SECONDS_PER_HOUR {
            write!(f, "{:02}:{:02}", self.minutes(), self.seconds())
        } else {
            write!(
                f,
                "{:02}:{:02}:{:02}",
                self.hours(),
                self.minutes(),
                self.seconds()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_short_form_under_an_hour() {
        assert_eq!(RaceTime::from_minutes_seconds(23, 0).to_string(), "23:00");
        assert_eq!(RaceTime::from_seconds(59).to_string(), "00:59");
        assert_eq!(RaceTime::from_seconds(3599).to_string(), "59:59");
    }

    #[test]
    fn test_long_form_from_an_hour() {
        assert_eq!(RaceTime::from_seconds(3600).to_string(), "01:00:00");
        assert_eq!(RaceTime::from_hms(1, 45, 48).to_string(), "01:45:48");
    }

    #[test]
    fn test_overflowing_components_are_normalized() {
        let time = RaceTime::from_minutes_seconds(23, 75);
        assert_eq!(time.minutes(), 24);
        assert_eq!(time.seconds(), 15);
    }

    #[test]
    fn test_serializes_as_seconds() {
        let json = serde_json::to_string(&RaceTime::from_minutes_seconds(23, 15)).unwrap();
        assert_eq!(json, "1395");
    }

    proptest! {
        #[test]
        fn prop_components_are_normalized(secs in 0u64..1_000_000) {
            let time = RaceTime::from_seconds(secs);
            prop_assert!(time.minutes() < 60);
            prop_assert!(time.seconds() < 60);
            prop_assert_eq!(
                RaceTime::from_hms(time.hours(), time.minutes(), time.seconds()),
                time
            );
        }
    }
}
