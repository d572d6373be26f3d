//! Rendering of predicted times

use halfpace_domain::RaceTime;

/// Render total seconds as `HH:MM:SS`
///
/// The hours component is always present, even when zero, unlike the short
/// `MM:SS` form used by [`RaceTime`]'s `Display`.
pub fn format_duration(total_seconds: u64) -> String {
    let time = RaceTime::from_seconds(total_seconds);
    format!(
        "{:02}:{:02}:{:02}",
        time.hours(),
        time.minutes(),
        time.seconds()
    )
}
