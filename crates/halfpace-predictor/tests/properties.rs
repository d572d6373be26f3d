//! Numeric properties of the prediction and its rendering

use halfpace_domain::RaceTime;
use halfpace_predictor::{format_duration, predict};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_predict_is_strictly_increasing(a in 0u64..100_000, delta in 1u64..10_000) {
        let slower = predict(RaceTime::from_seconds(a + delta));
        let faster = predict(RaceTime::from_seconds(a));
        prop_assert!(faster < slower);
    }

    #[test]
    fn prop_predict_never_faster_than_input(secs in 0u64..100_000) {
        let five_k = RaceTime::from_seconds(secs);
        prop_assert!(predict(five_k) >= five_k);
    }

    #[test]
    fn prop_format_is_hh_mm_ss(secs in 0u64..360_000) {
        let rendered = format_duration(secs);
        prop_assert_eq!(rendered.len(), 8);

        let parts: Vec<u64> = rendered.split(':').map(|p| p.parse().unwrap()).collect();
        prop_assert_eq!(parts.len(), 3);
        prop_assert!(parts[1] < 60);
        prop_assert!(parts[2] < 60);
        prop_assert_eq!(parts[0] * 3600 + parts[1] * 60 + parts[2], secs);
    }
}

#[test]
fn test_five_k_of_23_minutes_predicts_1_45_48() {
    let half = predict(RaceTime::from_minutes_seconds(23, 0));
    assert_eq!(format_duration(half.total_seconds()), "01:45:48");
}

#[test]
fn test_five_k_of_23_15() {
    // 1395 * 4.6000837... = 6417.1
    let half = predict(RaceTime::from_minutes_seconds(23, 15));
    assert_eq!(format_duration(half.total_seconds()), "01:46:57");
}

#[test]
fn test_zero_predicts_zero() {
    assert_eq!(format_duration(predict(RaceTime::ZERO).total_seconds()), "00:00:00");
}
