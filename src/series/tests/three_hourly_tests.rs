//! Tests for the 3-hourly re-derivation

use super::{daily_frame, day_nanos, float_values, int_values};
use crate::constants::NANOS_PER_HOUR;
use crate::series::merge::time_values;
use crate::series::three_hourly;

#[test]
fn test_timestamps_are_interval_midpoints() {
    let daily = daily_frame(&[1]);
    let result = three_hourly(&daily).unwrap();

    let midnight = day_nanos(2024, 1, 1);
    let expected: Vec<i64> = (0..8)
        .map(|i| midnight + i * 3 * NANOS_PER_HOUR + NANOS_PER_HOUR * 3 / 2)
        .collect();
    assert_eq!(time_values(&result).unwrap(), expected);
    assert_eq!(
        result.get_column_names_str(),
        vec!["time", "Ap", "Kp"]
    );
}

#[test]
fn test_values_follow_offset_order_across_days() {
    let daily = daily_frame(&[1, 2]);
    let result = three_hourly(&daily).unwrap();

    assert_eq!(result.height(), 16);
    let ap = int_values(&result, "Ap");
    let expected: Vec<Option<i32>> = (0..8)
        .map(|i| Some(10 + i))
        .chain((0..8).map(|i| Some(20 + i)))
        .collect();
    assert_eq!(ap, expected);

    let kp = float_values(&result, "Kp");
    assert_eq!(kp[0], Some(0.0));
    assert_eq!(kp[7], Some(7.0 / 3.0));
    assert_eq!(kp[8], Some(0.0));

    let times = time_values(&result).unwrap();
    assert!(times.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(times[8], day_nanos(2024, 1, 2) + NANOS_PER_HOUR * 3 / 2);
}

#[test]
fn test_empty_daily_table() {
    let daily = daily_frame(&[]);
    let result = three_hourly(&daily).unwrap();
    assert_eq!(result.height(), 0);
    assert_eq!(result.width(), 3);
}
