//! Shared helpers for the series tests

use crate::constants::columns::{AP_3H, KP_3H, TIME};
use chrono::NaiveDate;
use polars::prelude::*;

mod normalize_tests;
mod three_hourly_tests;

/// Midnight of the given day in nanoseconds
pub fn day_nanos(year: i32, month: u32, day: u32) -> i64 {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp_nanos_opt()
        .unwrap()
}

pub fn time_column(times: Vec<i64>) -> Column {
    Column::new(TIME.into(), times)
        .cast(&DataType::Datetime(TimeUnit::Nanoseconds, None))
        .unwrap()
}

/// Table with a time column and one integer value column
pub fn value_frame(days: &[u32], values: &[i32]) -> DataFrame {
    let times = days.iter().map(|&d| day_nanos(2024, 1, d)).collect();
    DataFrame::new(vec![
        time_column(times),
        Column::new("value".into(), values.to_vec()),
    ])
    .unwrap()
}

/// Daily table where day `d` carries `Ap{3i} = 10 * d + i` and `Kp{3i} = i / 3`
pub fn daily_frame(days: &[u32]) -> DataFrame {
    let times = days.iter().map(|&d| day_nanos(2024, 1, d)).collect();
    let mut columns = vec![time_column(times)];
    for (i, name) in KP_3H.iter().enumerate() {
        let values: Vec<f64> = days.iter().map(|_| i as f64 / 3.0).collect();
        columns.push(Column::new((*name).into(), values));
    }
    for (i, name) in AP_3H.iter().enumerate() {
        let values: Vec<i32> = days.iter().map(|&d| 10 * d as i32 + i as i32).collect();
        columns.push(Column::new((*name).into(), values));
    }
    DataFrame::new(columns).unwrap()
}

pub fn int_values(frame: &DataFrame, name: &str) -> Vec<Option<i32>> {
    frame
        .column(name)
        .unwrap()
        .cast(&DataType::Int32)
        .unwrap()
        .i32()
        .unwrap()
        .into_iter()
        .collect()
}

pub fn float_values(frame: &DataFrame, name: &str) -> Vec<Option<f64>> {
    frame
        .column(name)
        .unwrap()
        .cast(&DataType::Float64)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .collect()
}
