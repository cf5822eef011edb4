//! Test utilities for fixed-width parser testing

use crate::schema::Layout;
use chrono::NaiveDate;
use polars::prelude::*;
use std::path::Path;


/// Build a fixed-width line, right-aligning each given value in its field
///
/// Fields not listed are left blank.
pub fn fixed_line(layout: &Layout, values: &[(&str, &str)]) -> String {
    let mut line = String::new();
    for field in layout.fields {
        let value = values
            .iter()
            .find(|(name, _)| *name == field.name)
            .map(|(_, value)| *value)
            .unwrap_or("");
        assert!(value.len() <= field.width, "{} too wide", field.name);
        line.push_str(&format!("{:>width$}", value, width = field.width));
    }
    line
}

/// Build a line from every field value in layout order
pub fn full_line(layout: &Layout, values: &[&str]) -> String {
    assert_eq!(values.len(), layout.fields.len());
    layout
        .fields
        .iter()
        .zip(values)
        .map(|(field, value)| format!("{:>width$}", value, width = field.width))
        .collect()
}

pub fn source() -> &'static Path {
    Path::new("test.txt")
}

pub fn nanos(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> i64 {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
        .and_utc()
        .timestamp_nanos_opt()
        .unwrap()
}

pub fn times(frame: &DataFrame) -> Vec<i64> {
    crate::series::merge::time_values(frame).unwrap()
}

pub fn int_at(frame: &DataFrame, name: &str, row: usize) -> Option<i32> {
    frame.column(name).unwrap().i32().unwrap().get(row)
}

pub fn float_at(frame: &DataFrame, name: &str, row: usize) -> Option<f64> {
    frame.column(name).unwrap().f64().unwrap().get(row)
}
