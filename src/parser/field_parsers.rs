//! Field parsing utilities for fixed-width records
//!
//! Helpers for slicing a column out of a line, converting its text into a
//! nullable number, and assembling calendar timestamps.

use crate::constants::WDC_CENTURY_PIVOT;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// Text of the character range `[start, end)`, clipped to the line length
///
/// Lines are ASCII (checked by the caller), so byte and character offsets agree.
pub fn slice_field(line: &str, start: usize, end: usize) -> &str {
    let len = line.len();
    line.get(start.min(len)..end.min(len)).unwrap_or("")
}

/// Parse an integer field, blank text is null
pub fn parse_int(text: &str, field_name: &str) -> Result<Option<i32>, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i32>()
        .map(Some)
        .map_err(|_| format!("invalid integer in field '{}': '{}'", field_name, trimmed))
}

/// Parse a floating point field, blank text is null
pub fn parse_float(text: &str, field_name: &str) -> Result<Option<f64>, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(format!(
            "invalid number in field '{}': '{}'",
            field_name, trimmed
        )),
    }
}

/// Expand a two-digit WDC year
pub fn pivot_year(two_digit: i32) -> i32 {
    if two_digit < WDC_CENTURY_PIVOT {
        2000 + two_digit
    } else {
        1900 + two_digit
    }
}

pub fn date_from_ymd(year: i32, month: i32, day: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
}

pub fn date_from_doy(year: i32, doy: i32) -> Option<NaiveDate> {
    NaiveDate::from_yo_opt(year, u32::try_from(doy).ok()?)
}

/// Midnight of `date` plus a whole number of minutes within the day
pub fn at_minute_of_day(date: NaiveDate, minutes: i64) -> Option<NaiveDateTime> {
    if !(0..24 * 60).contains(&minutes) {
        return None;
    }
    date.and_hms_opt(0, 0, 0)
        .map(|midnight| midnight + TimeDelta::minutes(minutes))
}

/// Nanoseconds since the Unix epoch, `None` outside the representable range
pub fn to_nanos(time: NaiveDateTime) -> Option<i64> {
    time.and_utc().timestamp_nanos_opt()
}
