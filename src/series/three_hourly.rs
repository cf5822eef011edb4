//! 3-hourly Kp and Ap series derived from daily tables

use super::merge::time_values;
use crate::constants::NANOS_PER_HOUR;
use crate::constants::columns::{AP, AP_3H, KP, KP_3H, TIME};
use crate::error::Result;
use polars::prelude::*;

/// Long table of the eight 3-hour values per day
///
/// Each value is stamped at the middle of its interval (01:30, 04:30, ...,
/// 22:30). Columns are `time`, `Ap` and `Kp`.
pub fn three_hourly(daily: &DataFrame) -> Result<DataFrame> {
    let days = time_values(daily)?;
    let capacity = days.len() * KP_3H.len();

    let mut times = Vec::with_capacity(capacity);
    let mut ap_values: Vec<Option<i32>> = Vec::with_capacity(capacity);
    let mut kp_values: Vec<Option<f64>> = Vec::with_capacity(capacity);

    for (offset, (ap_name, kp_name)) in AP_3H.iter().zip(KP_3H.iter()).enumerate() {
        let shift = offset as i64 * 3 * NANOS_PER_HOUR + NANOS_PER_HOUR * 3 / 2;
        times.extend(days.iter().map(|day| day + shift));

        let ap = daily.column(ap_name)?.cast(&DataType::Int32)?;
        ap_values.extend(ap.i32()?.into_iter());
        let kp = daily.column(kp_name)?.cast(&DataType::Float64)?;
        kp_values.extend(kp.f64()?.into_iter());
    }

    let frame = DataFrame::new(vec![
        Column::new(TIME.into(), times).cast(&DataType::Datetime(TimeUnit::Nanoseconds, None))?,
        Column::new(AP.into(), ap_values),
        Column::new(KP.into(), kp_values),
    ])?;

    Ok(frame.sort(
        [TIME],
        SortMultipleOptions::default().with_maintain_order(true),
    )?)
}
