//! Joining a long-history table with its recent-update table

use crate::constants::columns::TIME;
use crate::error::{Result, SpaceWeatherError};
use polars::prelude::*;
use tracing::debug;

/// Timestamps of a table in nanoseconds
pub fn time_values(frame: &DataFrame) -> Result<Vec<i64>> {
    let column = frame.column(TIME)?.cast(&DataType::Int64)?;
    Ok(column.i64()?.into_no_null_iter().collect())
}

/// Stitch `history` and `update` into one strictly increasing table
///
/// History rows up to and including the first update timestamp are kept,
/// followed by the update rows after the last kept history row. When both
/// files carry the seam date its history row wins.
pub fn merge_pair(history: &DataFrame, update: &DataFrame) -> Result<DataFrame> {
    if update.height() == 0 {
        return Ok(history.clone());
    }
    if history.height() == 0 {
        return Ok(update.clone());
    }
    if history.schema() != update.schema() {
        return Err(SpaceWeatherError::configuration(
            "cannot merge tables with different schemas",
        ));
    }

    let history_times = time_values(history)?;
    let update_times = time_values(update)?;
    let Some(&seam) = update_times.first() else {
        return Ok(history.clone());
    };

    let keep: BooleanChunked = history_times.iter().map(|&t| t <= seam).collect();
    let head = history.filter(&keep)?;
    let tail = match history_times.iter().copied().filter(|&t| t <= seam).max() {
        Some(last) => {
            let after: BooleanChunked = update_times.iter().map(|&t| t > last).collect();
            update.filter(&after)?
        }
        None => update.clone(),
    };

    debug!(
        "Merging {} history rows with {} update rows",
        head.height(),
        tail.height()
    );

    let mut merged = head;
    merged.vstack_mut(&tail)?;
    Ok(merged)
}
