//! Unit normalization and per-format column adjustments
//!
//! Fields stored in tenths (Kp in the Celestrak, WDC and OMNI files) are
//! rescaled while the decoded buffers are turned into columns. Format-level
//! adjustments, the derived GFZ `Kpsum` and the Hp column renames, are applied
//! to the finished table.

use crate::constants::columns::{KP_3H, KP_SUM};
use crate::error::Result;
use crate::models::FormatSpec;
use crate::parser::ColumnBuffer;
use crate::schema::FieldSpec;
use polars::prelude::*;

/// Rescale a field with a scale factor, the result is always a float buffer
///
/// Dividing by the reciprocal keeps tenths exact to the nearest double
/// (raw 7 becomes 0.7, not 0.7000000000000001).
pub fn apply_scale(field: &FieldSpec, buffer: ColumnBuffer) -> ColumnBuffer {
    let Some(scale) = field.scale else {
        return buffer;
    };
    let divisor = scale.recip();
    match buffer {
        ColumnBuffer::Int(values) => ColumnBuffer::Float(
            values
                .into_iter()
                .map(|v| v.map(|v| f64::from(v) / divisor))
                .collect(),
        ),
        ColumnBuffer::Float(values) => ColumnBuffer::Float(
            values
                .into_iter()
                .map(|v| v.map(|v| v / divisor))
                .collect(),
        ),
    }
}

/// Recover the raw stored value of a rescaled field
pub fn raw_value(value: f64, scale: Option<f64>) -> f64 {
    match scale {
        Some(scale) => (value * scale.recip()).round(),
        None => value,
    }
}

/// Apply the format's derived columns and renames to a decoded table
pub fn finalize(mut frame: DataFrame, spec: &FormatSpec) -> Result<DataFrame> {
    if spec.derive_kp_sum {
        frame = with_kp_sum(frame)?;
    }
    for (from, to) in spec.renames {
        frame.rename(from, (*to).into())?;
    }
    Ok(frame)
}

/// Insert `Kpsum` after `Kp21`, null when any of the eight values is null
pub fn with_kp_sum(mut frame: DataFrame) -> Result<DataFrame> {
    let mut sums: Vec<Option<f64>> = vec![Some(0.0); frame.height()];
    for name in KP_3H {
        let column = frame.column(name)?.cast(&DataType::Float64)?;
        for (sum, value) in sums.iter_mut().zip(column.f64()?.into_iter()) {
            *sum = match (*sum, value) {
                (Some(total), Some(v)) => Some(total + v),
                _ => None,
            };
        }
    }

    let position = frame
        .get_column_index(KP_3H[7])
        .map(|index| index + 1)
        .unwrap_or(frame.width());
    frame.insert_column(position, Column::new(KP_SUM.into(), sums))?;
    Ok(frame)
}
