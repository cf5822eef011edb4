//! Tests for unit rescaling and format adjustments

use super::{float_values, time_column};
use crate::constants::columns::KP_3H;
use crate::models::FormatKind;
use crate::parser::ColumnBuffer;
use crate::schema::{Layout, LayoutKind};
use crate::series::normalize::{apply_scale, finalize, raw_value, with_kp_sum};
use polars::prelude::*;

#[test]
fn test_tenths_decode_exactly() {
    let layout = Layout::for_kind(LayoutKind::Celestrak);
    let field = layout.field("Kp0").unwrap();

    let scaled = apply_scale(field, ColumnBuffer::Int(vec![Some(7), None, Some(53)]));
    assert_eq!(scaled, ColumnBuffer::Float(vec![Some(0.7), None, Some(5.3)]));
}

#[test]
fn test_unscaled_fields_pass_through() {
    let layout = Layout::for_kind(LayoutKind::Celestrak);
    let field = layout.field("Ap0").unwrap();

    let buffer = ColumnBuffer::Int(vec![Some(56), None]);
    assert_eq!(apply_scale(field, buffer.clone()), buffer);
}

#[test]
fn test_raw_value_recovers_stored_integer() {
    assert_eq!(raw_value(9.9, Some(0.1)), 99.0);
    assert_eq!(raw_value(0.7, Some(0.1)), 7.0);
    assert_eq!(raw_value(999.9, None), 999.9);
}

fn kp_frame(rows: &[[Option<f64>; 8]]) -> DataFrame {
    let mut columns = vec![time_column((0..rows.len() as i64).collect())];
    for (i, name) in KP_3H.iter().enumerate() {
        let values: Vec<Option<f64>> = rows.iter().map(|row| row[i]).collect();
        columns.push(Column::new((*name).into(), values));
    }
    columns.push(Column::new("Ap0".into(), vec![1i32; rows.len()]));
    DataFrame::new(columns).unwrap()
}

#[test]
fn test_kp_sum_inserted_after_kp21() {
    let frame = kp_frame(&[
        [Some(1.0), Some(2.0), Some(0.5), Some(0.0), Some(1.0), Some(1.0), Some(1.0), Some(1.5)],
        [Some(1.0), None, Some(0.5), Some(0.0), Some(1.0), Some(1.0), Some(1.0), Some(1.5)],
    ]);

    let result = with_kp_sum(frame).unwrap();

    let names = result.get_column_names_str();
    assert_eq!(names[9], "Kpsum");
    assert_eq!(names[10], "Ap0");
    assert_eq!(float_values(&result, "Kpsum"), vec![Some(8.0), None]);
}

#[test]
fn test_finalize_renames_hp_columns() {
    let frame = DataFrame::new(vec![
        time_column(vec![0]),
        Column::new("Hp".into(), vec![1.667]),
        Column::new("ap".into(), vec![6i32]),
    ])
    .unwrap();

    let result = finalize(frame, &FormatKind::Hp60.spec()).unwrap();
    assert_eq!(result.get_column_names_str(), vec!["time", "Hp60", "ap60"]);
}
