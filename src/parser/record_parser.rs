//! Line-level decoding of fixed-width records
//!
//! A [`RecordParser`] classifies each line, slices data lines into their
//! fields and appends the values to one column buffer per field. Timestamps
//! are assembled from the layout's date fields and must strictly increase.

use super::field_parsers::{
    at_minute_of_day, date_from_doy, date_from_ymd, parse_float, parse_int, pivot_year,
    slice_field, to_nanos,
};
use crate::constants::{COMMENT_MARKER, NO_DATA_YEAR, columns};
use crate::error::{Result, SpaceWeatherError};
use crate::schema::{FieldKind, Layout, TimeKey};
use chrono::NaiveDateTime;
use polars::prelude::Column;
use std::path::Path;

/// Decoded values of one field
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnBuffer {
    Int(Vec<Option<i32>>),
    Float(Vec<Option<f64>>),
}

impl ColumnBuffer {
    fn for_kind(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Int => ColumnBuffer::Int(Vec::new()),
            FieldKind::Float => ColumnBuffer::Float(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnBuffer::Int(values) => values.len(),
            ColumnBuffer::Float(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, value: FieldValue) {
        match (self, value) {
            (ColumnBuffer::Int(values), FieldValue::Int(v)) => values.push(v),
            (ColumnBuffer::Float(values), FieldValue::Float(v)) => values.push(v),
            // Buffers are created from the same layout as the values
            (ColumnBuffer::Int(values), FieldValue::Float(_)) => values.push(None),
            (ColumnBuffer::Float(values), FieldValue::Int(v)) => values.push(v.map(f64::from)),
        }
    }

    pub fn into_column(self, name: &str) -> Column {
        match self {
            ColumnBuffer::Int(values) => Column::new(name.into(), values),
            ColumnBuffer::Float(values) => Column::new(name.into(), values),
        }
    }
}

/// Classification of a raw line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Blank line or `#` comment
    Comment,
    /// Section marker or no-data row, discarded before timestamp assignment
    Placeholder,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FieldValue {
    Int(Option<i32>),
    Float(Option<f64>),
}

impl FieldValue {
    fn as_int(&self) -> Option<i32> {
        match self {
            FieldValue::Int(v) => *v,
            FieldValue::Float(_) => None,
        }
    }

    fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Int(v) => v.map(f64::from),
            FieldValue::Float(v) => *v,
        }
    }
}

/// Positions of the fields making up the timestamp
#[derive(Debug, Clone, Copy)]
enum TimeFields {
    Date {
        month: usize,
        day: usize,
        pivot: bool,
    },
    DayOfYear {
        doy: usize,
        hour: usize,
    },
    FractionalHour {
        month: usize,
        day: usize,
        hour: usize,
    },
}

/// Accumulates the decoded records of one file
#[derive(Debug)]
pub struct RecordParser {
    layout: &'static Layout,
    spans: Vec<(usize, usize)>,
    year: usize,
    time_fields: TimeFields,
    buffers: Vec<ColumnBuffer>,
    times: Vec<i64>,
}

impl RecordParser {
    pub fn new(layout: &'static Layout) -> Result<Self> {
        let index = |name: &str| {
            layout.field_index(name).ok_or_else(|| {
                SpaceWeatherError::configuration(format!(
                    "layout {} has no '{}' field",
                    layout.name, name
                ))
            })
        };

        let year = index(columns::YEAR)?;
        let time_fields = match layout.time_key {
            TimeKey::YearMonthDay | TimeKey::WdcYearMonthDay => TimeFields::Date {
                month: index(columns::MONTH)?,
                day: index(columns::DAY)?,
                pivot: layout.time_key == TimeKey::WdcYearMonthDay,
            },
            TimeKey::YearDoyHour => TimeFields::DayOfYear {
                doy: index(columns::DOY)?,
                hour: index(columns::HOUR)?,
            },
            TimeKey::YearMonthDayFractionalHour => TimeFields::FractionalHour {
                month: index(columns::MONTH)?,
                day: index(columns::DAY)?,
                hour: index(columns::HH_H)?,
            },
        };

        Ok(Self {
            layout,
            spans: layout.spans(),
            year,
            time_fields,
            buffers: layout
                .fields
                .iter()
                .map(|f| ColumnBuffer::for_kind(f.kind))
                .collect(),
            times: Vec::new(),
        })
    }

    /// Decide whether a line is a comment, a placeholder or a data record
    ///
    /// A year field that is blank, non-numeric or the no-data year makes the
    /// line a placeholder.
    pub fn classify(&self, line: &str) -> LineKind {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
            return LineKind::Comment;
        }

        let (start, end) = self.spans[self.year];
        match slice_field(line, start, end).trim().parse::<i32>() {
            Ok(year) if year != NO_DATA_YEAR => LineKind::Data,
            _ => LineKind::Placeholder,
        }
    }

    /// Decode one data line and append it to the buffers
    pub fn push_line(&mut self, line: &str, line_number: usize, source: &Path) -> Result<()> {
        let malformed =
            |reason: String| SpaceWeatherError::malformed(self.layout.name, source, line_number, reason);

        if !line.is_ascii() {
            return Err(malformed("line contains non-ASCII characters".to_string()));
        }

        let width = self.layout.line_width();
        if line.len() < width && !self.layout.short_lines_allowed {
            return Err(malformed(format!(
                "line has {} characters, expected {}",
                line.len(),
                width
            )));
        }

        let line = line.trim_end();
        if line.len() > width && !self.layout.ignore_trailing {
            return Err(malformed(format!(
                "line has {} characters, expected at most {}",
                line.len(),
                width
            )));
        }

        let mut values = Vec::with_capacity(self.spans.len());
        for (field, &(start, end)) in self.layout.fields.iter().zip(&self.spans) {
            let text = slice_field(line, start, end);
            let value = match field.kind {
                FieldKind::Int => FieldValue::Int(parse_int(text, field.name).map_err(malformed)?),
                FieldKind::Float => {
                    FieldValue::Float(parse_float(text, field.name).map_err(malformed)?)
                }
            };
            values.push(value);
        }

        let time = self.timestamp(&mut values).map_err(malformed)?;
        let nanos = to_nanos(time)
            .ok_or_else(|| malformed(format!("timestamp {time} is out of range")))?;
        if let Some(&previous) = self.times.last() {
            if nanos <= previous {
                return Err(malformed(format!(
                    "timestamp {time} does not follow the previous record"
                )));
            }
        }

        self.times.push(nanos);
        for (buffer, value) in self.buffers.iter_mut().zip(values) {
            buffer.push(value);
        }
        Ok(())
    }

    /// Build the record timestamp, rewriting a two-digit year in place
    fn timestamp(&self, values: &mut [FieldValue]) -> std::result::Result<NaiveDateTime, String> {
        let required = |values: &[FieldValue], index: usize| {
            values[index]
                .as_int()
                .ok_or_else(|| format!("missing '{}'", self.layout.fields[index].name))
        };

        let mut year = required(values, self.year)?;
        match self.time_fields {
            TimeFields::Date { month, day, pivot } => {
                if pivot {
                    year = pivot_year(year);
                    values[self.year] = FieldValue::Int(Some(year));
                }
                let (month, day) = (required(values, month)?, required(values, day)?);
                date_from_ymd(year, month, day)
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
                    .ok_or_else(|| format!("invalid date {year:04}-{month:02}-{day:02}"))
            }
            TimeFields::DayOfYear { doy, hour } => {
                let (doy, hour) = (required(values, doy)?, required(values, hour)?);
                date_from_doy(year, doy)
                    .and_then(|date| at_minute_of_day(date, i64::from(hour) * 60))
                    .ok_or_else(|| format!("invalid date {year:04} day {doy} hour {hour}"))
            }
            TimeFields::FractionalHour { month, day, hour } => {
                let (month, day) = (required(values, month)?, required(values, day)?);
                let hours = values[hour]
                    .as_float()
                    .ok_or_else(|| format!("missing '{}'", self.layout.fields[hour].name))?;
                let minutes = (hours * 60.0).round() as i64;
                date_from_ymd(year, month, day)
                    .and_then(|date| at_minute_of_day(date, minutes))
                    .ok_or_else(|| {
                        format!("invalid date {year:04}-{month:02}-{day:02} hour {hours}")
                    })
            }
        }
    }

    /// Number of records decoded so far
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Timestamps in nanoseconds and one buffer per layout field
    pub fn finish(self) -> (Vec<i64>, Vec<ColumnBuffer>) {
        (self.times, self.buffers)
    }
}
