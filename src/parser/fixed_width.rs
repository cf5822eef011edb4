//! File-level fixed-width parsing
//!
//! Drives a [`RecordParser`] over the lines of a file and assembles the
//! decoded buffers into a polars table with a leading `time` column.

use super::record_parser::{LineKind, RecordParser};
use super::stats::{ParseResult, ParseStats};
use crate::constants::columns::TIME;
use crate::error::{Result, SpaceWeatherError};
use crate::schema::Layout;
use crate::series::normalize::apply_scale;
use polars::prelude::*;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parser for one fixed-width layout
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthParser {
    layout: &'static Layout,
}

impl FixedWidthParser {
    pub fn new(layout: &'static Layout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &'static Layout {
        self.layout
    }

    /// Read and decode a whole file
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        if !path.exists() {
            return Err(SpaceWeatherError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        self.parse_str(&content, path)
    }

    /// Decode file contents, `source` is only used in error messages
    pub fn parse_str(&self, content: &str, source: &Path) -> Result<ParseResult> {
        let mut parser = RecordParser::new(self.layout)?;
        let mut stats = ParseStats::new();

        for (index, line) in content.lines().enumerate() {
            stats.total_lines += 1;
            if index < self.layout.header_lines {
                stats.header_lines += 1;
                continue;
            }

            match parser.classify(line) {
                LineKind::Comment => stats.comment_lines += 1,
                LineKind::Placeholder => stats.records_skipped += 1,
                LineKind::Data => {
                    parser.push_line(line, index + 1, source)?;
                    stats.records_parsed += 1;
                }
            }
        }

        let frame = self.build_frame(parser)?;

        debug!(
            "Parsed {} ({}): {} records, {} skipped, {} comment lines",
            source.display(),
            self.layout.name,
            stats.records_parsed,
            stats.records_skipped,
            stats.comment_lines
        );

        Ok(ParseResult { frame, stats })
    }

    fn build_frame(&self, parser: RecordParser) -> Result<DataFrame> {
        let (times, buffers) = parser.finish();

        let mut columns = Vec::with_capacity(buffers.len() + 1);
        columns.push(
            Column::new(TIME.into(), times)
                .cast(&DataType::Datetime(TimeUnit::Nanoseconds, None))?,
        );
        for (field, buffer) in self.layout.fields.iter().zip(buffers) {
            columns.push(apply_scale(field, buffer).into_column(field.name));
        }

        Ok(DataFrame::new(columns)?)
    }
}
