//! Parsing statistics and result structures for fixed-width files

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

/// Decoded table with parsing statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// `time` column followed by one column per layout field
    pub frame: DataFrame,

    pub stats: ParseStats,
}

/// Line counts of one parsed file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total number of lines in the file
    pub total_lines: usize,

    /// Lines skipped unconditionally at the top of the file
    pub header_lines: usize,

    /// Blank lines and `#` comments
    pub comment_lines: usize,

    /// Records decoded into the table
    pub records_parsed: usize,

    /// Placeholder rows and section markers that were discarded
    pub records_skipped: usize,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of non-comment lines that became records, as a percentage
    pub fn data_ratio(&self) -> f64 {
        let candidates = self.records_parsed + self.records_skipped;
        if candidates == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / candidates as f64) * 100.0
        }
    }
}
