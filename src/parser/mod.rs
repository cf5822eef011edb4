//! Fixed-width record decoder for space weather index files
//!
//! ## Architecture
//!
//! - [`fixed_width`] - File-level parsing and table assembly
//! - [`record_parser`] - Line classification and record decoding
//! - [`field_parsers`] - Field slicing, number parsing and date helpers
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```no_run
//! use spaceweather_indices::parser::FixedWidthParser;
//! use spaceweather_indices::schema::{Layout, LayoutKind};
//!
//! # fn example() -> spaceweather_indices::Result<()> {
//! let parser = FixedWidthParser::new(Layout::for_kind(LayoutKind::Gfz));
//! let result = parser.parse_file(std::path::Path::new("Kp_ap_Ap_SN_F107_nowcast.txt"))?;
//!
//! println!("Parsed {} records, skipped {}",
//!          result.stats.records_parsed,
//!          result.stats.records_skipped);
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod fixed_width;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
mod tests;

pub use fixed_width::FixedWidthParser;
pub use record_parser::{ColumnBuffer, LineKind, RecordParser};
pub use stats::{ParseResult, ParseStats};
