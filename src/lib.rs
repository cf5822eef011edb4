//! Space Weather Indices Library
//!
//! A Rust library for fetching, caching and decoding the fixed-width index
//! files published by Celestrak, GFZ Potsdam and NASA OMNIWeb.
//!
//! This library provides tools for:
//! - Decoding Celestrak, GFZ, WDC, Hp30/Hp60 and OMNI2 files into polars tables
//! - Keeping a local cache of history/update file pairs fresh
//! - Merging history and update files at their seam
//! - Deriving 3-hourly Kp/Ap series from daily tables
//! - Masking OMNI2 fill values
//! - Exporting tables to Parquet or CSV
//!
//! ```no_run
//! use spaceweather_indices::{Config, FormatKind, ReadOptions, SpaceWeather};
//!
//! # fn main() -> spaceweather_indices::Result<()> {
//! let reader = SpaceWeather::new(Config::default())?;
//! let daily = reader.daily(FormatKind::Gfz, &ReadOptions::default())?;
//! println!("{}", daily.head(Some(5)));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod header;
pub mod models;
pub mod parser;
pub mod schema;
pub mod series;
pub mod update;
pub mod writer;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::Config;
pub use dataset::{Reading, SpaceWeather};
pub use error::{Result, SpaceWeatherError};
pub use models::{Advisory, FormatKind, ReadOptions};
pub use series::{mask_missing, merge_pair, three_hourly};
