//! Time-series assembly on top of decoded tables
//!
//! - [`normalize`] - Unit rescaling and per-format column adjustments
//! - [`mask`] - OMNI2 fill-value masking
//! - [`merge`] - History/update seam handling
//! - [`three_hourly`] - 3-hour series from daily tables

pub mod mask;
pub mod merge;
pub mod normalize;
pub mod three_hourly;

#[cfg(test)]
mod tests;

pub use mask::mask_missing;
pub use merge::merge_pair;
pub use three_hourly::three_hourly;
