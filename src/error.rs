//! Error handling for space weather index operations.
//!
//! Fatal conditions (missing files, malformed lines, unknown format tags) are
//! variants of [`SpaceWeatherError`]. Conditions with a safe fallback (stale
//! caches, failed downloads) are reported as [`crate::models::Advisory`] values
//! instead and never reach the caller as errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpaceWeatherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Data file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Malformed {format} line {line} in {path}: {reason}")]
    MalformedLayout {
        format: String,
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Unknown data format: '{tag}' (expected one of celestrak, gfz, wdc, hp30, hp60)")]
    UnknownFormat { tag: String },

    #[error("Transfer from {url} failed: {reason}")]
    TransferFailure { url: String, reason: String },

    #[error("No update stamp found in {path}")]
    MissingUpdateStamp { path: PathBuf },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl SpaceWeatherError {
    /// Create a malformed layout error for one line of a data file
    pub fn malformed(
        format: impl Into<String>,
        path: impl Into<PathBuf>,
        line: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedLayout {
            format: format.into(),
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a transfer failure
    pub fn transfer(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TransferFailure {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SpaceWeatherError>;
