//! Core data structures and types for space weather index reading.
//!
//! Defines the supported formats, the per-format decoder settings,
//! read options and the advisories reported instead of errors.

use crate::error::{Result, SpaceWeatherError};
use crate::schema::{Layout, LayoutKind};
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// File formats served through a history/update file pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    /// Celestrak SW-All legacy daily format
    Celestrak,
    /// GFZ Kp/ap/Ap/SN/F10.7 daily format
    Gfz,
    /// GFZ daily series in WDC exchange format
    Wdc,
    /// GFZ 30-minute Hp30/ap30 series
    Hp30,
    /// GFZ 60-minute Hp60/ap60 series
    Hp60,
}

impl FormatKind {
    pub const ALL: [FormatKind; 5] = [
        FormatKind::Celestrak,
        FormatKind::Gfz,
        FormatKind::Wdc,
        FormatKind::Hp30,
        FormatKind::Hp60,
    ];

    /// Resolve an optional user tag, `None` selects the GFZ format
    pub fn from_tag(tag: Option<&str>) -> Result<Self> {
        match tag {
            None => Ok(FormatKind::Gfz),
            Some(tag) => tag.parse(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FormatKind::Celestrak => "celestrak",
            FormatKind::Gfz => "gfz",
            FormatKind::Wdc => "wdc",
            FormatKind::Hp30 => "hp30",
            FormatKind::Hp60 => "hp60",
        }
    }

    /// Daily formats carry eight 3-hourly Kp/Ap values per row
    pub fn is_daily(&self) -> bool {
        matches!(self, FormatKind::Celestrak | FormatKind::Gfz | FormatKind::Wdc)
    }

    pub fn is_sub_hourly(&self) -> bool {
        matches!(self, FormatKind::Hp30 | FormatKind::Hp60)
    }

    /// Decoder settings for this format
    pub fn spec(&self) -> FormatSpec {
        match self {
            FormatKind::Celestrak => FormatSpec {
                kind: *self,
                layout: Layout::for_kind(LayoutKind::Celestrak),
                stamp: UpdateStamp::Trailer(crate::constants::UPDATED_MARKER),
                derive_kp_sum: false,
                renames: &[],
            },
            FormatKind::Gfz => FormatSpec {
                kind: *self,
                layout: Layout::for_kind(LayoutKind::Gfz),
                stamp: UpdateStamp::LastLineDate,
                derive_kp_sum: true,
                renames: &[],
            },
            FormatKind::Wdc => FormatSpec {
                kind: *self,
                layout: Layout::for_kind(LayoutKind::Wdc),
                stamp: UpdateStamp::LastLineWdcDate,
                derive_kp_sum: false,
                renames: &[],
            },
            FormatKind::Hp30 => FormatSpec {
                kind: *self,
                layout: Layout::for_kind(LayoutKind::Hp),
                stamp: UpdateStamp::LastLineDate,
                derive_kp_sum: false,
                renames: &[("Hp", "Hp30"), ("ap", "ap30")],
            },
            FormatKind::Hp60 => FormatSpec {
                kind: *self,
                layout: Layout::for_kind(LayoutKind::Hp),
                stamp: UpdateStamp::LastLineDate,
                derive_kp_sum: false,
                renames: &[("Hp", "Hp60"), ("ap", "ap60")],
            },
        }
    }
}

impl FromStr for FormatKind {
    type Err = SpaceWeatherError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "celestrak" | "sw" | "standard" => Ok(FormatKind::Celestrak),
            "gfz" | "default" => Ok(FormatKind::Gfz),
            "wdc" => Ok(FormatKind::Wdc),
            "hp30" => Ok(FormatKind::Hp30),
            "hp60" => Ok(FormatKind::Hp60),
            _ => Err(SpaceWeatherError::UnknownFormat {
                tag: tag.to_string(),
            }),
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the last-update time of a file is recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStamp {
    /// A trailer line starting with the marker, e.g. `UPDATED 2020 Mar 10 12:00:00 UTC`
    Trailer(&'static str),
    /// `YYYY MM DD` at the start of the final data line
    LastLineDate,
    /// `yymmdd` at the start of the final data line
    LastLineWdcDate,
}

/// Decoder configuration of one format
#[derive(Debug, Clone, Copy)]
pub struct FormatSpec {
    pub kind: FormatKind,
    pub layout: &'static Layout,
    pub stamp: UpdateStamp,
    /// Insert a `Kpsum` column computed from the eight Kp values
    pub derive_kp_sum: bool,
    /// Column renames applied after decoding
    pub renames: &'static [(&'static str, &'static str)],
}

/// Per-call options of the pair readers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Download stale files before reading
    pub refresh: bool,
    /// Override of the configured staleness threshold of the update file
    pub update_interval: Option<Duration>,
}

impl ReadOptions {
    pub fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    pub fn with_update_interval(mut self, interval: Duration) -> Self {
        self.update_interval = Some(interval);
        self
    }
}

/// Non-fatal condition noticed while reading
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    /// A local file is older than its threshold and was not refreshed,
    /// `age` is `None` when the update stamp could not be read
    StaleData {
        path: PathBuf,
        age: Option<TimeDelta>,
        threshold: TimeDelta,
    },
    /// A download failed; any existing file was left in place
    TransferFailure {
        path: PathBuf,
        url: String,
        reason: String,
    },
    /// A local file is absent
    MissingData { path: PathBuf },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::StaleData {
                path,
                age: Some(age),
                threshold,
            } => write!(
                f,
                "{} is {} days old (threshold {} days), consider refreshing",
                path.display(),
                age.num_days(),
                threshold.num_days()
            ),
            Advisory::StaleData {
                path, age: None, ..
            } => write!(
                f,
                "{} has no readable update stamp, consider refreshing",
                path.display()
            ),
            Advisory::TransferFailure { path, url, reason } => write!(
                f,
                "could not download {} to {}: {}",
                url,
                path.display(),
                reason
            ),
            Advisory::MissingData { path } => write!(f, "{} not found", path.display()),
        }
    }
}
