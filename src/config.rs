//! Configuration for data locations, provider URLs and refresh thresholds.
//!
//! A [`Config`] is passed explicitly into [`crate::dataset::SpaceWeather`];
//! nothing is read from process-wide state. The read options are:
//!
//! | option            | effect                                               |
//! |-------------------|------------------------------------------------------|
//! | `refresh`         | re-download stale files before reading               |
//! | `update_interval` | staleness threshold for the recent-update file       |
//! | `history_max_age` | staleness threshold for the long-history file        |
//! | `update_min_age`  | minimum age before the update file is re-downloaded  |
//! | `cache` (OMNI)    | download missing yearly files                        |
//!
//! `refresh` and `update_interval` are per call ([`crate::models::ReadOptions`]),
//! the thresholds live in the per-source [`SourceConfig`], and `cache` is an
//! argument of [`crate::dataset::SpaceWeather::omni_hourly`].

use crate::constants::{self, staleness};
use crate::error::{Result, SpaceWeatherError};
use crate::models::FormatKind;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Download and refresh settings of one history/update file pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL of the long-history file
    pub history_url: String,

    /// URL of the recent-update file
    pub update_url: String,

    /// Local file name of the long-history file, below the data directory
    pub history_file: String,

    /// Local file name of the recent-update file, below the data directory
    pub update_file: String,

    /// Age after which the history file is downloaded again
    pub history_max_age: Duration,

    /// Age after which the update file is downloaded again
    pub update_min_age: Duration,

    /// Age after which reading the pair reports stale data
    pub update_interval: Duration,
}

impl SourceConfig {
    fn celestrak() -> Self {
        Self {
            history_url: constants::CELESTRAK_URL_ALL.to_string(),
            update_url: constants::CELESTRAK_URL_5Y.to_string(),
            history_file: basename(constants::CELESTRAK_URL_ALL),
            update_file: basename(constants::CELESTRAK_URL_5Y),
            history_max_age: Duration::from_secs(staleness::CELESTRAK_HISTORY_MAX_AGE),
            update_min_age: Duration::from_secs(staleness::CELESTRAK_UPDATE_MIN_AGE),
            update_interval: Duration::from_secs(staleness::CELESTRAK_UPDATE_INTERVAL),
        }
    }

    /// GFZ-hosted pair; all GFZ products share the same thresholds
    fn gfz(history_url: &str, update_url: &str) -> Self {
        Self {
            history_url: history_url.to_string(),
            update_url: update_url.to_string(),
            history_file: basename(history_url),
            update_file: basename(update_url),
            history_max_age: Duration::from_secs(staleness::GFZ_HISTORY_MAX_AGE),
            update_min_age: Duration::from_secs(staleness::GFZ_UPDATE_MIN_AGE),
            update_interval: Duration::from_secs(staleness::GFZ_UPDATE_INTERVAL),
        }
    }

    pub fn with_update_interval(mut self, interval: Duration) -> Self {
        self.update_interval = interval;
        self
    }

    pub fn with_history_max_age(mut self, max_age: Duration) -> Self {
        self.history_max_age = max_age;
        self
    }

    pub fn with_update_min_age(mut self, min_age: Duration) -> Self {
        self.update_min_age = min_age;
        self
    }

    /// Point both files at another server, keeping the local file names
    pub fn with_urls(mut self, history_url: impl Into<String>, update_url: impl Into<String>) -> Self {
        self.history_url = history_url.into();
        self.update_url = update_url.into();
        self
    }
}

/// Location of the yearly OMNI2 extended files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OmniConfig {
    pub url_base: String,
    pub prefix: String,
    pub ext: String,
    /// Sub-directory of the data directory holding the yearly files
    pub subdir: String,
}

impl Default for OmniConfig {
    fn default() -> Self {
        Self {
            url_base: constants::OMNI_URL_BASE.to_string(),
            prefix: constants::OMNI_PREFIX.to_string(),
            ext: constants::OMNI_EXT.to_string(),
            subdir: constants::OMNI_SUBDIR.to_string(),
        }
    }
}

impl OmniConfig {
    /// File name of one year, e.g. `omni2_2012.dat`
    pub fn file_name(&self, year: i32) -> String {
        format!("{}_{:04}.{}", self.prefix, year, self.ext)
    }

    pub fn url(&self, year: i32) -> String {
        format!("{}/{}", self.url_base.trim_end_matches('/'), self.file_name(year))
    }
}

/// Global configuration for the space weather reader
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Root directory of the local file cache
    pub data_dir: PathBuf,

    /// Show a progress spinner while downloading
    pub show_progress: bool,

    pub celestrak: SourceConfig,
    pub gfz: SourceConfig,
    pub wdc: SourceConfig,
    pub hp30: SourceConfig,
    pub hp60: SourceConfig,
    pub omni: OmniConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            show_progress: false,
            celestrak: SourceConfig::celestrak(),
            gfz: SourceConfig::gfz(constants::GFZ_URL_ALL, constants::GFZ_URL_30D),
            wdc: SourceConfig::gfz(constants::WDC_URL_ALL, constants::WDC_URL_30D),
            hp30: SourceConfig::gfz(constants::HP30_URL_ALL, constants::HP30_URL_30D),
            hp60: SourceConfig::gfz(constants::HP60_URL_ALL, constants::HP60_URL_30D),
            omni: OmniConfig::default(),
        }
    }
}

impl Config {
    /// Create configuration with a custom data directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Enable the download progress spinner
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Replace the settings of one source
    pub fn with_source(mut self, kind: FormatKind, source: SourceConfig) -> Self {
        *self.source_mut(kind) = source;
        self
    }

    pub fn with_omni(mut self, omni: OmniConfig) -> Self {
        self.omni = omni;
        self
    }

    /// Settings of the file pair backing the given format
    pub fn source(&self, kind: FormatKind) -> &SourceConfig {
        match kind {
            FormatKind::Celestrak => &self.celestrak,
            FormatKind::Gfz => &self.gfz,
            FormatKind::Wdc => &self.wdc,
            FormatKind::Hp30 => &self.hp30,
            FormatKind::Hp60 => &self.hp60,
        }
    }

    fn source_mut(&mut self, kind: FormatKind) -> &mut SourceConfig {
        match kind {
            FormatKind::Celestrak => &mut self.celestrak,
            FormatKind::Gfz => &mut self.gfz,
            FormatKind::Wdc => &mut self.wdc,
            FormatKind::Hp30 => &mut self.hp30,
            FormatKind::Hp60 => &mut self.hp60,
        }
    }

    pub fn history_path(&self, kind: FormatKind) -> PathBuf {
        self.data_dir.join(&self.source(kind).history_file)
    }

    pub fn update_path(&self, kind: FormatKind) -> PathBuf {
        self.data_dir.join(&self.source(kind).update_file)
    }

    /// Directory of the yearly OMNI2 files
    pub fn omni_dir(&self) -> PathBuf {
        self.data_dir.join(&self.omni.subdir)
    }

    pub fn omni_path(&self, year: i32) -> PathBuf {
        self.omni_dir().join(self.omni.file_name(year))
    }

    /// Check that every threshold is representable as a time delta
    pub fn validate(&self) -> Result<()> {
        for kind in FormatKind::ALL {
            let source = self.source(kind);
            to_time_delta(source.history_max_age)?;
            to_time_delta(source.update_min_age)?;
            to_time_delta(source.update_interval)?;
            if source.history_file.is_empty() || source.update_file.is_empty() {
                return Err(SpaceWeatherError::configuration(format!(
                    "empty local file name for {kind}"
                )));
            }
        }
        Ok(())
    }
}

/// Default cache root, `<user data dir>/spaceweather`
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(constants::DATA_DIR_NAME)
}

/// Convert a configured duration into a chrono delta
pub fn to_time_delta(duration: Duration) -> Result<TimeDelta> {
    TimeDelta::from_std(duration).map_err(|_| {
        SpaceWeatherError::configuration(format!("duration out of range: {duration:?}"))
    })
}

/// Parse a duration such as `30s`, `3h`, `1d`, `10 days` or `2w`
pub fn parse_duration(text: &str) -> Result<Duration> {
    let text = text.trim();
    let split = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let (number, unit) = text.split_at(split);

    let value: u64 = number.parse().map_err(|_| {
        SpaceWeatherError::configuration(format!("invalid duration '{text}': missing number"))
    })?;

    let seconds = match unit.trim().to_ascii_lowercase().as_str() {
        "s" | "sec" | "secs" | "second" | "seconds" => 1,
        "m" | "min" | "mins" | "minute" | "minutes" => 60,
        "h" | "hr" | "hrs" | "hour" | "hours" => staleness::HOUR,
        "d" | "day" | "days" => staleness::DAY,
        "w" | "week" | "weeks" => 7 * staleness::DAY,
        other => {
            return Err(SpaceWeatherError::configuration(format!(
                "invalid duration '{text}': unknown unit '{other}'"
            )));
        }
    };

    value
        .checked_mul(seconds)
        .map(Duration::from_secs)
        .ok_or_else(|| SpaceWeatherError::configuration(format!("duration out of range: '{text}'")))
}

fn basename(url: &str) -> String {
    Path::new(url)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| url.to_string())
}
