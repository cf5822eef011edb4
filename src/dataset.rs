//! Public multi-resolution readers over the local file cache.
//!
//! [`SpaceWeather`] ties the pieces together: it checks the cached files of a
//! format for freshness, refreshes them through its [`Downloader`] when asked
//! to, decodes the history and update files and stitches them into one table.

use crate::config::{Config, to_time_delta};
use crate::error::{Result, SpaceWeatherError};
use crate::header;
use crate::models::{Advisory, FormatKind, ReadOptions};
use crate::parser::{FixedWidthParser, ParseResult};
use crate::schema::{Layout, LayoutKind};
use crate::series::{merge_pair, normalize, three_hourly};
use crate::update::{self, Downloader, HttpDownloader};
use chrono::{DateTime, TimeDelta, Utc};
use polars::prelude::DataFrame;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A merged table together with the advisories raised while producing it
#[derive(Debug, Clone)]
pub struct Reading {
    pub frame: DataFrame,
    pub advisories: Vec<Advisory>,
}

/// Reader for all supported index products
pub struct SpaceWeather {
    config: Config,
    downloader: Box<dyn Downloader>,
    reference_time: Option<DateTime<Utc>>,
}

impl SpaceWeather {
    /// Reader downloading over HTTP
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let downloader = HttpDownloader::new()?.with_progress(config.show_progress);
        Ok(Self::with_downloader(config, Box::new(downloader)))
    }

    pub fn with_downloader(config: Config, downloader: Box<dyn Downloader>) -> Self {
        Self {
            config,
            downloader,
            reference_time: None,
        }
    }

    /// Measure file ages against a fixed time instead of the system clock
    pub fn with_reference_time(mut self, now: DateTime<Utc>) -> Self {
        self.reference_time = Some(now);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn now(&self) -> DateTime<Utc> {
        self.reference_time.unwrap_or_else(Utc::now)
    }

    /// Combined daily table of a daily format
    pub fn daily(&self, kind: FormatKind, options: &ReadOptions) -> Result<DataFrame> {
        if !kind.is_daily() {
            return Err(SpaceWeatherError::configuration(format!(
                "{kind} is not a daily format"
            )));
        }
        Ok(self.read_pair(kind, options)?.frame)
    }

    /// 3-hourly Kp and Ap values of a daily format
    pub fn three_hourly(&self, kind: FormatKind, options: &ReadOptions) -> Result<DataFrame> {
        three_hourly(&self.daily(kind, options)?)
    }

    /// Combined Hp30 or Hp60 table
    pub fn sub_hourly(&self, kind: FormatKind, options: &ReadOptions) -> Result<DataFrame> {
        if !kind.is_sub_hourly() {
            return Err(SpaceWeatherError::configuration(format!(
                "{kind} is not a sub-hourly format"
            )));
        }
        Ok(self.read_pair(kind, options)?.frame)
    }

    /// Refresh as configured, then decode and merge the file pair of `kind`
    pub fn read_pair(&self, kind: FormatKind, options: &ReadOptions) -> Result<Reading> {
        let history = self.config.history_path(kind);
        let update = self.config.update_path(kind);
        let mut advisories = Vec::new();

        if !history.exists() || !update.exists() {
            warn!("Could not find {} data, trying to download", kind);
            advisories.extend(self.update(kind)?);
        }

        let stale = self.stale_files(kind, options)?;
        if !stale.is_empty() {
            if options.refresh {
                advisories.extend(self.update(kind)?);
            } else {
                for advisory in &stale {
                    warn!("{}", advisory);
                }
                advisories.extend(stale);
            }
        }

        let history_frame = self.read_file(kind, &history)?;
        let update_frame = self.read_file(kind, &update)?;
        let frame = merge_pair(&history_frame, &update_frame)?;
        debug!("{} table has {} rows", kind, frame.height());

        Ok(Reading { frame, advisories })
    }

    /// Download the files of `kind` that are missing or past their threshold
    pub fn update(&self, kind: FormatKind) -> Result<Vec<Advisory>> {
        update::refresh_pair(&self.config, kind, self.downloader.as_ref(), self.now())
    }

    /// Advisories a read would raise, without downloading or decoding
    pub fn check_freshness(&self, kind: FormatKind, options: &ReadOptions) -> Result<Vec<Advisory>> {
        let mut advisories: Vec<Advisory> = [self.config.history_path(kind), self.config.update_path(kind)]
            .into_iter()
            .filter(|path| !path.exists())
            .map(|path| Advisory::MissingData { path })
            .collect();
        advisories.extend(self.stale_files(kind, options)?);
        Ok(advisories)
    }

    /// Ages of the history and update files, `None` when unavailable
    pub fn file_ages(&self, kind: FormatKind) -> Vec<(PathBuf, Option<TimeDelta>)> {
        let stamp = kind.spec().stamp;
        let now = self.now();
        [self.config.history_path(kind), self.config.update_path(kind)]
            .into_iter()
            .map(|path| {
                let age = header::file_age(&path, stamp, now).ok();
                (path, age)
            })
            .collect()
    }

    fn stale_files(&self, kind: FormatKind, options: &ReadOptions) -> Result<Vec<Advisory>> {
        let source = self.config.source(kind);
        let stamp = kind.spec().stamp;
        let now = self.now();
        let update_interval = options.update_interval.unwrap_or(source.update_interval);
        let checks = [
            (self.config.history_path(kind), to_time_delta(source.history_max_age)?),
            (self.config.update_path(kind), to_time_delta(update_interval)?),
        ];

        let mut stale = Vec::new();
        for (path, threshold) in checks {
            if !path.exists() {
                continue;
            }
            match header::file_age(&path, stamp, now) {
                Ok(age) if age > threshold => stale.push(Advisory::StaleData {
                    path,
                    age: Some(age),
                    threshold,
                }),
                Ok(_) => {}
                Err(e) => {
                    debug!("No age for {}: {}", path.display(), e);
                    stale.push(Advisory::StaleData {
                        path,
                        age: None,
                        threshold,
                    });
                }
            }
        }
        Ok(stale)
    }

    /// Decode one file of `kind`, with the format's derived columns and renames
    pub fn parse_file(&self, kind: FormatKind, path: &Path) -> Result<ParseResult> {
        let spec = kind.spec();
        let result = FixedWidthParser::new(spec.layout).parse_file(path)?;
        Ok(ParseResult {
            frame: normalize::finalize(result.frame, &spec)?,
            stats: result.stats,
        })
    }

    pub fn read_file(&self, kind: FormatKind, path: &Path) -> Result<DataFrame> {
        Ok(self.parse_file(kind, path)?.frame)
    }

    /// Hourly OMNI2 table of one year, fill values are kept
    ///
    /// A missing file is downloaded first when `cache` is set.
    pub fn omni_hourly(&self, year: i32, cache: bool) -> Result<DataFrame> {
        let path = self.config.omni_path(year);
        if !path.exists() {
            warn!("Could not find OMNI2 data {}", path.display());
            if cache {
                if let Some(advisory) = self.cache_omni(year)? {
                    warn!("{}", advisory);
                }
            } else {
                warn!("Local data files not found, enable caching to download the file");
            }
        }
        self.read_omni_file(&path)
    }

    /// Download the OMNI2 file of `year` unless it is already cached
    pub fn cache_omni(&self, year: i32) -> Result<Option<Advisory>> {
        fs::create_dir_all(self.config.omni_dir())?;
        let path = self.config.omni_path(year);
        if path.exists() {
            debug!("{} already cached", path.display());
            return Ok(None);
        }
        let url = self.config.omni.url(year);
        info!("{} not found, downloading from {}", path.display(), url);
        Ok(update::fetch_file(self.downloader.as_ref(), &path, &url))
    }

    /// Years with a cached OMNI2 file, ascending
    pub fn cached_omni_years(&self) -> Result<Vec<i32>> {
        let omni = &self.config.omni;
        let pattern = self
            .config
            .omni_dir()
            .join(format!("{}_*.{}", omni.prefix, omni.ext));
        let paths = glob::glob(&pattern.to_string_lossy())
            .map_err(|e| SpaceWeatherError::configuration(format!("invalid OMNI2 pattern: {e}")))?;

        let prefix = format!("{}_", omni.prefix);
        let mut years: Vec<i32> = paths
            .filter_map(|entry| entry.ok())
            .filter_map(|path| {
                let stem = path.file_stem()?.to_str()?.to_string();
                stem.strip_prefix(&prefix)?.parse().ok()
            })
            .collect();
        years.sort_unstable();
        Ok(years)
    }

    /// Decode one OMNI2 file without masking its fill values
    pub fn parse_omni_file(&self, path: &Path) -> Result<ParseResult> {
        FixedWidthParser::new(Layout::for_kind(LayoutKind::Omni)).parse_file(path)
    }

    pub fn read_omni_file(&self, path: &Path) -> Result<DataFrame> {
        Ok(self.parse_omni_file(path)?.frame)
    }
}
