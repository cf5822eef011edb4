//! Shared helpers for the integration tests
#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use polars::prelude::*;
use spaceweather_indices::error::{Result, SpaceWeatherError};
use spaceweather_indices::update::Downloader;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Directory holding the fixture files, named like the cached files
pub fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

/// Copy the named fixtures into `data_dir`, keeping relative paths
pub fn install(data_dir: &Path, names: &[&str]) {
    for name in names {
        let target = data_dir.join(name);
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::copy(fixture_dir().join(name), target).unwrap();
    }
}

/// Downloader serving fixture files by URL basename
///
/// Every request is appended to a log shared with the test.
#[derive(Clone, Default)]
pub struct FixtureDownloader {
    pub requests: Rc<RefCell<Vec<String>>>,
    pub offline: bool,
}

impl FixtureDownloader {
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Default::default()
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Downloader for FixtureDownloader {
    fn fetch(&self, destination: &Path, url: &str) -> Result<()> {
        self.requests.borrow_mut().push(url.to_string());
        if self.offline {
            return Err(SpaceWeatherError::transfer(url, "connection refused"));
        }

        let name = url.rsplit('/').next().unwrap_or(url);
        let source = [fixture_dir().join(name), fixture_dir().join("omni_extended").join(name)]
            .into_iter()
            .find(|path| path.exists())
            .ok_or_else(|| SpaceWeatherError::transfer(url, "404 Not Found"))?;
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, destination)?;
        Ok(())
    }
}

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

/// Timestamps of a table as `YYYY-MM-DD HH:MM` strings
pub fn times(frame: &DataFrame) -> Vec<String> {
    frame
        .column("time")
        .unwrap()
        .cast(&DataType::Int64)
        .unwrap()
        .i64()
        .unwrap()
        .into_no_null_iter()
        .map(|nanos| {
            DateTime::from_timestamp_nanos(nanos)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        })
        .collect()
}

pub fn ints(frame: &DataFrame, name: &str) -> Vec<Option<i32>> {
    frame
        .column(name)
        .unwrap()
        .cast(&DataType::Int32)
        .unwrap()
        .i32()
        .unwrap()
        .into_iter()
        .collect()
}

pub fn floats(frame: &DataFrame, name: &str) -> Vec<Option<f64>> {
    frame
        .column(name)
        .unwrap()
        .cast(&DataType::Float64)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .collect()
}
