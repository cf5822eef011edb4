//! Refresh policy tests with a recording downloader

use super::*;
use crate::error::SpaceWeatherError;
use chrono::NaiveDate;
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Downloader that records every request and writes canned content
#[derive(Default)]
struct RecordingDownloader {
    requests: RefCell<Vec<(PathBuf, String)>>,
    content: Option<String>,
}

impl Downloader for RecordingDownloader {
    fn fetch(&self, destination: &Path, url: &str) -> Result<()> {
        self.requests
            .borrow_mut()
            .push((destination.to_path_buf(), url.to_string()));
        match &self.content {
            Some(content) => {
                fs::write(destination, content)?;
                Ok(())
            }
            None => Err(SpaceWeatherError::transfer(url, "offline")),
        }
    }
}

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

#[test]
fn test_missing_files_are_fetched_once_each() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default().with_data_dir(dir.path());
    let downloader = RecordingDownloader {
        content: Some("2024 01 01\n".to_string()),
        ..Default::default()
    };

    let advisories = refresh_pair(&config, FormatKind::Gfz, &downloader, at(2024, 1, 1)).unwrap();

    assert!(advisories.is_empty());
    let requests = downloader.requests.borrow();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].0, config.history_path(FormatKind::Gfz));
    assert_eq!(requests[0].1, config.gfz.history_url);
    assert_eq!(requests[1].0, config.update_path(FormatKind::Gfz));
    assert_eq!(requests[1].1, config.gfz.update_url);
}

#[test]
fn test_fresh_files_are_left_alone() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default().with_data_dir(dir.path());
    fs::write(config.history_path(FormatKind::Gfz), "2024 01 01\n").unwrap();
    fs::write(config.update_path(FormatKind::Gfz), "2024 01 10\n").unwrap();
    let downloader = RecordingDownloader::default();

    // History is 10 days old (limit 30), update 12 hours old (limit 1 day)
    let now = at(2024, 1, 10) + TimeDelta::hours(12);
    let advisories = refresh_pair(&config, FormatKind::Gfz, &downloader, now).unwrap();

    assert!(advisories.is_empty());
    assert!(downloader.requests.borrow().is_empty());
}

#[test]
fn test_only_the_stale_file_is_fetched() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default().with_data_dir(dir.path());
    fs::write(config.history_path(FormatKind::Gfz), "2024 01 01\n").unwrap();
    fs::write(config.update_path(FormatKind::Gfz), "2024 01 08\n").unwrap();
    let downloader = RecordingDownloader::default();

    let advisories = refresh_pair(&config, FormatKind::Gfz, &downloader, at(2024, 1, 10)).unwrap();

    let requests = downloader.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, config.update_path(FormatKind::Gfz));
    assert_eq!(advisories.len(), 1);
}

#[test]
fn test_failed_transfer_keeps_old_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default().with_data_dir(dir.path());
    let update = config.update_path(FormatKind::Gfz);
    fs::write(config.history_path(FormatKind::Gfz), "2024 01 09\n").unwrap();
    fs::write(&update, "2024 01 01\n").unwrap();
    let downloader = RecordingDownloader::default();

    let advisories = refresh_pair(&config, FormatKind::Gfz, &downloader, at(2024, 1, 10)).unwrap();

    match advisories.as_slice() {
        [Advisory::TransferFailure { path, url, reason }] => {
            assert_eq!(path, &update);
            assert_eq!(url, &config.gfz.update_url);
            assert!(reason.contains("offline"));
        }
        other => panic!("unexpected advisories: {other:?}"),
    }
    assert_eq!(fs::read_to_string(&update).unwrap(), "2024 01 01\n");
}

#[test]
fn test_unreadable_stamp_counts_as_stale() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("SW-All.txt");
    fs::write(&path, "no trailer\n").unwrap();

    assert!(needs_refresh(
        &path,
        UpdateStamp::Trailer("UPDATED"),
        TimeDelta::days(1460),
        at(2024, 1, 1)
    ));
}

#[test]
fn test_threshold_is_inclusive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nowcast.txt");
    fs::write(&path, "2024 01 01\n").unwrap();

    let threshold = TimeDelta::days(1);
    assert!(needs_refresh(&path, UpdateStamp::LastLineDate, threshold, at(2024, 1, 2)));
    assert!(!needs_refresh(
        &path,
        UpdateStamp::LastLineDate,
        threshold,
        at(2024, 1, 2) - TimeDelta::seconds(1)
    ));
}

#[test]
fn test_mirror_urls_and_update_age() {
    let dir = tempfile::tempdir().unwrap();
    let gfz = Config::default()
        .gfz
        .with_urls(
            "https://mirror.example/gfz/history.txt",
            "https://mirror.example/gfz/nowcast.txt",
        )
        .with_update_min_age(Duration::from_secs(7 * 86_400));
    let config = Config::default()
        .with_data_dir(dir.path())
        .with_source(FormatKind::Gfz, gfz);
    fs::write(config.update_path(FormatKind::Gfz), "2024 01 08\n").unwrap();
    let downloader = RecordingDownloader {
        content: Some("2024 01 09\n".to_string()),
        ..Default::default()
    };

    // Update file is two days old, inside the widened limit
    let advisories = refresh_pair(&config, FormatKind::Gfz, &downloader, at(2024, 1, 10)).unwrap();

    assert!(advisories.is_empty());
    let requests = downloader.requests.borrow();
    assert_eq!(requests.len(), 1);
    // Local file names are unchanged
    assert_eq!(
        requests[0],
        (
            dir.path().join("Kp_ap_Ap_SN_F107_since_1932.txt"),
            "https://mirror.example/gfz/history.txt".to_string()
        )
    );
}
