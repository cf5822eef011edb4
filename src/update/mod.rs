//! Refresh policy for cached history/update file pairs
//!
//! A file is downloaded again when it is missing, when its update stamp
//! cannot be read, or when the stamp is at least as old as the file's
//! threshold. Failed transfers are reported as advisories and leave the
//! existing file in place.

pub mod downloader;

pub use downloader::{Downloader, HttpDownloader};

use crate::config::{Config, to_time_delta};
use crate::error::Result;
use crate::header;
use crate::models::{Advisory, FormatKind, UpdateStamp};
use chrono::{DateTime, TimeDelta, Utc};
use std::path::Path;
use tracing::{debug, info, warn};

/// Whether a cached file should be downloaded again
pub fn needs_refresh(
    path: &Path,
    stamp: UpdateStamp,
    threshold: TimeDelta,
    now: DateTime<Utc>,
) -> bool {
    if !path.exists() {
        debug!("{} is missing", path.display());
        return true;
    }
    match header::file_age(path, stamp, now) {
        Ok(age) => age >= threshold,
        Err(e) => {
            debug!("Treating {} as stale: {}", path.display(), e);
            true
        }
    }
}

/// Download one file, turning a failure into an advisory
pub fn fetch_file(downloader: &dyn Downloader, path: &Path, url: &str) -> Option<Advisory> {
    match downloader.fetch(path, url) {
        Ok(()) => {
            info!("Updated {}", path.display());
            None
        }
        Err(e) => {
            warn!("Download of {} failed: {}", url, e);
            Some(Advisory::TransferFailure {
                path: path.to_path_buf(),
                url: url.to_string(),
                reason: e.to_string(),
            })
        }
    }
}

/// Refresh the history and update files of one format as needed
///
/// The history file is compared against `history_max_age`, the update file
/// against `update_min_age`.
pub fn refresh_pair(
    config: &Config,
    kind: FormatKind,
    downloader: &dyn Downloader,
    now: DateTime<Utc>,
) -> Result<Vec<Advisory>> {
    let source = config.source(kind);
    let stamp = kind.spec().stamp;
    let files = [
        (
            config.history_path(kind),
            source.history_url.as_str(),
            to_time_delta(source.history_max_age)?,
        ),
        (
            config.update_path(kind),
            source.update_url.as_str(),
            to_time_delta(source.update_min_age)?,
        ),
    ];

    let mut advisories = Vec::new();
    for (path, url, threshold) in &files {
        if needs_refresh(path, stamp, *threshold, now) {
            advisories.extend(fetch_file(downloader, path, url));
        } else {
            info!("{} is up to date", path.display());
        }
    }
    Ok(advisories)
}

#[cfg(test)]
mod tests;
