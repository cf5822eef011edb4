//! File transfer seam
//!
//! The refresh policy only talks to a [`Downloader`]. [`HttpDownloader`] is
//! the default implementation on top of blocking `reqwest`.

use crate::error::{Result, SpaceWeatherError};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Fetches a remote file into a local path
///
/// Implementations must leave `destination` untouched when the transfer fails.
pub trait Downloader {
    fn fetch(&self, destination: &Path, url: &str) -> Result<()>;
}

/// HTTP(S) downloader writing through a temporary file
#[derive(Debug, Clone)]
pub struct HttpDownloader {
    client: Client,
    show_progress: bool,
}

impl HttpDownloader {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(300))
            .build()?;
        Ok(Self {
            client,
            show_progress: false,
        })
    }

    /// Show a byte counter on stderr while downloading
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    fn progress_bar(&self, url: &str, length: Option<u64>) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let (bar, template) = match length {
            Some(length) => (
                ProgressBar::new(length),
                "{msg} [{bar:30}] {bytes}/{total_bytes} ({bytes_per_sec})",
            ),
            None => (ProgressBar::new_spinner(), "{spinner} {msg} {bytes} ({bytes_per_sec})"),
        };
        bar.set_style(
            ProgressStyle::with_template(template)
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .progress_chars("=> "),
        );
        bar.set_message(file_label(url));
        bar
    }
}

impl Downloader for HttpDownloader {
    fn fetch(&self, destination: &Path, url: &str) -> Result<()> {
        let directory = destination
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(directory)?;

        info!("Downloading {} to {}", url, destination.display());
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| SpaceWeatherError::transfer(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpaceWeatherError::transfer(url, format!("HTTP status {status}")));
        }

        let mut temp = NamedTempFile::new_in(directory)?;
        let progress = self.progress_bar(url, response.content_length());
        let copied = io::copy(&mut progress.wrap_read(response), temp.as_file_mut())
            .map_err(|e| SpaceWeatherError::transfer(url, e.to_string()));
        progress.finish_and_clear();
        let copied = copied?;

        temp.persist(destination)
            .map_err(|e| SpaceWeatherError::Io(e.error))?;
        debug!("Wrote {} bytes to {}", copied, destination.display());
        Ok(())
    }
}

fn file_label(url: &str) -> String {
    url.rsplit('/').next().unwrap_or(url).to_string()
}
