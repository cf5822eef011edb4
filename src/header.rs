//! Last-update stamps of cached index files.
//!
//! Every provider records the time of its last update differently: Celestrak
//! writes an `UPDATED` trailer line, the GFZ files end with the most recent
//! day, and the WDC files end with a two-digit-year date. The stamp is used to
//! decide when a cached file has to be downloaded again.

use crate::constants::COMMENT_MARKER;
use crate::error::{Result, SpaceWeatherError};
use crate::models::UpdateStamp;
use crate::parser::field_parsers::pivot_year;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Time of the last update recorded inside the file
pub fn last_update(path: &Path, stamp: UpdateStamp) -> Result<DateTime<Utc>> {
    if !path.exists() {
        return Err(SpaceWeatherError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let reader = BufReader::new(File::open(path)?);
    let stamp_time = match stamp {
        UpdateStamp::Trailer(marker) => trailer_time(reader, marker)?,
        UpdateStamp::LastLineDate => last_data_line(reader)?
            .as_deref()
            .and_then(parse_ymd_prefix)
            .and_then(|date| date.and_hms_opt(0, 0, 0)),
        UpdateStamp::LastLineWdcDate => last_data_line(reader)?
            .as_deref()
            .and_then(parse_wdc_prefix)
            .and_then(|date| date.and_hms_opt(0, 0, 0)),
    };

    let stamp_time = stamp_time.ok_or_else(|| SpaceWeatherError::MissingUpdateStamp {
        path: path.to_path_buf(),
    })?;

    debug!("Last update of {}: {}", path.display(), stamp_time);
    Ok(stamp_time.and_utc())
}

/// Age of the file contents relative to `now`
pub fn file_age(path: &Path, stamp: UpdateStamp, now: DateTime<Utc>) -> Result<TimeDelta> {
    Ok(now - last_update(path, stamp)?)
}

fn trailer_time(reader: impl BufRead, marker: &str) -> Result<Option<NaiveDateTime>> {
    for line in reader.lines() {
        let line = line?;
        if let Some(rest) = line.strip_prefix(marker) {
            return Ok(NaiveDateTime::parse_from_str(rest.trim(), "%Y %b %d %H:%M:%S UTC").ok());
        }
    }
    Ok(None)
}

fn last_data_line(reader: impl BufRead) -> Result<Option<String>> {
    let mut last = None;
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
            continue;
        }
        last = Some(line);
    }
    Ok(last)
}

fn parse_ymd_prefix(line: &str) -> Option<NaiveDate> {
    let prefix = line.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y %m %d").ok()
}

fn parse_wdc_prefix(line: &str) -> Option<NaiveDate> {
    let prefix = line.get(..6)?;
    let number = |range: std::ops::Range<usize>| prefix.get(range)?.trim().parse::<i32>().ok();
    let year = pivot_year(number(0..2)?);
    let month = u32::try_from(number(2..4)?).ok()?;
    let day = u32::try_from(number(4..6)?).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_trailer_stamp() {
        let file = write_temp("DATATYPE CelesTrak\nVERSION 1.2\nUPDATED 2020 Mar 10 12:00:00 UTC\n#\nBEGIN OBSERVED\n");
        let time = last_update(file.path(), UpdateStamp::Trailer("UPDATED")).unwrap();
        assert_eq!(time.to_rfc3339(), "2020-03-10T12:00:00+00:00");
    }

    #[test]
    fn test_last_line_date_skips_comments_and_blank_lines() {
        let file = write_temp(
            "# header\n2024 01 01 33603 rest\n2024 01 02 33604 rest\n\n# trailing comment\n",
        );
        let time = last_update(file.path(), UpdateStamp::LastLineDate).unwrap();
        assert_eq!(time.date_naive(), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_wdc_stamp_uses_century_pivot() {
        let file = write_temp("991231 rest\n050102 rest\n");
        let time = last_update(file.path(), UpdateStamp::LastLineWdcDate).unwrap();
        assert_eq!(time.date_naive(), NaiveDate::from_ymd_opt(2005, 1, 2).unwrap());
    }

    #[test]
    fn test_missing_stamp() {
        let file = write_temp("no stamp here\n");
        assert!(matches!(
            last_update(file.path(), UpdateStamp::Trailer("UPDATED")),
            Err(SpaceWeatherError::MissingUpdateStamp { .. })
        ));
        assert!(matches!(
            last_update(file.path(), UpdateStamp::LastLineDate),
            Err(SpaceWeatherError::MissingUpdateStamp { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        assert!(matches!(
            last_update(&path, UpdateStamp::LastLineDate),
            Err(SpaceWeatherError::NotFound { .. })
        ));
    }

    #[test]
    fn test_file_age() {
        let file = write_temp("2024 01 01 data\n");
        let now = NaiveDate::from_ymd_opt(2024, 1, 11)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap()
            .and_utc();
        let age = file_age(file.path(), UpdateStamp::LastLineDate, now).unwrap();
        assert_eq!(age, TimeDelta::days(10) + TimeDelta::hours(6));
    }
}
