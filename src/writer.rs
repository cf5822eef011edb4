//! Table export for the command line front-end.
//!
//! The output format follows the file extension: `.parquet` or `.csv`.

use crate::error::{Result, SpaceWeatherError};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;
use tracing::info;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Parquet,
    Csv,
}

impl OutputFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
        match extension.as_deref() {
            Some("parquet") | Some("pq") => Ok(OutputFormat::Parquet),
            Some("csv") => Ok(OutputFormat::Csv),
            _ => Err(SpaceWeatherError::configuration(format!(
                "cannot infer output format of {}, use .parquet or .csv",
                path.display()
            ))),
        }
    }
}

/// Write a table to `path`, creating parent directories as needed
pub fn write_frame(frame: &mut DataFrame, path: &Path) -> Result<()> {
    let format = OutputFormat::from_path(path)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    match format {
        OutputFormat::Parquet => {
            ParquetWriter::new(file)
                .with_compression(ParquetCompression::Snappy)
                .finish(frame)?;
        }
        OutputFormat::Csv => {
            CsvWriter::new(file).include_header(true).finish(frame)?;
        }
    }

    info!(
        "Wrote {} rows to {} ({:?})",
        frame.height(),
        path.display(),
        format
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataFrame {
        DataFrame::new(vec![
            Column::new("Kp".into(), vec![Some(0.7), None, Some(5.3)]),
            Column::new("Ap".into(), vec![3i32, 2, 56]),
        ])
        .unwrap()
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            OutputFormat::from_path(Path::new("out/kp.PARQUET")).unwrap(),
            OutputFormat::Parquet
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("kp.csv")).unwrap(),
            OutputFormat::Csv
        );
        assert!(OutputFormat::from_path(Path::new("kp.xlsx")).is_err());
        assert!(OutputFormat::from_path(Path::new("kp")).is_err());
    }

    #[test]
    fn test_write_parquet_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("kp.parquet");
        let mut frame = sample();

        write_frame(&mut frame, &path).unwrap();

        let read = ParquetReader::new(File::open(&path).unwrap())
            .finish()
            .unwrap();
        assert!(read.equals_missing(&frame));
    }

    #[test]
    fn test_write_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kp.csv");

        write_frame(&mut sample(), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Kp,Ap"));
        assert_eq!(lines.next(), Some("0.7,3"));
        assert_eq!(lines.next(), Some(",2"));
    }
}
