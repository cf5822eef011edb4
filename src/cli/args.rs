//! Command-line argument definitions for the space weather reader
//!
//! Defines the complete CLI interface using the clap derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the space weather index reader
///
/// Downloads, caches and decodes Kp, Ap, F10.7, Hp30/Hp60 and OMNI2 index
/// files and prints or exports them as tables.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "spaceweather",
    version,
    about = "Fetch, cache and decode geomagnetic and solar activity index files",
    long_about = "Keeps a local cache of the Celestrak and GFZ Kp/Ap/F10.7 files, the GFZ Hp30/Hp60 \
                  series and the yearly NASA OMNI2 files, and turns them into daily, 3-hourly, \
                  sub-hourly and hourly tables that can be printed or exported to Parquet or CSV."
)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by every subcommand
#[derive(Debug, Clone, Parser)]
pub struct GlobalArgs {
    /// Root directory of the local file cache
    ///
    /// Defaults to the user data directory, e.g. ~/.local/share/spaceweather
    #[arg(long = "data-dir", value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Show download progress
    #[arg(long = "progress", global = true)]
    pub progress: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Only show warnings and errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl GlobalArgs {
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Combined daily Kp, Ap and F10.7 table
    Daily(ReadArgs),
    /// 3-hourly Kp and Ap values derived from the daily table
    ThreeHourly(ReadArgs),
    /// Combined Hp30 or Hp60 table
    Hp(ReadArgs),
    /// Hourly OMNI2 table of one year
    Omni(OmniArgs),
    /// Download files that are missing or past their refresh threshold
    Update(UpdateArgs),
    /// Show the age of the cached files
    Age(AgeArgs),
    /// Decode a single file and report parsing statistics
    Inspect(InspectArgs),
}

/// Arguments of the pair readers
#[derive(Debug, Clone, Parser)]
pub struct ReadArgs {
    /// Data format: celestrak, gfz, wdc, hp30 or hp60
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    pub format: Option<String>,

    /// Download stale files before reading
    #[arg(long = "refresh")]
    pub refresh: bool,

    /// Age after which the update file counts as stale, e.g. 10days or 3h
    #[arg(long = "staleness", value_name = "DURATION")]
    pub staleness: Option<String>,

    /// Write the table to a .parquet or .csv file
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of rows to print
    #[arg(short = 'n', long = "rows", default_value_t = 10)]
    pub rows: usize,
}

/// Arguments of the OMNI2 reader
#[derive(Debug, Clone, Parser)]
pub struct OmniArgs {
    /// Year of the data
    #[arg(value_name = "YEAR")]
    pub year: i32,

    /// Download the yearly file if it is not cached
    #[arg(long = "cache")]
    pub cache: bool,

    /// Replace fill values with nulls
    #[arg(long = "mask")]
    pub mask: bool,

    /// Write the table to a .parquet or .csv file
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of rows to print
    #[arg(short = 'n', long = "rows", default_value_t = 10)]
    pub rows: usize,
}

#[derive(Debug, Clone, Parser)]
pub struct UpdateArgs {
    /// Data format to update, all formats when omitted
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    pub format: Option<String>,

    /// Also download the OMNI2 file of this year if it is not cached
    #[arg(long = "omni-year", value_name = "YEAR")]
    pub omni_year: Option<i32>,
}

#[derive(Debug, Clone, Parser)]
pub struct AgeArgs {
    /// Data format to check, all formats when omitted
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    pub format: Option<String>,
}

#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// File to decode
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Data format: celestrak, gfz, wdc, hp30, hp60 or omni
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    pub format: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_daily() {
        let args = Args::try_parse_from([
            "spaceweather",
            "daily",
            "--format",
            "celestrak",
            "--refresh",
            "--staleness",
            "3h",
            "-o",
            "daily.parquet",
        ])
        .unwrap();
        match args.command {
            Some(Commands::Daily(read)) => {
                assert_eq!(read.format.as_deref(), Some("celestrak"));
                assert!(read.refresh);
                assert_eq!(read.staleness.as_deref(), Some("3h"));
                assert_eq!(read.output, Some(PathBuf::from("daily.parquet")));
                assert_eq!(read.rows, 10);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["spaceweather", "omni", "2012", "--cache", "-vv"]).unwrap();
        assert_eq!(args.global.verbose, 2);
        assert_eq!(args.global.get_log_level(), "trace");
        assert!(matches!(
            args.command,
            Some(Commands::Omni(OmniArgs { year: 2012, cache: true, .. }))
        ));
    }

    #[test]
    fn test_quiet_log_level() {
        let args = Args::try_parse_from(["spaceweather", "-q", "age"]).unwrap();
        assert_eq!(args.global.get_log_level(), "warn");
        let args = Args::try_parse_from(["spaceweather", "age"]).unwrap();
        assert_eq!(args.global.get_log_level(), "info");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["spaceweather", "-q", "-v", "age"]).is_err());
    }
}
