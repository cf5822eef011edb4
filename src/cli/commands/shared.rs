//! Shared components for CLI commands
//!
//! Logging setup, reader construction and table reporting used by several
//! command implementations.

use crate::cli::args::{GlobalArgs, ReadArgs};
use crate::config::{Config, parse_duration};
use crate::dataset::SpaceWeather;
use crate::models::{Advisory, FormatKind, ReadOptions};
use crate::series::merge::time_values;
use crate::writer::write_frame;
use anyhow::{Context, Result};
use chrono::DateTime;
use colored::*;
use polars::prelude::DataFrame;
use tracing::debug;

/// Set up structured logging on stderr
pub fn setup_logging(args: &GlobalArgs) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "spaceweather_indices={log_level},spaceweather={log_level}"
        ))
    });

    let layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_timer(fmt::time::uptime()))
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Build the reader from the global options
pub fn open_reader(args: &GlobalArgs) -> Result<SpaceWeather> {
    let mut config = Config::default().with_progress(args.progress && !args.quiet);
    if let Some(data_dir) = &args.data_dir {
        config = config.with_data_dir(data_dir);
    }
    debug!("Using data directory {}", config.data_dir.display());
    SpaceWeather::new(config).context("Failed to set up the space weather reader")
}

/// Resolve the `--format` tag, falling back to `default`
pub fn resolve_format(tag: Option<&str>, default: FormatKind) -> Result<FormatKind> {
    match tag {
        None => Ok(default),
        Some(_) => Ok(FormatKind::from_tag(tag)?),
    }
}

pub fn read_options(args: &ReadArgs) -> Result<ReadOptions> {
    let mut options = ReadOptions::default().with_refresh(args.refresh);
    if let Some(staleness) = &args.staleness {
        options = options.with_update_interval(
            parse_duration(staleness).with_context(|| format!("Invalid --staleness '{staleness}'"))?,
        );
    }
    Ok(options)
}

pub fn print_advisories(advisories: &[Advisory]) {
    for advisory in advisories {
        eprintln!("{} {}", "warning:".yellow().bold(), advisory);
    }
}

/// First and last timestamp of a table, formatted for display
pub fn time_range(frame: &DataFrame) -> Option<(String, String)> {
    let times = time_values(frame).ok()?;
    let format = |nanos: i64| {
        DateTime::from_timestamp_nanos(nanos)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    };
    Some((format(*times.first()?), format(*times.last()?)))
}

/// Print a summary and the first rows of a table, or export it
pub fn report_frame(
    label: &str,
    frame: &mut DataFrame,
    output: Option<&std::path::Path>,
    rows: usize,
) -> Result<()> {
    let range = time_range(frame)
        .map(|(first, last)| format!("{first} to {last}"))
        .unwrap_or_else(|| "no records".to_string());
    println!(
        "{} {} rows, {} columns, {}",
        label.green().bold(),
        frame.height(),
        frame.width(),
        range
    );

    match output {
        Some(path) => {
            write_frame(frame, path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{} {}", "Wrote".green(), path.display());
        }
        None => println!("{}", frame.head(Some(rows))),
    }
    Ok(())
}
