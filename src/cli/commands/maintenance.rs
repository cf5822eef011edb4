//! Cache maintenance: update, age and inspect

use super::shared::{open_reader, print_advisories, resolve_format, time_range};
use crate::cli::args::{AgeArgs, GlobalArgs, InspectArgs, UpdateArgs};
use crate::config::to_time_delta;
use crate::models::FormatKind;
use crate::parser::ParseStats;
use anyhow::{Context, Result};
use chrono::TimeDelta;
use colored::*;
use std::time::Instant;
use tracing::info;

/// Formats selected by an optional `--format` tag
fn selected_formats(tag: Option<&str>) -> Result<Vec<FormatKind>> {
    match tag {
        None => Ok(FormatKind::ALL.to_vec()),
        Some(_) => Ok(vec![FormatKind::from_tag(tag)?]),
    }
}

fn is_omni_tag(tag: Option<&str>) -> bool {
    tag.is_some_and(|tag| tag.eq_ignore_ascii_case("omni") || tag.eq_ignore_ascii_case("omni2"))
}

fn days(age: TimeDelta) -> String {
    format!("{:.1} days", age.num_seconds() as f64 / 86_400.0)
}

pub fn run_update(global: &GlobalArgs, args: &UpdateArgs) -> Result<()> {
    let start_time = Instant::now();
    let reader = open_reader(global)?;

    let mut advisories = Vec::new();
    for kind in selected_formats(args.format.as_deref())? {
        info!("Checking {} files", kind);
        advisories.extend(
            reader
                .update(kind)
                .with_context(|| format!("Failed to update {kind} files"))?,
        );
    }
    if let Some(year) = args.omni_year {
        advisories.extend(reader.cache_omni(year)?);
    }

    print_advisories(&advisories);
    if advisories.is_empty() {
        println!(
            "{} in {:.1}s",
            "Cache up to date".green().bold(),
            start_time.elapsed().as_secs_f64()
        );
    } else {
        println!(
            "{} {} problem(s) reported",
            "Update finished,".yellow().bold(),
            advisories.len()
        );
    }
    Ok(())
}

pub fn run_age(global: &GlobalArgs, args: &AgeArgs) -> Result<()> {
    let reader = open_reader(global)?;

    for kind in selected_formats(args.format.as_deref())? {
        let source = reader.config().source(kind);
        let thresholds = [
            to_time_delta(source.history_max_age)?,
            to_time_delta(source.update_interval)?,
        ];
        println!("{}", kind.name().bold());
        for ((path, age), threshold) in reader.file_ages(kind).into_iter().zip(thresholds) {
            let status = match age {
                Some(age) if age > threshold => days(age).red(),
                Some(age) => days(age).green(),
                None if path.exists() => "no update stamp".red(),
                None => "missing".red(),
            };
            println!("  {:<16} {}", status, path.display());
        }
    }
    Ok(())
}

pub fn run_inspect(global: &GlobalArgs, args: &InspectArgs) -> Result<()> {
    let reader = open_reader(global)?;
    let context = || format!("Failed to decode {}", args.path.display());

    let (label, result) = if is_omni_tag(args.format.as_deref()) {
        let result = reader.parse_omni_file(&args.path).with_context(context)?;
        ("omni2".to_string(), result)
    } else {
        let kind = resolve_format(args.format.as_deref(), FormatKind::Gfz)?;
        let result = reader.parse_file(kind, &args.path).with_context(context)?;
        (kind.name().to_string(), result)
    };

    println!("{} {}", label.green().bold(), args.path.display());
    print_stats(&result.stats);
    println!(
        "  columns:         {}",
        result.frame.get_column_names_str().join(", ")
    );
    if let Some((first, last)) = time_range(&result.frame) {
        println!("  time range:      {first} to {last}");
    }
    Ok(())
}

fn print_stats(stats: &ParseStats) {
    println!("  total lines:     {}", stats.total_lines);
    println!("  header lines:    {}", stats.header_lines);
    println!("  comment lines:   {}", stats.comment_lines);
    println!("  records parsed:  {}", stats.records_parsed);
    println!("  records skipped: {}", stats.records_skipped);
    println!("  data ratio:      {:.1}%", stats.data_ratio());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_formats() {
        assert_eq!(selected_formats(None).unwrap().len(), 5);
        assert_eq!(
            selected_formats(Some("sw")).unwrap(),
            vec![FormatKind::Celestrak]
        );
        assert!(selected_formats(Some("omni")).is_err());
    }

    #[test]
    fn test_omni_tag() {
        assert!(is_omni_tag(Some("OMNI2")));
        assert!(is_omni_tag(Some("omni")));
        assert!(!is_omni_tag(Some("gfz")));
        assert!(!is_omni_tag(None));
    }

    #[test]
    fn test_days() {
        assert_eq!(days(TimeDelta::hours(36)), "1.5 days");
    }
}
