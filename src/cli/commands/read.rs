//! Table readers: daily, 3-hourly, Hp and OMNI2

use super::shared::{open_reader, print_advisories, read_options, report_frame, resolve_format};
use crate::cli::args::{GlobalArgs, OmniArgs, ReadArgs};
use crate::models::FormatKind;
use crate::series::{mask_missing, three_hourly};
use anyhow::{Context, Result, bail};
use tracing::info;

pub fn run_daily(global: &GlobalArgs, args: &ReadArgs) -> Result<()> {
    let kind = daily_format(args)?;
    let reader = open_reader(global)?;
    let reading = reader
        .read_pair(kind, &read_options(args)?)
        .with_context(|| format!("Failed to read {kind} daily data"))?;
    print_advisories(&reading.advisories);

    let mut frame = reading.frame;
    report_frame(&format!("{kind} daily"), &mut frame, args.output.as_deref(), args.rows)
}

pub fn run_three_hourly(global: &GlobalArgs, args: &ReadArgs) -> Result<()> {
    let kind = daily_format(args)?;
    let reader = open_reader(global)?;
    let reading = reader
        .read_pair(kind, &read_options(args)?)
        .with_context(|| format!("Failed to read {kind} daily data"))?;
    print_advisories(&reading.advisories);

    let mut frame = three_hourly(&reading.frame)?;
    report_frame(
        &format!("{kind} 3-hourly"),
        &mut frame,
        args.output.as_deref(),
        args.rows,
    )
}

pub fn run_hp(global: &GlobalArgs, args: &ReadArgs) -> Result<()> {
    let kind = resolve_format(args.format.as_deref(), FormatKind::Hp30)?;
    if !kind.is_sub_hourly() {
        bail!("{kind} is not an Hp format, use hp30 or hp60");
    }
    let reader = open_reader(global)?;
    let reading = reader
        .read_pair(kind, &read_options(args)?)
        .with_context(|| format!("Failed to read {kind} data"))?;
    print_advisories(&reading.advisories);

    let mut frame = reading.frame;
    report_frame(kind.name(), &mut frame, args.output.as_deref(), args.rows)
}

pub fn run_omni(global: &GlobalArgs, args: &OmniArgs) -> Result<()> {
    let reader = open_reader(global)?;
    let mut frame = reader
        .omni_hourly(args.year, args.cache)
        .with_context(|| format!("Failed to read OMNI2 data of {}", args.year))?;
    if args.mask {
        info!("Masking OMNI2 fill values");
        frame = mask_missing(&frame)?;
    }
    report_frame(
        &format!("omni2 {}", args.year),
        &mut frame,
        args.output.as_deref(),
        args.rows,
    )
}

fn daily_format(args: &ReadArgs) -> Result<FormatKind> {
    let kind = FormatKind::from_tag(args.format.as_deref())?;
    if !kind.is_daily() {
        bail!("{kind} is not a daily format, use celestrak, gfz or wdc");
    }
    Ok(kind)
}
