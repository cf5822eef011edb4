//! Command implementations for the space weather CLI
//!
//! Each subcommand lives in its own module:
//! - `read`: daily, 3-hourly, Hp and OMNI2 tables
//! - `maintenance`: cache updates, file ages and single-file inspection

pub mod maintenance;
pub mod read;
pub mod shared;

use crate::cli::args::{Args, Commands};
use anyhow::Result;

/// Dispatch to the handler of the selected subcommand
pub fn run(args: Args) -> Result<()> {
    let Some(command) = args.command else {
        return Ok(());
    };
    shared::setup_logging(&args.global);

    match command {
        Commands::Daily(read_args) => read::run_daily(&args.global, &read_args),
        Commands::ThreeHourly(read_args) => read::run_three_hourly(&args.global, &read_args),
        Commands::Hp(read_args) => read::run_hp(&args.global, &read_args),
        Commands::Omni(omni_args) => read::run_omni(&args.global, &omni_args),
        Commands::Update(update_args) => maintenance::run_update(&args.global, &update_args),
        Commands::Age(age_args) => maintenance::run_age(&args.global, &age_args),
        Commands::Inspect(inspect_args) => maintenance::run_inspect(&args.global, &inspect_args),
    }
}
