use clap::{CommandFactory, Parser};
use spaceweather_indices::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and exit
    if args.command.is_none() {
        if let Err(error) = Args::command().print_help() {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
        println!();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
