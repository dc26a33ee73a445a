//! Main entry point for the svg2png CLI application.
//!
//! This handles command-line argument parsing, logging setup, and dispatching
//! to the conversion command. The exit status is zero only when every input
//! resolved and converted cleanly.

use svg2png::{Cli, parse_cli, run_convert};

use clap::CommandFactory;
use console::style;
use log::debug;

use std::process;

fn main() {
    env_logger::init();

    let args = parse_cli();

    // No inputs means the user wants the usage text, not an error
    if args.inputs.is_empty() {
        Cli::command().print_help().ok();
        return;
    }

    debug!("Processing {} input token(s)", args.inputs.len());

    match run_convert(&args) {
        Ok(summary) => {
            if summary.has_failures() {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{}", style(format!("Error: {e}")).red().bold());
            process::exit(1);
        }
    }
}
