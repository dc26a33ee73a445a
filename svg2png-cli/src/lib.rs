// svg2png-cli/src/lib.rs
//
// Library portion of the svg2png CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, parse_cli, parse_cli_from};
pub use commands::convert::run_convert;
