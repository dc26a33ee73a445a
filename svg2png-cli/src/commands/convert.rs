//! Implementation of the conversion command.
//!
//! This module builds the conversion configuration from CLI arguments,
//! prepares the output directory when one is requested, and delegates the
//! batch to the svg2png-core library.

use crate::cli::Cli;
use crate::error::CliResult;

use svg2png_core::{
    BatchSummary, ConversionConfig, CoreError, ResvgRasterizer, TerminalReporter, process_inputs,
};

use std::fs;

use log::debug;

/// Builds and validates the core configuration from CLI arguments.
fn create_conversion_config(args: &Cli) -> CliResult<ConversionConfig> {
    let config = ConversionConfig {
        output_dir: args.out.clone(),
        scale: args.scale,
    };
    config.validate()?;
    Ok(config)
}

/// Converts every file matched by the CLI inputs.
///
/// The configuration is validated before the output directory is created,
/// so a bad scale never leaves an empty directory behind.
pub fn run_convert(args: &Cli) -> CliResult<BatchSummary> {
    let config = create_conversion_config(args)?;

    if let Some(out_dir) = &config.output_dir {
        fs::create_dir_all(out_dir).map_err(|e| {
            CoreError::PathError(format!(
                "Failed to create output directory '{}': {}",
                out_dir.display(),
                e
            ))
        })?;
        debug!("Output directory ready: {}", out_dir.display());
    }

    let rasterizer = ResvgRasterizer::new();
    let reporter = TerminalReporter::new();

    process_inputs(&config, &args.inputs, &rasterizer, &reporter)
}
