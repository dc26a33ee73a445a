//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Module containing the implementation of the `convert` command.
/// This command rasterizes SVG files to PNG images.
pub mod convert;
