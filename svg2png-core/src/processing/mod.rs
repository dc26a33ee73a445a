//! Core conversion driving logic and orchestration.
//!
//! This module organizes the conversion pipeline into submodules and
//! exposes the primary entry points for running a batch.

/// Output path planning for resolved source files
pub mod task;

/// Per-file conversion driving and batch orchestration
pub mod convert;

pub use convert::{BatchSummary, ConversionOutcome, convert_file, process_inputs};
pub use task::{ConversionTask, has_svg_extension};
