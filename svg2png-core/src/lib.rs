//! Core library for batch SVG to PNG conversion.
//!
//! This crate provides input resolution (literal paths and glob patterns),
//! output path derivation, and concurrent rasterization of SVG files to PNG
//! through the resvg renderer.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use svg2png_core::{ConversionConfig, ResvgRasterizer, TerminalReporter, process_inputs};
//!
//! let config = ConversionConfig::default();
//! let rasterizer = ResvgRasterizer::new();
//! let reporter = TerminalReporter::new();
//!
//! let tokens = vec!["logo.svg".to_string(), "icons/*.svg".to_string()];
//! let summary = process_inputs(&config, &tokens, &rasterizer, &reporter).unwrap();
//! println!("{} file(s) converted", summary.converted);
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod processing;
pub mod reporting;

// Re-exports for public API
pub use config::{ConversionConfig, DEFAULT_SCALE};
pub use discovery::resolve_input_token;
pub use error::{CoreError, CoreResult};
pub use external::{Rasterizer, ResvgRasterizer};
pub use processing::{
    BatchSummary, ConversionOutcome, ConversionTask, convert_file, process_inputs,
};
pub use reporting::{NullReporter, Reporter, TerminalReporter};
