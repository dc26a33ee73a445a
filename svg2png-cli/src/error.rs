// svg2png-cli/src/error.rs
//
// Error handling for the CLI, built on the svg2png-core error types.

use svg2png_core::CoreResult;

/// Type alias for CLI results using CoreError.
///
/// This provides consistency with the core library while allowing
/// CLI-specific error handling when needed.
pub type CliResult<T> = CoreResult<T>;
