//! Configuration structures and constants for the svg2png-core library.
//!
//! This module provides the configuration for a conversion batch: where the
//! produced PNG files go and how the rendered output is scaled.

use crate::error::{CoreError, CoreResult};
use std::path::PathBuf;

// Default constants

/// Default scale factor applied when the user does not supply one.
pub const DEFAULT_SCALE: f32 = 1.0;

/// Configuration for a conversion batch.
///
/// Built once by the consumer (e.g. the CLI) and passed by reference to
/// `process_inputs`. It is never mutated during a batch.
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Directory where PNG files are written. When `None`, each PNG is
    /// written next to its source SVG.
    pub output_dir: Option<PathBuf>,

    /// Uniform scale factor passed through to the rasterizer.
    /// Must be a positive finite number.
    pub scale: f32,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            scale: DEFAULT_SCALE,
        }
    }
}

impl ConversionConfig {
    /// Validates the scale factor.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(CoreError::Config(format!(
                "scale must be a positive number, got {}",
                self.scale
            )));
        }

        Ok(())
    }
}
