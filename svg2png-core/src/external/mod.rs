//! Rasterizer abstraction and its resvg-backed implementation.
//!
//! SVG parsing and rendering are delegated to an external library behind
//! the [`Rasterizer`] trait, so the conversion driver never inspects SVG
//! content itself and tests can substitute their own implementations.

use crate::error::CoreResult;

use std::path::Path;

/// Contains the resvg-backed rasterizer implementation
pub mod resvg_rasterizer;

pub use resvg_rasterizer::ResvgRasterizer;

/// Converts a single SVG file into a PNG file at a given scale.
///
/// Implementations own the whole pixel pipeline, including writing the
/// destination file. The scale is applied uniformly to both axes; how it
/// maps to pixel dimensions is the implementation's business.
pub trait Rasterizer: Send + Sync {
    /// Renders `source` at `scale` and writes the PNG to `destination`.
    fn rasterize(&self, source: &Path, destination: &Path, scale: f32) -> CoreResult<()>;
}
