//! Rasterizer implementation backed by the resvg rendering library.

use crate::error::{CoreError, CoreResult};
use crate::external::Rasterizer;

use log::debug;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{self, fontdb};

use std::path::Path;
use std::sync::Arc;

/// Renders SVG files with resvg and encodes the result as PNG.
///
/// System fonts are loaded once at construction and shared across all
/// conversions, so a single instance can serve a whole parallel batch.
pub struct ResvgRasterizer {
    fontdb: Arc<fontdb::Database>,
}

impl ResvgRasterizer {
    pub fn new() -> Self {
        let mut fontdb = fontdb::Database::new();
        fontdb.load_system_fonts();
        debug!("Loaded {} font face(s)", fontdb.len());

        Self {
            fontdb: Arc::new(fontdb),
        }
    }
}

impl Rasterizer for ResvgRasterizer {
    fn rasterize(&self, source: &Path, destination: &Path, scale: f32) -> CoreResult<()> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(CoreError::InvalidScale(scale));
        }

        let svg_data = std::fs::read(source)?;

        let mut options = usvg::Options::default();
        // Relative hrefs (images, stylesheets) resolve against the SVG's own directory.
        options.resources_dir = std::fs::canonicalize(source)
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf));
        options.fontdb = Arc::clone(&self.fontdb);

        let tree = usvg::Tree::from_data(&svg_data, &options)
            .map_err(|e| CoreError::SvgParse(e.to_string()))?;

        let size = tree.size();
        let width = (size.width() * scale).ceil() as u32;
        let height = (size.height() * scale).ceil() as u32;

        let mut pixmap = Pixmap::new(width, height).ok_or(CoreError::Surface(width, height))?;

        debug!(
            "Rendering {} at {}x{} (scale {})",
            source.display(),
            width,
            height,
            scale
        );

        resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

        pixmap
            .save_png(destination)
            .map_err(|e| CoreError::PngEncode(e.to_string()))?;

        Ok(())
    }
}
