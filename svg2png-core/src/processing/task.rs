//! Output path planning for resolved source files.
//!
//! A [`ConversionTask`] pairs a source SVG with the destination its PNG
//! will be written to: the configured output directory (or the source's
//! own directory) joined with the source's base name plus `.png`.

use crate::config::ConversionConfig;
use crate::error::{CoreError, CoreResult};

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// A single planned conversion, ready to hand to a rasterizer.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionTask {
    /// The resolved source file.
    pub source: PathBuf,

    /// Where the PNG will be written.
    pub destination: PathBuf,

    /// Uniform scale factor for rendering.
    pub scale: f32,
}

impl ConversionTask {
    /// Derives the conversion task for a resolved source file.
    ///
    /// The destination is `<output dir>/<base name>.png`. Only the final
    /// extension is replaced, so `logo.min.svg` becomes `logo.min.png`.
    pub fn new(source: PathBuf, config: &ConversionConfig) -> CoreResult<Self> {
        let stem = source.file_stem().ok_or_else(|| {
            CoreError::PathError(format!(
                "Cannot derive an output name for '{}'",
                source.display()
            ))
        })?;

        let mut png_name = stem.to_os_string();
        png_name.push(".png");

        let out_dir = match &config.output_dir {
            Some(dir) => dir.clone(),
            None => source.parent().map(Path::to_path_buf).unwrap_or_default(),
        };

        Ok(Self {
            destination: out_dir.join(png_name),
            source,
            scale: config.scale,
        })
    }
}

/// Checks whether the path carries the exact `.svg` extension.
/// The comparison is case sensitive: `logo.SVG` is flagged like `logo.txt`.
#[must_use]
pub fn has_svg_extension(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("svg"))
}
