use thiserror::Error;

/// Custom error types for the conversion pipeline
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Glob scan failed: {0}")]
    Scan(#[from] glob::GlobError),

    #[error("Invalid path: {0}")]
    PathError(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Invalid scale factor: {0}")]
    InvalidScale(f32),

    #[error("Cannot allocate a {0}x{1} pixel surface")]
    Surface(u32, u32),

    #[error("PNG encoding failed: {0}")]
    PngEncode(String),
}

/// Result type for conversion operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
