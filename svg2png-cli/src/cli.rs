// svg2png-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use svg2png_core::DEFAULT_SCALE;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "svg2png: Batch SVG to PNG converter",
    long_about = "Converts the given SVG files (or glob patterns) to PNG images. \
Each PNG is written next to its source unless an output directory is given."
)]
pub struct Cli {
    /// Files or glob patterns to convert
    #[arg(value_name = "FILE_OR_GLOB")]
    pub inputs: Vec<String>,

    /// Directory where PNG files will be saved (defaults to each source's directory)
    #[arg(short = 'o', long = "out", value_name = "OUTPUT_DIR")]
    pub out: Option<PathBuf>,

    /// Scale factor applied to each SVG's intrinsic size
    #[arg(
        short = 's',
        long = "scale",
        value_name = "FACTOR",
        default_value_t = DEFAULT_SCALE,
        allow_negative_numbers = true
    )]
    pub scale: f32,
}

/// Parses CLI arguments from the process environment.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parses CLI arguments from an explicit iterator.
pub fn parse_cli_from<I, T>(args: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_args() {
        let cli = parse_cli_from(["svg2png", "logo.svg", "icons/*.svg"]);

        assert_eq!(cli.inputs, vec!["logo.svg", "icons/*.svg"]);
        assert!(cli.out.is_none());
        assert_eq!(cli.scale, DEFAULT_SCALE);
    }

    #[test]
    fn test_parse_short_flags() {
        let cli = parse_cli_from(["svg2png", "-o", "dist", "-s", "0.5", "logo.svg"]);

        assert_eq!(cli.out, Some(PathBuf::from("dist")));
        assert_eq!(cli.scale, 0.5);
        assert_eq!(cli.inputs, vec!["logo.svg"]);
    }

    #[test]
    fn test_parse_long_flags() {
        let cli = parse_cli_from(["svg2png", "--out", "dist", "--scale", "2", "logo.svg"]);

        assert_eq!(cli.out, Some(PathBuf::from("dist")));
        assert_eq!(cli.scale, 2.0);
    }

    #[test]
    fn test_parse_double_dash_separator() {
        let cli = parse_cli_from(["svg2png", "-s", "2", "--", "a.svg", "b.svg"]);

        assert_eq!(cli.scale, 2.0);
        assert_eq!(cli.inputs, vec!["a.svg", "b.svg"]);
    }

    #[test]
    fn test_parse_no_inputs_is_allowed() {
        let cli = parse_cli_from(["svg2png"]);

        assert!(cli.inputs.is_empty());
        assert_eq!(cli.scale, DEFAULT_SCALE);
    }

    #[test]
    fn test_parse_negative_scale_reaches_validation() {
        // Parsing accepts the value; ConversionConfig::validate rejects it later
        let cli = parse_cli_from(["svg2png", "-s", "-2", "logo.svg"]);
        assert_eq!(cli.scale, -2.0);
    }
}
