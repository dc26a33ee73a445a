use console::style;
use std::path::Path;

/// Reporter interface for per-file conversion events.
///
/// Methods default to no-ops so implementations only handle the events they
/// surface. Successes belong on stdout, warnings and errors on stderr.
pub trait Reporter: Send + Sync {
    /// A file was converted and its PNG written to `destination`.
    fn success(&self, _source: &Path, _destination: &Path) {}
    /// A source file does not carry the `.svg` extension. Advisory only;
    /// the conversion is still attempted.
    fn extension_warning(&self, _source: &Path) {}
    /// An input token matched no existing files.
    fn no_files_matched(&self, _token: &str) {}
    /// Expanding an input token failed (bad pattern or unreadable directory).
    fn resolution_error(&self, _token: &str, _message: &str) {}
    /// Converting a resolved file failed.
    fn conversion_failure(&self, _source: &Path, _message: &str) {}
}

/// No-op reporter that discards all events.
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Human-friendly reporter that prints styled per-file results.
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for TerminalReporter {
    fn success(&self, source: &Path, destination: &Path) {
        println!(
            "{} {} {}",
            style(source.display()).green().bold(),
            style("converted to").green(),
            style(destination.display()).green().bold()
        );
    }

    fn extension_warning(&self, source: &Path) {
        eprintln!(
            "{}",
            style(format!(
                "Warning: {} doesn't end with '.svg'; it may not be an SVG",
                source.display()
            ))
            .yellow()
            .bold()
        );
    }

    fn no_files_matched(&self, token: &str) {
        eprintln!(
            "{}",
            style(format!("Error: {token} did not match any existing filenames"))
                .red()
                .bold()
        );
    }

    fn resolution_error(&self, token: &str, message: &str) {
        eprintln!("{}", style(format!("Error: {token}: {message}")).red().bold());
    }

    fn conversion_failure(&self, source: &Path, message: &str) {
        eprintln!(
            "{}",
            style(format!("Error: {}: {}", source.display(), message))
                .red()
                .bold()
        );
    }
}
