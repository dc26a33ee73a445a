//! Per-file conversion driving and batch orchestration.
//!
//! Every input token is processed independently, and so is every file a
//! token resolves to. Failures are reported through the [`Reporter`] at the
//! point of occurrence and never abort sibling work; `process_inputs` only
//! returns once every conversion and report has completed.

use crate::config::ConversionConfig;
use crate::discovery::resolve_input_token;
use crate::error::CoreResult;
use crate::external::Rasterizer;
use crate::processing::task::{ConversionTask, has_svg_extension};
use crate::reporting::Reporter;

use log::{debug, info};
use rayon::prelude::*;

use std::path::PathBuf;

/// Result of driving a single conversion task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// The PNG was written to `destination`.
    Success {
        source: PathBuf,
        destination: PathBuf,
    },
    /// The rasterizer rejected the file; `message` is its reason verbatim.
    Failure { source: PathBuf, message: String },
}

/// Aggregate counts for a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files converted and written successfully.
    pub converted: usize,

    /// Resolved files whose conversion failed.
    pub conversion_failures: usize,

    /// Input tokens that matched nothing or could not be expanded.
    pub resolution_failures: usize,
}

impl BatchSummary {
    fn merge(self, other: Self) -> Self {
        Self {
            converted: self.converted + other.converted,
            conversion_failures: self.conversion_failures + other.conversion_failures,
            resolution_failures: self.resolution_failures + other.resolution_failures,
        }
    }

    /// Returns true when any input failed to resolve or convert.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.conversion_failures > 0 || self.resolution_failures > 0
    }
}

/// Drives a single conversion task and classifies the result.
///
/// A source without the `.svg` extension gets an advisory warning first,
/// then is converted anyway. The rasterizer gets exactly one attempt; on
/// failure any partial output is left in place.
pub fn convert_file(
    task: ConversionTask,
    rasterizer: &dyn Rasterizer,
    reporter: &dyn Reporter,
) -> ConversionOutcome {
    if !has_svg_extension(&task.source) {
        reporter.extension_warning(&task.source);
    }

    debug!(
        "Converting {} -> {}",
        task.source.display(),
        task.destination.display()
    );

    match rasterizer.rasterize(&task.source, &task.destination, task.scale) {
        Ok(()) => {
            reporter.success(&task.source, &task.destination);
            ConversionOutcome::Success {
                source: task.source,
                destination: task.destination,
            }
        }
        Err(e) => {
            let message = e.to_string();
            reporter.conversion_failure(&task.source, &message);
            ConversionOutcome::Failure {
                source: task.source,
                message,
            }
        }
    }
}

/// Resolves one token and converts everything it matched.
fn process_token(
    token: &str,
    config: &ConversionConfig,
    rasterizer: &dyn Rasterizer,
    reporter: &dyn Reporter,
) -> BatchSummary {
    let files = match resolve_input_token(token) {
        Ok(files) => files,
        Err(e) => {
            reporter.resolution_error(token, &e.to_string());
            return BatchSummary {
                resolution_failures: 1,
                ..Default::default()
            };
        }
    };

    if files.is_empty() {
        reporter.no_files_matched(token);
        return BatchSummary {
            resolution_failures: 1,
            ..Default::default()
        };
    }

    debug!("'{}' matched {} file(s)", token, files.len());

    files
        .par_iter()
        .map(|source| {
            let task = match ConversionTask::new(source.clone(), config) {
                Ok(task) => task,
                Err(e) => {
                    reporter.conversion_failure(source, &e.to_string());
                    return BatchSummary {
                        conversion_failures: 1,
                        ..Default::default()
                    };
                }
            };

            match convert_file(task, rasterizer, reporter) {
                ConversionOutcome::Success { .. } => BatchSummary {
                    converted: 1,
                    ..Default::default()
                },
                ConversionOutcome::Failure { .. } => BatchSummary {
                    conversion_failures: 1,
                    ..Default::default()
                },
            }
        })
        .reduce(BatchSummary::default, BatchSummary::merge)
}

/// Converts every file matched by the given input tokens.
///
/// Tokens are processed concurrently, as are the files within each token;
/// completion order is unspecified. The call returns only after all
/// conversions and reports have finished.
///
/// Per-file and per-token failures are reported and counted, never
/// propagated. The only error returned here is an invalid configuration.
pub fn process_inputs(
    config: &ConversionConfig,
    tokens: &[String],
    rasterizer: &dyn Rasterizer,
    reporter: &dyn Reporter,
) -> CoreResult<BatchSummary> {
    config.validate()?;

    let summary = tokens
        .par_iter()
        .map(|token| process_token(token, config, rasterizer, reporter))
        .reduce(BatchSummary::default, BatchSummary::merge);

    info!(
        "Batch complete: {} converted, {} conversion failure(s), {} unresolved input(s)",
        summary.converted, summary.conversion_failures, summary.resolution_failures
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_merge_adds_counts() {
        let a = BatchSummary {
            converted: 2,
            conversion_failures: 1,
            resolution_failures: 0,
        };
        let b = BatchSummary {
            converted: 1,
            conversion_failures: 0,
            resolution_failures: 3,
        };

        let merged = a.merge(b);
        assert_eq!(merged.converted, 3);
        assert_eq!(merged.conversion_failures, 1);
        assert_eq!(merged.resolution_failures, 3);
    }

    #[test]
    fn test_summary_failure_detection() {
        assert!(!BatchSummary::default().has_failures());
        assert!(
            !BatchSummary {
                converted: 5,
                ..Default::default()
            }
            .has_failures()
        );
        assert!(
            BatchSummary {
                conversion_failures: 1,
                ..Default::default()
            }
            .has_failures()
        );
        assert!(
            BatchSummary {
                resolution_failures: 1,
                ..Default::default()
            }
            .has_failures()
        );
    }
}
