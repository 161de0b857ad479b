//! Analysis domain error type.
//!
//! [`AnalysisError`] covers pattern loading, input reading, and report
//! writing. `From<AnalysisError> for LogsiftError` lets callers propagate
//! with `?` into the workspace-level taxonomy.

use logsift_core::error::{ConfigError, LogsiftError};

/// Errors produced by the analysis pipeline.
///
/// Per-line conditions (unparseable timestamp, unmatched line, absent
/// capture group) are not represented here; they resolve to sentinel
/// values and never abort a run.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Pattern file could not be read or parsed.
    #[error("pattern load error: {path}: {reason}")]
    PatternLoad {
        /// Pattern file path (or in-memory source tag).
        path: String,
        /// Failure reason.
        reason: String,
    },

    /// A pattern definition is invalid.
    #[error("pattern validation error: pattern '{label}': {reason}")]
    PatternValidation {
        /// Label of the offending pattern.
        label: String,
        /// Validation failure reason.
        reason: String,
    },

    /// Log input file could not be read.
    #[error("input error: {path}: {reason}")]
    Input {
        /// Input file path.
        path: String,
        /// Failure reason.
        reason: String,
    },

    /// CSV report writing failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Regex compilation error outside pattern validation.
    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl From<AnalysisError> for LogsiftError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::Io(e) => Self::Io(e),
            other => Self::Config(ConfigError::ParseFailed {
                reason: other.to_string(),
            }),
        }
    }
}
