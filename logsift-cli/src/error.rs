//! CLI-specific error types and exit code mapping

use logsift_core::error::LogsiftError;

/// CLI-specific error type.
///
/// Each variant carries enough context for a user-friendly message.
/// The `exit_code()` method maps errors to process exit codes.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Pattern configuration loading or validation failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error (file read, report write, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped domain error from logsift-core.
    #[error("{0}")]
    Core(#[from] LogsiftError),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning             |
    /// |------|---------------------|
    /// | 0    | Success             |
    /// | 2    | Configuration error |
    /// | 10   | IO error            |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Core(LogsiftError::Config(_)) => 2,
            Self::Io(_) | Self::Core(LogsiftError::Io(_)) => 10,
        }
    }
}

impl From<logsift_analysis::AnalysisError> for CliError {
    fn from(e: logsift_analysis::AnalysisError) -> Self {
        Self::Core(e.into())
    }
}
