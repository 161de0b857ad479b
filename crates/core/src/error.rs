//! Error taxonomy shared across the workspace.
//!
//! Fatal conditions abort before any line is processed: a missing or
//! malformed pattern file ([`ConfigError`]) or an unreadable input file.
//! Per-line conditions (unparseable timestamp, unmatched line, absent
//! capture group) are never errors; they resolve to sentinel values.

/// Logsift top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum LogsiftError {
    /// Pattern configuration error.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Pattern configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be found.
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// Configuration could not be parsed.
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// A field holds an invalid value.
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
