//! Shared domain types and error taxonomy for the logsift workspace.
//!
//! Every crate in the workspace exchanges data through the types defined
//! here: [`LogRecord`] for classified lines, [`Color`] and [`Severity`] for
//! the styling metadata attached to them, and [`LogsiftError`] as the
//! top-level error type.

pub mod error;
pub mod types;

// Errors
pub use error::{ConfigError, LogsiftError};

// Domain types
pub use types::{Color, LogRecord, Severity, FIELD_ABSENT, UNMATCHED_LABEL};
