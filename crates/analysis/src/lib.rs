//! Log line classification and report assembly.
//!
//! # Modules
//!
//! - [`pattern`]: labeled regex pattern registry loaded from a JSON file
//! - [`classify`]: first-match-wins line classifier producing [`logsift_core::LogRecord`]s
//! - [`timestamp`]: best-effort syslog timestamp extraction
//! - [`report`]: timestamp sort, severity filter, table and CSV rendering
//! - [`error`]: domain error type
//!
//! # Pipeline
//!
//! ```text
//! PatternLoader -> Classifier -> sort_records -> render_table / export_csv
//!       |              |
//!   JSON registry  one LogRecord per line
//! ```

pub mod classify;
pub mod error;
pub mod pattern;
pub mod report;
pub mod timestamp;

// --- main type re-exports ---

// Classifier
pub use classify::Classifier;

// Errors
pub use error::AnalysisError;

// Pattern registry
pub use pattern::{PatternDefinition, PatternLoader, PatternSet};

// Report assembly
pub use report::{export_csv, render_table, sort_records, TableStyle};

// Timestamp extraction
pub use timestamp::extract_timestamp;
