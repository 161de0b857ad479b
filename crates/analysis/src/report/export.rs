//! CSV report export.
//!
//! Writes every record (no severity filtering, independent of the console
//! view flags) sorted by the same timestamp rule as the table.

use std::path::Path;

use logsift_core::types::LogRecord;

use super::timestamp_order;
use crate::error::AnalysisError;

/// Exports records to a CSV file at `path`.
///
/// Columns: `timestamp, event, log, color, severity, ip, user, port`.
/// Timestamps are formatted `%Y-%m-%d %H:%M:%S` and empty when absent;
/// colors are written as their uppercase names.
///
/// # Errors
/// The file cannot be created or written.
pub fn export_csv(records: &[LogRecord], path: impl AsRef<Path>) -> Result<(), AnalysisError> {
    let path = path.as_ref();

    let mut sorted: Vec<&LogRecord> = records.iter().collect();
    sorted.sort_by(|a, b| timestamp_order(a, b));

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "timestamp", "event", "log", "color", "severity", "ip", "user", "port",
    ])?;

    for record in sorted {
        writer.write_record([
            record.formatted_timestamp(),
            record.event.clone(),
            record.log.clone(),
            record.color.name().to_owned(),
            record.severity.to_string(),
            record.ip.clone(),
            record.user.clone(),
            record.port.clone(),
        ])?;
    }

    writer.flush()?;

    tracing::info!(
        path = %path.display(),
        rows = records.len(),
        "csv report written"
    );

    Ok(())
}
