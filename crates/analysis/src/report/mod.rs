//! Report assembly: timestamp sort, severity filter, table and CSV output.

mod export;
mod table;

use std::cmp::Ordering;

use logsift_core::types::LogRecord;

pub use export::export_csv;
pub use table::{render_table, TableStyle};

/// Timestamp-ascending order with absent timestamps last.
///
/// Returns `Equal` for ties (including two absent timestamps) so that a
/// stable sort preserves original line order among them.
pub(crate) fn timestamp_order(a: &LogRecord, b: &LogRecord) -> Ordering {
    match (a.timestamp, b.timestamp) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts records by timestamp ascending, absent timestamps last.
///
/// The sort is stable: records with identical or missing timestamps keep
/// their original line order.
pub fn sort_records(records: &mut [LogRecord]) {
    records.sort_by(timestamp_order);
}
