//! Line classifier -- first-match-wins pattern dispatch.
//!
//! Patterns are evaluated in declaration order with search semantics; the
//! first match determines the record's label, color, and severity. Named
//! capture groups `ip`, `user`, and `port` populate the extracted fields.

use std::path::Path;

use regex::Captures;

use logsift_core::types::{LogRecord, FIELD_ABSENT};

use crate::error::AnalysisError;
use crate::pattern::PatternSet;
use crate::timestamp::extract_timestamp;

/// Classifies log lines against an ordered pattern set.
pub struct Classifier {
    patterns: PatternSet,
}

impl Classifier {
    pub fn new(patterns: PatternSet) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Classifies one line.
    ///
    /// Deterministic and side-effect-free: patterns are scanned in
    /// declaration order, the first match wins, and a line matching no
    /// pattern yields the unmatched record (label "Normal log", severity
    /// "normal", all extracted fields "N/A").
    pub fn classify(&self, line: &str) -> LogRecord {
        let timestamp = extract_timestamp(line);

        for definition in self.patterns.iter() {
            if let Some(captures) = definition.regex.captures(line) {
                return LogRecord {
                    timestamp,
                    event: definition.label.clone(),
                    log: line.trim().to_owned(),
                    color: definition.color,
                    severity: definition.severity.clone(),
                    ip: named_group(&captures, "ip"),
                    user: named_group(&captures, "user"),
                    port: named_group(&captures, "port"),
                };
            }
        }

        LogRecord::unmatched(timestamp, line)
    }

    /// Reads a log file and classifies every line.
    ///
    /// The whole file is read into memory before classification; records
    /// are returned in line order. Malformed lines cannot fail the run.
    ///
    /// # Errors
    /// The file is missing or unreadable.
    pub async fn analyze_file(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<Vec<LogRecord>, AnalysisError> {
        let path = path.as_ref();

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AnalysisError::Input {
                path: path.display().to_string(),
                reason: format!("failed to read file: {e}"),
            })?;

        let records: Vec<LogRecord> = content.lines().map(|line| self.classify(line)).collect();

        tracing::info!(
            path = %path.display(),
            lines = records.len(),
            "classified log file"
        );

        Ok(records)
    }
}

/// Value of a named capture group, or the sentinel when the group is
/// absent from the pattern or did not participate in the match.
fn named_group(captures: &Captures<'_>, name: &str) -> String {
    captures
        .name(name)
        .map_or_else(|| FIELD_ABSENT.to_owned(), |m| m.as_str().to_owned())
}
