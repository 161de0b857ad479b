//! Domain types shared across the workspace.
//!
//! A [`LogRecord`] is produced for every input line during classification
//! and is never mutated afterwards. [`Color`] and [`Severity`] carry the
//! styling metadata copied from the winning pattern definition.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Sentinel value for extracted fields the pattern did not capture.
pub const FIELD_ABSENT: &str = "N/A";

/// Event label assigned to lines no pattern matched.
pub const UNMATCHED_LABEL: &str = "Normal log";

/// Highlight color attached to a pattern definition.
///
/// Parsed case-insensitively from the pattern configuration and serialized
/// as its uppercase name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Red,
    Magenta,
    Yellow,
    #[default]
    White,
    Green,
    Blue,
    Cyan,
}

impl Color {
    /// Parses a color name, ignoring case.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "RED" => Some(Self::Red),
            "MAGENTA" => Some(Self::Magenta),
            "YELLOW" => Some(Self::Yellow),
            "WHITE" => Some(Self::White),
            "GREEN" => Some(Self::Green),
            "BLUE" => Some(Self::Blue),
            "CYAN" => Some(Self::Cyan),
            _ => None,
        }
    }

    /// Canonical uppercase name, as written in pattern files and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Magenta => "MAGENTA",
            Self::Yellow => "YELLOW",
            Self::White => "WHITE",
            Self::Green => "GREEN",
            Self::Blue => "BLUE",
            Self::Cyan => "CYAN",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Severity attached to a pattern definition.
///
/// Free-form string, case-normalized to lowercase. The reserved values
/// `"normal"` and `"info"` mark records that the console view treats as
/// unremarkable (hidden unless `--all`, never highlighted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Severity(String);

impl Severity {
    /// Creates a severity, lowercasing the input.
    pub fn new(s: &str) -> Self {
        Self(s.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the reserved severities that view filtering treats as
    /// unremarkable (`"normal"` and `"info"`).
    pub fn is_normal(&self) -> bool {
        self.0 == "normal" || self.0 == "info"
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self("normal".to_owned())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(&s))
    }
}

/// One classified log line.
///
/// Exactly one record is produced per input line. `event`, `color`, and
/// `severity` come from the winning pattern definition, or from the
/// unmatched defaults when no pattern matched. `ip`/`user`/`port` hold
/// [`FIELD_ABSENT`] when the pattern captured nothing for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Parsed syslog-style timestamp, absent for non-syslog lines.
    pub timestamp: Option<NaiveDateTime>,
    /// Label of the matched pattern, or [`UNMATCHED_LABEL`].
    pub event: String,
    /// Raw line, trimmed.
    pub log: String,
    /// Highlight color for the console view.
    pub color: Color,
    /// Severity used for view filtering.
    pub severity: Severity,
    pub ip: String,
    pub user: String,
    pub port: String,
}

impl LogRecord {
    /// Record for a line no pattern matched.
    pub fn unmatched(timestamp: Option<NaiveDateTime>, line: &str) -> Self {
        Self {
            timestamp,
            event: UNMATCHED_LABEL.to_owned(),
            log: line.trim().to_owned(),
            color: Color::White,
            severity: Severity::default(),
            ip: FIELD_ABSENT.to_owned(),
            user: FIELD_ABSENT.to_owned(),
            port: FIELD_ABSENT.to_owned(),
        }
    }

    /// Timestamp formatted for reports (`%Y-%m-%d %H:%M:%S`), empty when absent.
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp
            .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default()
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.event, self.log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_default_is_white() {
        assert_eq!(Color::default(), Color::White);
    }

    #[test]
    fn color_from_str_loose() {
        assert_eq!(Color::from_str_loose("red"), Some(Color::Red));
        assert_eq!(Color::from_str_loose("MAGENTA"), Some(Color::Magenta));
        assert_eq!(Color::from_str_loose("Cyan"), Some(Color::Cyan));
        assert_eq!(Color::from_str_loose("purple"), None);
    }

    #[test]
    fn color_display_is_uppercase_name() {
        assert_eq!(Color::Red.to_string(), "RED");
        assert_eq!(Color::White.to_string(), "WHITE");
    }

    #[test]
    fn color_serialize_roundtrip() {
        let json = serde_json::to_string(&Color::Yellow).unwrap();
        assert_eq!(json, "\"YELLOW\"");
        let color: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(color, Color::Yellow);
    }

    #[test]
    fn severity_is_lowercased() {
        assert_eq!(Severity::new("HIGH").as_str(), "high");
        assert_eq!(Severity::new("Medium").as_str(), "medium");
    }

    #[test]
    fn severity_default_is_normal() {
        assert_eq!(Severity::default().as_str(), "normal");
        assert!(Severity::default().is_normal());
    }

    #[test]
    fn severity_info_counts_as_normal() {
        assert!(Severity::new("info").is_normal());
        assert!(Severity::new("INFO").is_normal());
        assert!(!Severity::new("high").is_normal());
    }

    #[test]
    fn severity_deserialize_lowercases() {
        let sev: Severity = serde_json::from_str("\"CRITICAL\"").unwrap();
        assert_eq!(sev.as_str(), "critical");
    }

    #[test]
    fn unmatched_record_defaults() {
        let record = LogRecord::unmatched(None, "  some line  ");
        assert_eq!(record.event, UNMATCHED_LABEL);
        assert_eq!(record.log, "some line");
        assert_eq!(record.color, Color::White);
        assert!(record.severity.is_normal());
        assert_eq!(record.ip, FIELD_ABSENT);
        assert_eq!(record.user, FIELD_ABSENT);
        assert_eq!(record.port, FIELD_ABSENT);
    }

    #[test]
    fn formatted_timestamp() {
        use chrono::NaiveDate;

        let ts = NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(10, 0, 1)
            .unwrap();
        let record = LogRecord::unmatched(Some(ts), "line");
        assert_eq!(record.formatted_timestamp(), "2026-01-05 10:00:01");

        let record = LogRecord::unmatched(None, "line");
        assert_eq!(record.formatted_timestamp(), "");
    }

    #[test]
    fn record_display() {
        let record = LogRecord::unmatched(None, "session opened");
        let display = record.to_string();
        assert!(display.contains("normal"));
        assert!(display.contains("Normal log"));
        assert!(display.contains("session opened"));
    }
}
