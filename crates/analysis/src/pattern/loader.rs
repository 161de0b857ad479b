//! Pattern file loader -- reads the JSON pattern registry from disk.
//!
//! The file is a single JSON object mapping event labels to definitions:
//!
//! ```json
//! {
//!   "SSH_FAIL": {
//!     "pattern": "Failed password for (?P<user>\\w+) from (?P<ip>[\\d.]+)",
//!     "color": "RED",
//!     "severity": "high"
//!   }
//! }
//! ```
//!
//! Key order defines the match order. `color` (case-insensitive, default
//! WHITE) and `severity` (lowercased, default "normal") are optional.

use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use logsift_core::types::{Color, Severity};

use super::types::{PatternDefinition, PatternSet};
use crate::error::AnalysisError;

const MAX_PATTERN_FILE_SIZE: u64 = 10 * 1024 * 1024; // 10MB

/// Raw definition as written in the pattern file.
#[derive(Debug, Deserialize)]
struct RawDefinition {
    pattern: String,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    severity: Option<Severity>,
}

/// Pattern file loader.
pub struct PatternLoader;

impl PatternLoader {
    /// Loads patterns from a JSON file.
    ///
    /// # Errors
    /// - the file is missing, unreadable, or larger than `MAX_PATTERN_FILE_SIZE`
    /// - the content is not a JSON object of definitions
    /// - any definition has a missing/invalid `pattern` or an empty label
    pub async fn load_file(path: impl AsRef<Path>) -> Result<PatternSet, AnalysisError> {
        let path = path.as_ref();

        let metadata =
            tokio::fs::metadata(path)
                .await
                .map_err(|e| AnalysisError::PatternLoad {
                    path: path.display().to_string(),
                    reason: format!("failed to read file metadata: {e}"),
                })?;

        if metadata.len() > MAX_PATTERN_FILE_SIZE {
            return Err(AnalysisError::PatternLoad {
                path: path.display().to_string(),
                reason: format!(
                    "file too large: {} bytes (max: {MAX_PATTERN_FILE_SIZE})",
                    metadata.len()
                ),
            });
        }

        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| AnalysisError::PatternLoad {
                    path: path.display().to_string(),
                    reason: format!("failed to read file: {e}"),
                })?;

        Self::parse_json(&content, &path.display().to_string())
    }

    /// Parses a JSON string into a pattern set.
    ///
    /// `source` is used in error messages only.
    pub fn parse_json(json_str: &str, source: &str) -> Result<PatternSet, AnalysisError> {
        // serde_json's preserve_order feature keeps the declaration order of
        // the object keys, which is the match order.
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json_str)
            .map_err(|e| AnalysisError::PatternLoad {
                path: source.to_owned(),
                reason: format!("JSON parse error: {e}"),
            })?;

        let mut patterns = Vec::with_capacity(raw.len());

        for (label, value) in raw {
            if label.is_empty() {
                return Err(AnalysisError::PatternValidation {
                    label: "(empty)".to_owned(),
                    reason: "pattern label must not be empty".to_owned(),
                });
            }

            let definition: RawDefinition = serde_json::from_value(value).map_err(|e| {
                AnalysisError::PatternValidation {
                    label: label.clone(),
                    reason: format!("invalid definition: {e}"),
                }
            })?;

            let regex =
                Regex::new(&definition.pattern).map_err(|e| AnalysisError::PatternValidation {
                    label: label.clone(),
                    reason: format!("invalid regex: {e}"),
                })?;

            // Unknown color names fall back to WHITE rather than failing the
            // load; only a missing/invalid regex is fatal.
            let color = match definition.color {
                None => Color::White,
                Some(ref name) => Color::from_str_loose(name).unwrap_or_else(|| {
                    tracing::warn!(
                        label = %label,
                        color = %name,
                        "unknown color name, falling back to WHITE"
                    );
                    Color::White
                }),
            };

            patterns.push(PatternDefinition {
                label,
                regex,
                color,
                severity: definition.severity.unwrap_or_default(),
            });
        }

        tracing::info!(source, count = patterns.len(), "loaded patterns");

        Ok(PatternSet::new(patterns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_valid_json() {
        let json = r#"{
            "SSH_FAIL": {
                "pattern": "Failed password for (?P<user>\\w+) from (?P<ip>[\\d.]+)",
                "color": "RED",
                "severity": "high"
            }
        }"#;
        let set = PatternLoader::parse_json(json, "test.json").unwrap();
        assert_eq!(set.len(), 1);
        let def = set.get("SSH_FAIL").unwrap();
        assert_eq!(def.color, Color::Red);
        assert_eq!(def.severity.as_str(), "high");
    }

    #[test]
    fn color_and_severity_default_when_absent() {
        let json = r#"{"PLAIN": {"pattern": "something"}}"#;
        let set = PatternLoader::parse_json(json, "test.json").unwrap();
        let def = set.get("PLAIN").unwrap();
        assert_eq!(def.color, Color::White);
        assert_eq!(def.severity.as_str(), "normal");
    }

    #[test]
    fn color_is_case_insensitive() {
        let json = r#"{"A": {"pattern": "x", "color": "cyan"}}"#;
        let set = PatternLoader::parse_json(json, "test.json").unwrap();
        assert_eq!(set.get("A").unwrap().color, Color::Cyan);
    }

    #[test]
    fn severity_is_lowercased() {
        let json = r#"{"A": {"pattern": "x", "severity": "HIGH"}}"#;
        let set = PatternLoader::parse_json(json, "test.json").unwrap();
        assert_eq!(set.get("A").unwrap().severity.as_str(), "high");
    }

    #[test]
    fn unknown_color_falls_back_to_white() {
        let json = r#"{"A": {"pattern": "x", "color": "CHARTREUSE"}}"#;
        let set = PatternLoader::parse_json(json, "test.json").unwrap();
        assert_eq!(set.get("A").unwrap().color, Color::White);
    }

    #[test]
    fn declaration_order_is_preserved() {
        let json = r#"{
            "ZETA": {"pattern": "z"},
            "ALPHA": {"pattern": "a"},
            "MIDDLE": {"pattern": "m"}
        }"#;
        let set = PatternLoader::parse_json(json, "test.json").unwrap();
        let labels: Vec<&str> = set.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["ZETA", "ALPHA", "MIDDLE"]);
    }

    #[test]
    fn invalid_regex_fails() {
        let json = r#"{"BAD": {"pattern": "[unclosed"}}"#;
        let err = PatternLoader::parse_json(json, "test.json").unwrap_err();
        assert!(matches!(err, AnalysisError::PatternValidation { .. }));
        assert!(err.to_string().contains("BAD"));
    }

    #[test]
    fn missing_pattern_field_fails() {
        let json = r#"{"BAD": {"color": "RED"}}"#;
        let result = PatternLoader::parse_json(json, "test.json");
        assert!(matches!(
            result,
            Err(AnalysisError::PatternValidation { .. })
        ));
    }

    #[test]
    fn top_level_array_fails() {
        let json = r#"[{"pattern": "x"}]"#;
        let result = PatternLoader::parse_json(json, "test.json");
        assert!(matches!(result, Err(AnalysisError::PatternLoad { .. })));
    }

    #[test]
    fn invalid_json_fails() {
        let result = PatternLoader::parse_json("{not json", "test.json");
        assert!(matches!(result, Err(AnalysisError::PatternLoad { .. })));
    }

    #[test]
    fn empty_object_yields_empty_set() {
        let set = PatternLoader::parse_json("{}", "test.json").unwrap();
        assert!(set.is_empty());
    }

    #[tokio::test]
    async fn load_missing_file_fails() {
        let result = PatternLoader::load_file("/nonexistent/patterns.json").await;
        assert!(matches!(result, Err(AnalysisError::PatternLoad { .. })));
    }

    #[tokio::test]
    async fn load_oversized_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&vec![b' '; (MAX_PATTERN_FILE_SIZE + 1) as usize])
            .unwrap();

        let err = PatternLoader::load_file(file.path()).await.unwrap_err();
        assert!(matches!(err, AnalysisError::PatternLoad { .. }));
        assert!(err.to_string().contains("too large"));
    }

    #[tokio::test]
    async fn load_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"SUDO": {{"pattern": "sudo:", "color": "YELLOW", "severity": "medium"}}}}"#
        )
        .unwrap();

        let set = PatternLoader::load_file(file.path()).await.unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("SUDO").unwrap().color, Color::Yellow);
    }
}
