//! Pattern registry data types.

use regex::Regex;

use logsift_core::types::{Color, Severity};

/// One labeled pattern with its styling metadata.
///
/// Immutable once loaded. The regex may contain named capture groups
/// `ip`, `user`, and `port`; any other groups are ignored by the
/// classifier.
#[derive(Debug, Clone)]
pub struct PatternDefinition {
    /// Event label, free-form, shown in reports.
    pub label: String,
    /// Compiled pattern, evaluated with search semantics.
    pub regex: Regex,
    /// Highlight color for matching records.
    pub color: Color,
    /// Severity copied onto matching records.
    pub severity: Severity,
}

/// Ordered collection of pattern definitions.
///
/// Iteration order equals the declaration order of the configuration
/// source. The classifier stops at the first matching definition, so
/// order is semantically significant.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<PatternDefinition>,
}

impl PatternSet {
    pub(crate) fn new(patterns: Vec<PatternDefinition>) -> Self {
        Self { patterns }
    }

    /// Definitions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &PatternDefinition> {
        self.patterns.iter()
    }

    /// Looks up a definition by label.
    pub fn get(&self, label: &str) -> Option<&PatternDefinition> {
        self.patterns.iter().find(|p| p.label == label)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
