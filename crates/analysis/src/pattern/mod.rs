//! Pattern registry: labeled regex patterns with styling metadata.
//!
//! Patterns are declared in a JSON object whose key order defines the
//! match order (first-match-wins).

mod loader;
mod types;

pub use loader::PatternLoader;
pub use types::{PatternDefinition, PatternSet};
