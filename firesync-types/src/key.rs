//! Primary key type for tracked entities.
//!
//! Hosts use either auto-increment integers or string identifiers; the
//! replicator treats both uniformly when building remote paths.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The primary key of a tracked entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordKey {
    /// Auto-increment style numeric key.
    Int(i64),
    /// String key (UUIDs, slugs, natural keys).
    Str(String),
}

impl RecordKey {
    /// Returns the key rendered as a path segment.
    #[must_use]
    pub fn to_segment(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Int(n) => write!(f, "{n}"),
            RecordKey::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for RecordKey {
    fn from(n: i64) -> Self {
        RecordKey::Int(n)
    }
}

impl From<&str> for RecordKey {
    fn from(s: &str) -> Self {
        RecordKey::Str(s.to_string())
    }
}

impl From<String> for RecordKey {
    fn from(s: String) -> Self {
        RecordKey::Str(s)
    }
}
