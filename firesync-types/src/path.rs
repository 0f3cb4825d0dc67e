//! Remote path derivation.
//!
//! An entity lives at `table/key` in the remote tree. Paths are derived
//! from the entity's current table and key on every sync — never cached,
//! so a path is always consistent with the state being pushed.

use crate::RecordKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Location of an entity in the remote document tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemotePath(String);

impl RemotePath {
    /// Derives the path for an entity from its table name and key.
    ///
    /// Stray slashes around the table name are trimmed so the resulting
    /// path is always exactly `table/key`.
    #[must_use]
    pub fn new(table: &str, key: &RecordKey) -> Self {
        let table = table.trim_matches('/');
        Self(format!("{table}/{key}"))
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RemotePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RemotePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
