//! Lifecycle change kinds and the remote operations they map to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A lifecycle transition observed on a tracked entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// The entity was inserted.
    Created,
    /// The entity's attributes changed.
    Updated,
    /// The entity was removed (hard or soft delete).
    Deleted,
    /// A soft-deleted entity was brought back.
    Restored,
}

impl ChangeKind {
    /// The remote operation a change kind translates to.
    ///
    /// Create and restore both push the full state; update merges;
    /// delete removes the subtree.
    #[must_use]
    pub fn write_op(self) -> WriteOp {
        match self {
            ChangeKind::Created | ChangeKind::Restored => WriteOp::Set,
            ChangeKind::Updated => WriteOp::Update,
            ChangeKind::Deleted => WriteOp::Delete,
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChangeKind::Created => "created",
            ChangeKind::Updated => "updated",
            ChangeKind::Deleted => "deleted",
            ChangeKind::Restored => "restored",
        };
        write!(f, "{s}")
    }
}

/// One of the three operations the remote store supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOp {
    /// Full overwrite of the subtree at the path.
    Set,
    /// Partial merge into the subtree at the path.
    Update,
    /// Removal of the subtree at the path. Carries no payload.
    Delete,
}

impl fmt::Display for WriteOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WriteOp::Set => "set",
            WriteOp::Update => "update",
            WriteOp::Delete => "delete",
        };
        write!(f, "{s}")
    }
}
