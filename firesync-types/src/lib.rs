//! Shared types for the Firesync replicator.
//!
//! Defines the vocabulary every other crate speaks:
//! - [`RecordKey`] — an entity's primary key (integer or string)
//! - [`RemotePath`] — the `table/key` location of an entity in the remote tree
//! - [`ChangeKind`] — which lifecycle transition fired, and [`WriteOp`],
//!   the remote operation it maps to
//! - [`Attributes`] — the serialized payload shape sent upstream

mod change;
mod key;
mod path;

pub use change::{ChangeKind, WriteOp};
pub use key::RecordKey;
pub use path::RemotePath;

/// The serialized state of an entity as sent to the remote store:
/// a flat JSON object of attribute name to value.
pub type Attributes = serde_json::Map<String, serde_json::Value>;
