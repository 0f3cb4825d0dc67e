use crate::error::ModelResult;
use async_trait::async_trait;
use firesync_types::{Attributes, RecordKey};

/// The "reload from source of truth" collaborator.
///
/// Owned by the host ORM. The replicator calls [`EntitySource::fresh`]
/// immediately before serializing, because concurrent writes between
/// the mutation and the sync may have altered derived fields.
#[async_trait]
pub trait EntitySource: Send + Sync {
    /// Re-reads an entity's current attributes by primary key.
    ///
    /// Returns `Ok(None)` when the entity no longer exists (e.g. the
    /// sync raced with a delete).
    async fn fresh(&self, table: &str, key: &RecordKey) -> ModelResult<Option<Attributes>>;
}
