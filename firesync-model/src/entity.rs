use crate::relation::{RelationQuery, RelationSpec};
use firesync_types::{RecordKey, RemotePath};
use std::sync::Arc;

/// A persisted record tracked by the host ORM.
///
/// The replicator only reads the table name, key and declared relations;
/// attribute state is always re-fetched through [`crate::EntitySource`]
/// rather than read off the instance, so a stale in-memory copy can
/// never leak upstream.
pub trait SyncEntity: Send + Sync {
    /// The table/collection this entity belongs to.
    fn table(&self) -> &str;

    /// The entity's primary key.
    fn key(&self) -> RecordKey;

    /// The entity's location in the remote tree.
    ///
    /// Recomputed on every call — a path is never cached, so it always
    /// reflects the entity's current table and key.
    fn remote_path(&self) -> RemotePath {
        RemotePath::new(self.table(), &self.key())
    }

    /// Whether this entity type supports soft deletion (and therefore
    /// the restore lifecycle event).
    fn soft_deletes(&self) -> bool {
        false
    }

    /// Whether this entity type participates in replication.
    ///
    /// Consulted by the cascade's capability check.
    fn replicates(&self) -> bool {
        true
    }

    /// Relations to cascade to after this entity syncs, in declaration
    /// order. Empty by default.
    fn relation_specs(&self) -> Vec<RelationSpec> {
        Vec::new()
    }

    /// Resolves a declared relation's query accessor by name.
    fn relation(&self, name: &str) -> Option<Arc<dyn RelationQuery>> {
        let _ = name;
        None
    }
}
