//! The replicator — lifecycle dispatch, serialization and cascade.

use crate::error::{ReplicateError, ReplicateResult};
use crate::outbox::{Outbox, OutboxRecord};
use firesync_client::RemoteStore;
use firesync_model::{EntitySource, RelatedRecords, RelationSpec, SyncEntity};
use firesync_types::{Attributes, ChangeKind, WriteOp};
use std::sync::Arc;
use tracing::{debug, info};

/// How a write intent reaches the remote store.
#[derive(Clone)]
pub enum DeliveryMode {
    /// Perform the remote call inline and await it. Errors unwind to
    /// the mutation call site.
    Direct,
    /// Record the intent in an outbox; an [`crate::OutboxWorker`]
    /// delivers it asynchronously with retry.
    Queued(Arc<Outbox>),
}

/// Mirrors tracked entity mutations into the remote store.
///
/// One instance serves any number of entity types; the store handle and
/// source-of-truth collaborator are injected once at construction and
/// shared.
pub struct Replicator {
    store: Arc<dyn RemoteStore>,
    source: Arc<dyn EntitySource>,
    delivery: DeliveryMode,
}

impl Replicator {
    /// Creates a replicator with inline (direct) delivery.
    pub fn new(store: Arc<dyn RemoteStore>, source: Arc<dyn EntitySource>) -> Self {
        Self::with_delivery(store, source, DeliveryMode::Direct)
    }

    /// Creates a replicator that records write intents in `outbox`
    /// instead of calling the store inline.
    pub fn with_outbox(
        store: Arc<dyn RemoteStore>,
        source: Arc<dyn EntitySource>,
        outbox: Arc<Outbox>,
    ) -> Self {
        Self::with_delivery(store, source, DeliveryMode::Queued(outbox))
    }

    /// Creates a replicator with an explicit delivery mode.
    pub fn with_delivery(
        store: Arc<dyn RemoteStore>,
        source: Arc<dyn EntitySource>,
        delivery: DeliveryMode,
    ) -> Self {
        Self {
            store,
            source,
            delivery,
        }
    }

    // ── Lifecycle entry points ───────────────────────────────────

    /// The entity was inserted: push its full state, then cascade.
    pub async fn entity_created(&self, entity: &dyn SyncEntity) -> ReplicateResult<()> {
        self.on_mutation(entity, ChangeKind::Created).await
    }

    /// The entity changed: merge its current state, then cascade.
    pub async fn entity_updated(&self, entity: &dyn SyncEntity) -> ReplicateResult<()> {
        self.on_mutation(entity, ChangeKind::Updated).await
    }

    /// The entity was removed: delete its subtree, then cascade.
    pub async fn entity_deleted(&self, entity: &dyn SyncEntity) -> ReplicateResult<()> {
        self.on_mutation(entity, ChangeKind::Deleted).await
    }

    /// A soft-deleted entity came back: push its full state, then
    /// cascade. A no-op for entity types without soft deletion.
    pub async fn entity_restored(&self, entity: &dyn SyncEntity) -> ReplicateResult<()> {
        if !entity.soft_deletes() {
            debug!(
                "Ignoring restore of {}: entity type does not soft-delete",
                entity.remote_path()
            );
            return Ok(());
        }
        self.on_mutation(entity, ChangeKind::Restored).await
    }

    /// Manual re-sync. Always a merge, regardless of the entity's
    /// persistence state, and never cascades.
    pub async fn sync_now(&self, entity: &dyn SyncEntity) -> ReplicateResult<()> {
        self.push(entity, WriteOp::Update).await
    }

    /// Handles a lifecycle transition: primary sync first, then the
    /// one-level relation cascade.
    pub async fn on_mutation(
        &self,
        entity: &dyn SyncEntity,
        kind: ChangeKind,
    ) -> ReplicateResult<()> {
        self.push(entity, kind.write_op()).await?;
        self.cascade(entity).await
    }

    // ── Serialization + dispatch ─────────────────────────────────

    /// Serializes the entity for upstream: a fresh load from the source
    /// of truth at call time. A vanished entity (raced with a delete)
    /// degrades to an empty payload.
    async fn payload_for(&self, entity: &dyn SyncEntity) -> ReplicateResult<Attributes> {
        match self.source.fresh(entity.table(), &entity.key()).await? {
            Some(attributes) => Ok(attributes),
            None => {
                debug!(
                    "Fresh load of {} returned nothing, sending empty payload",
                    entity.remote_path()
                );
                Ok(Attributes::new())
            }
        }
    }

    /// Performs (or enqueues) exactly one remote operation for the
    /// entity. The path is recomputed here on every call.
    async fn push(&self, entity: &dyn SyncEntity, op: WriteOp) -> ReplicateResult<()> {
        let path = entity.remote_path();
        let payload = match op {
            WriteOp::Delete => None,
            WriteOp::Set | WriteOp::Update => Some(self.payload_for(entity).await?),
        };

        match &self.delivery {
            DeliveryMode::Direct => {
                let body = payload.unwrap_or_default();
                match op {
                    WriteOp::Set => self.store.set(&path, &body).await?,
                    WriteOp::Update => self.store.update(&path, &body).await?,
                    WriteOp::Delete => self.store.delete(&path).await?,
                }
                info!("Synced {} ({})", path, op);
            }
            DeliveryMode::Queued(outbox) => {
                let record = OutboxRecord::new(path.clone(), op, payload);
                debug!("Enqueued {} ({}) as {}", path, op, record.id);
                outbox.enqueue(record).await;
            }
        }
        Ok(())
    }

    // ── Cascade ──────────────────────────────────────────────────

    /// Walks the entity's declared relation specs in order and
    /// bulk-syncs each materialized collection.
    ///
    /// The capability gate consults the *outer* entity's `replicates`
    /// flag, not the related type's, before raising a mismatch.
    async fn cascade(&self, entity: &dyn SyncEntity) -> ReplicateResult<()> {
        let specs = entity.relation_specs();
        if specs.is_empty() {
            return Ok(());
        }

        for spec in &specs {
            let name = spec.name();
            let accessor = entity
                .relation(name)
                .ok_or_else(|| ReplicateError::UnknownRelation {
                    name: name.to_string(),
                })?;

            let query = match spec {
                RelationSpec::Named(_) => accessor,
                RelationSpec::Dynamic { resolver, .. } => match resolver(accessor) {
                    Some(query) => query,
                    None => {
                        debug!("Cascade suppressed for relation {name:?}");
                        continue;
                    }
                },
            };

            let related_type = query.related_type().to_string();
            let records = query.get().await?;

            match records {
                RelatedRecords::Synced(collection) => {
                    debug!(
                        "Cascading relation {name:?}: {} member(s) of {related_type}",
                        collection.len()
                    );
                    for member in collection.iter() {
                        self.sync_now(member.as_ref()).await?;
                    }
                }
                RelatedRecords::Plain(rows) => {
                    if entity.replicates() {
                        return Err(ReplicateError::RelationSyncMismatch {
                            related: related_type,
                        });
                    }
                    debug!(
                        "Skipping relation {name:?}: {rows} row(s) without sync capability \
                         on a non-replicating entity"
                    );
                }
            }
        }

        Ok(())
    }
}
