//! Error types for replication.

use thiserror::Error;

/// Result type for replication operations.
pub type ReplicateResult<T> = Result<T, ReplicateError>;

/// Errors raised while replicating a mutation.
#[derive(Debug, Error)]
pub enum ReplicateError {
    /// A declared relation's materialized records are not in the
    /// replication-aware collection wrapper. Fatal configuration
    /// error; raised before any remote call for that relation.
    #[error("unable to sync relation: related type {related} does not replicate")]
    RelationSyncMismatch { related: String },

    /// A relation spec names a relation the entity has no accessor for.
    #[error("unknown relation {name:?}: entity exposes no accessor")]
    UnknownRelation { name: String },

    /// Remote store failure, propagated verbatim.
    #[error("store error: {0}")]
    Store(#[from] firesync_client::StoreError),

    /// Fresh load or relation materialization failure.
    #[error("model error: {0}")]
    Model(#[from] firesync_model::ModelError),
}
