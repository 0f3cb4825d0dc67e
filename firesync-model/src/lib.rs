//! Host ORM contract for Firesync.
//!
//! The replicator never owns entity persistence — it observes it. This
//! crate defines the seam between the host ORM and the replicator:
//! - [`SyncEntity`] — what a tracked entity must expose (table, key,
//!   capability flags, declared relations)
//! - [`EntitySource`] — the "reload from source of truth" collaborator
//! - [`RelationSpec`] / [`RelationQuery`] — how related entities are
//!   declared and materialized for the cascade
//! - [`SyncCollection`] — the replication-aware collection wrapper the
//!   cascade requires materialized relations to arrive in

mod collection;
mod entity;
mod error;
mod relation;
mod source;

pub use collection::SyncCollection;
pub use entity::SyncEntity;
pub use error::{ModelError, ModelResult};
pub use relation::{RelatedRecords, RelationQuery, RelationResolver, RelationSpec};
pub use source::EntitySource;
