//! Write-through replicator.
//!
//! On every committed mutation of a tracked entity, mirror the entity's
//! freshly loaded state (or its absence, on delete) to the remote store
//! at `table/key`, then cascade one level to its declared relations.
//!
//! There is no hidden static wiring: a [`Replicator`] is built from an
//! injected [`RemoteStore`](firesync_client::RemoteStore) handle and an
//! [`EntitySource`](firesync_model::EntitySource), and the host calls
//! its lifecycle entry points from its own ORM hooks.
//!
//! Delivery comes in two modes:
//! - [`DeliveryMode::Direct`] — the remote call happens inline and a
//!   failure unwinds to the mutation call site.
//! - [`DeliveryMode::Queued`] — the write intent is recorded in an
//!   [`Outbox`] and an [`OutboxWorker`] delivers it asynchronously with
//!   bounded exponential backoff, moving permanently failing records to
//!   a dead-letter list.

mod error;
mod outbox;
mod replicator;
mod worker;

pub use error::{ReplicateError, ReplicateResult};
pub use outbox::{Outbox, OutboxRecord, OutboxStatus};
pub use replicator::{DeliveryMode, Replicator};
pub use worker::{OutboxWorker, RetryPolicy};
