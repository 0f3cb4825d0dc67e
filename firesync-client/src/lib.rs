//! Remote store side of Firesync.
//!
//! Defines the [`RemoteStore`] interface the replicator writes through
//! and its Firebase Realtime Database implementation,
//! [`RealtimeDbClient`], which maps the three operations onto the RTDB
//! REST surface:
//!
//! - set    → `PUT {database_url}/{path}.json`
//! - update → `PATCH {database_url}/{path}.json`
//! - delete → `DELETE {database_url}/{path}.json`
//!
//! Authentication uses the legacy database-secret scheme (`?auth=…`).
//! Errors are not retried at this layer; the replicator's outbox worker
//! owns retry policy and consults [`StoreError::retry_after`].

mod config;
mod error;
mod realtime_db;
mod store;

pub use config::RealtimeDbConfig;
pub use error::{StoreError, StoreResult};
pub use realtime_db::RealtimeDbClient;
pub use store::RemoteStore;
