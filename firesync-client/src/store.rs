//! Remote store abstraction.
//!
//! The replicator writes through this trait; the Realtime Database
//! client is the production implementation, tests substitute recording
//! fakes.

use crate::error::StoreResult;
use async_trait::async_trait;
use firesync_types::{Attributes, RemotePath};

/// A key-path document store supporting the three replication operations.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Returns the name of the store backend.
    fn provider_name(&self) -> &'static str;

    /// Overwrites the subtree at `path` with `payload`.
    async fn set(&self, path: &RemotePath, payload: &Attributes) -> StoreResult<()>;

    /// Merges `payload` into the subtree at `path`.
    async fn update(&self, path: &RemotePath, payload: &Attributes) -> StoreResult<()>;

    /// Removes the subtree at `path`. Carries no payload.
    async fn delete(&self, path: &RemotePath) -> StoreResult<()>;
}
