//! In-memory outbox for queued delivery.
//!
//! A write intent is recorded here transactionally with the local
//! mutation (from the caller's point of view: enqueue returns once the
//! record is in the queue) and delivered later by the worker. Records
//! that exhaust their retries land on the dead-letter list with their
//! last error attached.

use chrono::{DateTime, Utc};
use firesync_types::{Attributes, RemotePath, WriteOp};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Delivery state of an outbox record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutboxStatus {
    /// Waiting for delivery (or mid-retry).
    Pending,
    /// Delivered to the remote store.
    Delivered,
    /// Retries exhausted; parked on the dead-letter list.
    Dead,
}

/// A recorded write intent awaiting delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboxRecord {
    /// Time-ordered record ID.
    pub id: Uuid,
    /// Where the write goes.
    pub path: RemotePath,
    /// Which of the three operations to perform.
    pub op: WriteOp,
    /// The payload captured at enqueue time. `None` for deletes.
    pub payload: Option<Attributes>,
    /// Delivery attempts made so far.
    pub attempts: u32,
    /// Current delivery state.
    pub status: OutboxStatus,
    /// When the intent was recorded.
    pub created_at: DateTime<Utc>,
    /// Message of the most recent delivery failure.
    pub last_error: Option<String>,
}

impl OutboxRecord {
    /// Records a new write intent.
    #[must_use]
    pub fn new(path: RemotePath, op: WriteOp, payload: Option<Attributes>) -> Self {
        Self {
            id: Uuid::now_v7(),
            path,
            op,
            payload,
            attempts: 0,
            status: OutboxStatus::Pending,
            created_at: Utc::now(),
            last_error: None,
        }
    }
}

/// FIFO queue of write intents plus a dead-letter list.
///
/// Shared between replicators (producers) and the worker (consumer).
#[derive(Default)]
pub struct Outbox {
    pending: Mutex<VecDeque<OutboxRecord>>,
    dead: Mutex<Vec<OutboxRecord>>,
}

impl Outbox {
    /// An empty outbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to the back of the queue.
    pub async fn enqueue(&self, record: OutboxRecord) {
        self.pending.lock().await.push_back(record);
    }

    /// Pops the oldest pending record, if any.
    pub async fn take_next(&self) -> Option<OutboxRecord> {
        self.pending.lock().await.pop_front()
    }

    /// Number of records awaiting delivery.
    pub async fn pending_len(&self) -> usize {
        self.pending.lock().await.len()
    }

    /// Parks a record on the dead-letter list.
    pub async fn bury(&self, record: OutboxRecord) {
        self.dead.lock().await.push(record);
    }

    /// Snapshot of the dead-letter list.
    pub async fn dead_letters(&self) -> Vec<OutboxRecord> {
        self.dead.lock().await.clone()
    }
}
