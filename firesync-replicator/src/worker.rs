//! Outbox drain worker with bounded exponential backoff.

use crate::outbox::{Outbox, OutboxRecord, OutboxStatus};
use firesync_client::{RemoteStore, StoreResult};
use firesync_types::WriteOp;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Retry behavior for outbox delivery.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total delivery attempts before a record is dead-lettered.
    pub max_attempts: u32,
    /// Backoff after the first failure.
    pub base_delay: Duration,
    /// Backoff ceiling.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Backoff before retrying after the `attempt`-th failure:
    /// `base * 2^(attempt-1)`, capped at `max_delay`.
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let shift = attempt.saturating_sub(1).min(31);
        let delay = self.base_delay.saturating_mul(1u32 << shift);
        delay.min(self.max_delay)
    }
}

/// Drains an [`Outbox`], performing remote calls with retry.
///
/// Records are delivered strictly in enqueue order; a record being
/// retried blocks those behind it, which preserves per-entity write
/// ordering.
pub struct OutboxWorker {
    outbox: Arc<Outbox>,
    store: Arc<dyn RemoteStore>,
    policy: RetryPolicy,
    poll_interval: Duration,
}

impl OutboxWorker {
    /// Creates a worker with the default retry policy.
    pub fn new(outbox: Arc<Outbox>, store: Arc<dyn RemoteStore>) -> Self {
        Self::with_policy(outbox, store, RetryPolicy::default())
    }

    /// Creates a worker with a custom retry policy.
    pub fn with_policy(
        outbox: Arc<Outbox>,
        store: Arc<dyn RemoteStore>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            outbox,
            store,
            policy,
            poll_interval: Duration::from_millis(500),
        }
    }

    /// Sets how long `run` idles between drain passes.
    #[must_use]
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Delivers every currently pending record, retrying each in place
    /// until it succeeds or dead-letters. Returns the number delivered.
    pub async fn drain(&self) -> usize {
        let mut delivered = 0;
        while let Some(record) = self.outbox.take_next().await {
            if self.deliver(record).await {
                delivered += 1;
            }
        }
        delivered
    }

    /// Runs the drain loop until `shutdown` flips to true. Performs a
    /// final drain pass before returning.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        info!("Outbox worker started ({})", self.store.provider_name());
        loop {
            self.drain().await;
            tokio::select! {
                _ = tokio::time::sleep(self.poll_interval) => {}
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        self.drain().await;
                        info!("Outbox worker stopped");
                        return;
                    }
                }
            }
        }
    }

    /// Delivers one record to completion. Returns true on success,
    /// false if the record was dead-lettered.
    async fn deliver(&self, mut record: OutboxRecord) -> bool {
        loop {
            record.attempts += 1;
            match self.attempt(&record).await {
                Ok(()) => {
                    record.status = OutboxStatus::Delivered;
                    debug!(
                        "Delivered {} ({}) after {} attempt(s)",
                        record.path, record.op, record.attempts
                    );
                    return true;
                }
                Err(e) => {
                    warn!(
                        "Delivery of {} ({}) failed on attempt {}: {}",
                        record.path, record.op, record.attempts, e
                    );
                    record.last_error = Some(e.to_string());

                    if record.attempts >= self.policy.max_attempts {
                        record.status = OutboxStatus::Dead;
                        warn!(
                            "Dead-lettering {} after {} attempts",
                            record.id, record.attempts
                        );
                        self.outbox.bury(record).await;
                        return false;
                    }

                    let mut delay = self.policy.delay_for(record.attempts);
                    // A server-provided Retry-After wins when longer.
                    if let Some(retry_after) = e.retry_after() {
                        delay = delay.max(retry_after);
                    }
                    debug!("Retrying {} in {:?}", record.id, delay);
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    async fn attempt(&self, record: &OutboxRecord) -> StoreResult<()> {
        let payload = record.payload.clone().unwrap_or_default();
        match record.op {
            WriteOp::Set => self.store.set(&record.path, &payload).await,
            WriteOp::Update => self.store.update(&record.path, &payload).await,
            WriteOp::Delete => self.store.delete(&record.path).await,
        }
    }
}
