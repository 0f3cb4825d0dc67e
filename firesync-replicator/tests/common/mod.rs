//! Shared fakes: a recording remote store, an in-memory entity source
//! and a configurable test entity.
#![allow(dead_code)]

use async_trait::async_trait;
use firesync_client::{RemoteStore, StoreError, StoreResult};
use firesync_model::{
    EntitySource, ModelError, ModelResult, RelatedRecords, RelationQuery, RelationSpec,
    SyncEntity,
};
use firesync_types::{Attributes, RecordKey, RemotePath};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::sync::Arc;

// ── Remote store fakes ────────────────────────────────────────────

/// One observed remote call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Set { path: String, payload: Attributes },
    Update { path: String, payload: Attributes },
    Delete { path: String },
}

/// Records every call; optionally fails the first `fail_first` calls.
#[derive(Default)]
pub struct RecordingStore {
    calls: Mutex<Vec<Call>>,
    fail_first: AtomicU32,
    rate_limit_retry_after: Mutex<Option<u64>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next `n` calls with a 503 before succeeding.
    pub fn failing_first(n: u32) -> Self {
        let store = Self::default();
        store.fail_first.store(n, Ordering::SeqCst);
        store
    }

    /// Fail the next `n` calls with a 429 carrying `retry_after_secs`.
    pub fn rate_limited_first(n: u32, retry_after_secs: u64) -> Self {
        let store = Self::failing_first(n);
        *store.rate_limit_retry_after.lock().unwrap() = Some(retry_after_secs);
        store
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn gate(&self) -> StoreResult<()> {
        let remaining = self.fail_first.load(Ordering::SeqCst);
        if remaining == 0 {
            return Ok(());
        }
        self.fail_first.store(remaining - 1, Ordering::SeqCst);
        match *self.rate_limit_retry_after.lock().unwrap() {
            Some(retry_after_secs) => Err(StoreError::RateLimited { retry_after_secs }),
            None => Err(StoreError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            }),
        }
    }
}

#[async_trait]
impl RemoteStore for RecordingStore {
    fn provider_name(&self) -> &'static str {
        "recording"
    }

    async fn set(&self, path: &RemotePath, payload: &Attributes) -> StoreResult<()> {
        self.gate()?;
        self.calls.lock().unwrap().push(Call::Set {
            path: path.to_string(),
            payload: payload.clone(),
        });
        Ok(())
    }

    async fn update(&self, path: &RemotePath, payload: &Attributes) -> StoreResult<()> {
        self.gate()?;
        self.calls.lock().unwrap().push(Call::Update {
            path: path.to_string(),
            payload: payload.clone(),
        });
        Ok(())
    }

    async fn delete(&self, path: &RemotePath) -> StoreResult<()> {
        self.gate()?;
        self.calls.lock().unwrap().push(Call::Delete {
            path: path.to_string(),
        });
        Ok(())
    }
}

// ── Entity source fake ────────────────────────────────────────────

/// In-memory source of truth keyed by `table/key`.
#[derive(Default)]
pub struct MemorySource {
    rows: Mutex<HashMap<String, Attributes>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, table: &str, key: &RecordKey, attributes: Attributes) {
        self.rows
            .lock()
            .unwrap()
            .insert(format!("{table}/{key}"), attributes);
    }

    pub fn remove(&self, table: &str, key: &RecordKey) {
        self.rows.lock().unwrap().remove(&format!("{table}/{key}"));
    }
}

#[async_trait]
impl EntitySource for MemorySource {
    async fn fresh(&self, table: &str, key: &RecordKey) -> ModelResult<Option<Attributes>> {
        Ok(self.rows.lock().unwrap().get(&format!("{table}/{key}")).cloned())
    }
}

/// Source of truth whose reads always fail.
pub struct FailingSource;

#[async_trait]
impl EntitySource for FailingSource {
    async fn fresh(&self, table: &str, key: &RecordKey) -> ModelResult<Option<Attributes>> {
        Err(ModelError::Source(format!(
            "connection lost reading {table}/{key}"
        )))
    }
}

// ── Test entity & relations ───────────────────────────────────────

/// Configurable tracked entity.
pub struct TestEntity {
    pub table: String,
    pub key: RecordKey,
    pub soft_deletes: bool,
    pub replicates: bool,
    pub specs: Vec<RelationSpec>,
    pub relations: HashMap<String, Arc<dyn RelationQuery>>,
}

impl TestEntity {
    pub fn new(table: &str, key: impl Into<RecordKey>) -> Self {
        Self {
            table: table.to_string(),
            key: key.into(),
            soft_deletes: false,
            replicates: true,
            specs: Vec::new(),
            relations: HashMap::new(),
        }
    }

    pub fn soft_deleting(mut self) -> Self {
        self.soft_deletes = true;
        self
    }

    pub fn non_replicating(mut self) -> Self {
        self.replicates = false;
        self
    }

    pub fn with_relation(
        mut self,
        spec: RelationSpec,
        query: Arc<dyn RelationQuery>,
    ) -> Self {
        self.relations.insert(spec.name().to_string(), query);
        self.specs.push(spec);
        self
    }

    /// Declares a spec without providing an accessor for it.
    pub fn with_dangling_spec(mut self, spec: RelationSpec) -> Self {
        self.specs.push(spec);
        self
    }
}

impl SyncEntity for TestEntity {
    fn table(&self) -> &str {
        &self.table
    }

    fn key(&self) -> RecordKey {
        self.key.clone()
    }

    fn soft_deletes(&self) -> bool {
        self.soft_deletes
    }

    fn replicates(&self) -> bool {
        self.replicates
    }

    fn relation_specs(&self) -> Vec<RelationSpec> {
        self.specs.clone()
    }

    fn relation(&self, name: &str) -> Option<Arc<dyn RelationQuery>> {
        self.relations.get(name).cloned()
    }
}

/// Relation query returning a canned result.
pub struct FakeQuery {
    related_type: String,
    records: RelatedRecords,
}

impl FakeQuery {
    pub fn new(related_type: &str, records: RelatedRecords) -> Arc<dyn RelationQuery> {
        Arc::new(Self {
            related_type: related_type.to_string(),
            records,
        })
    }
}

#[async_trait]
impl RelationQuery for FakeQuery {
    fn related_type(&self) -> &str {
        &self.related_type
    }

    async fn get(&self) -> ModelResult<RelatedRecords> {
        Ok(self.records.clone())
    }
}

/// Relation query whose materialization always fails.
pub struct FailingQuery {
    related_type: String,
}

impl FailingQuery {
    pub fn new(related_type: &str) -> Arc<dyn RelationQuery> {
        Arc::new(Self {
            related_type: related_type.to_string(),
        })
    }
}

#[async_trait]
impl RelationQuery for FailingQuery {
    fn related_type(&self) -> &str {
        &self.related_type
    }

    async fn get(&self) -> ModelResult<RelatedRecords> {
        Err(ModelError::Relation("query timed out".to_string()))
    }
}

// ── Helpers ───────────────────────────────────────────────────────

pub fn attrs(pairs: &[(&str, serde_json::Value)]) -> Attributes {
    let mut map = Attributes::new();
    for (k, v) in pairs {
        map.insert((*k).to_string(), v.clone());
    }
    map
}
