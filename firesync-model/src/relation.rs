use crate::collection::SyncCollection;
use crate::error::ModelResult;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Filtering closure applied to a relation's query accessor.
///
/// Returning `None` suppresses the cascade for that relation — the
/// replicator skips it without error.
pub type RelationResolver =
    Arc<dyn Fn(Arc<dyn RelationQuery>) -> Option<Arc<dyn RelationQuery>> + Send + Sync>;

/// Declares how the cascade discovers related entities.
#[derive(Clone)]
pub enum RelationSpec {
    /// Resolve via the entity's accessor for the named relation and
    /// materialize it as-is.
    Named(String),
    /// Resolve the named relation's accessor, then let the closure
    /// filter or replace the query before materializing.
    Dynamic {
        name: String,
        resolver: RelationResolver,
    },
}

impl RelationSpec {
    /// A plain named relation.
    pub fn named(name: impl Into<String>) -> Self {
        RelationSpec::Named(name.into())
    }

    /// A relation with a filtering resolver.
    pub fn dynamic<F>(name: impl Into<String>, resolver: F) -> Self
    where
        F: Fn(Arc<dyn RelationQuery>) -> Option<Arc<dyn RelationQuery>> + Send + Sync + 'static,
    {
        RelationSpec::Dynamic {
            name: name.into(),
            resolver: Arc::new(resolver),
        }
    }

    /// The relation name this spec resolves through.
    pub fn name(&self) -> &str {
        match self {
            RelationSpec::Named(name) => name,
            RelationSpec::Dynamic { name, .. } => name,
        }
    }
}

impl fmt::Debug for RelationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationSpec::Named(name) => f.debug_tuple("Named").field(name).finish(),
            RelationSpec::Dynamic { name, .. } => {
                f.debug_struct("Dynamic").field("name", name).finish_non_exhaustive()
            }
        }
    }
}

/// Query accessor for a declared relation.
///
/// Implemented by the host ORM; stands in for the relation's query
/// builder. `get` materializes the related records, `related_type`
/// names the target entity type for diagnostics.
#[async_trait]
pub trait RelationQuery: Send + Sync {
    /// Name of the related entity type (used in mismatch errors).
    fn related_type(&self) -> &str;

    /// Materializes the relation.
    async fn get(&self) -> ModelResult<RelatedRecords>;
}

/// The materialized value of a relation.
#[derive(Clone)]
pub enum RelatedRecords {
    /// Records arrived in the replication-aware collection wrapper and
    /// can be bulk-synced.
    Synced(SyncCollection),
    /// Records materialized without sync capability. Carries the row
    /// count for diagnostics only.
    Plain(usize),
}

impl RelatedRecords {
    /// Whether the records can be bulk-synced.
    #[must_use]
    pub fn is_synced(&self) -> bool {
        matches!(self, RelatedRecords::Synced(_))
    }
}

impl fmt::Debug for RelatedRecords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelatedRecords::Synced(c) => write!(f, "Synced({} members)", c.len()),
            RelatedRecords::Plain(n) => write!(f, "Plain({n} rows)"),
        }
    }
}
