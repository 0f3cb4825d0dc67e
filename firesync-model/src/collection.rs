use crate::entity::SyncEntity;
use std::sync::Arc;

/// Replication-aware collection wrapper.
///
/// The cascade requires materialized relations to arrive in this
/// wrapper; members are bulk-synced in insertion order.
#[derive(Clone, Default)]
pub struct SyncCollection {
    members: Vec<Arc<dyn SyncEntity>>,
}

impl SyncCollection {
    /// An empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a member, preserving insertion order.
    pub fn push(&mut self, entity: Arc<dyn SyncEntity>) {
        self.members.push(entity);
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the collection has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn SyncEntity>> {
        self.members.iter()
    }
}

impl From<Vec<Arc<dyn SyncEntity>>> for SyncCollection {
    fn from(members: Vec<Arc<dyn SyncEntity>>) -> Self {
        Self { members }
    }
}

impl FromIterator<Arc<dyn SyncEntity>> for SyncCollection {
    fn from_iter<I: IntoIterator<Item = Arc<dyn SyncEntity>>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SyncCollection {
    type Item = &'a Arc<dyn SyncEntity>;
    type IntoIter = std::slice::Iter<'a, Arc<dyn SyncEntity>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
