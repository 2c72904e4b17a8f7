//! Dense indexing of caller task identities.
//!
//! Maps caller-supplied task ids to contiguous integers so the passes can use
//! plain vectors instead of keyed maps.

use rustc_hash::FxHashMap;

use crate::models::TaskId;

/// Dense task index (u32 for compact adjacency lists).
pub type TaskIdx = u32;

/// Bidirectional mapping between task ids and dense indices.
///
/// Indices are issued in insertion order, starting at 0.
#[derive(Debug, Clone)]
pub struct TaskIndex {
    to_idx: FxHashMap<TaskId, TaskIdx>,
    ids: Vec<TaskId>,
}

impl TaskIndex {
    /// Create an empty index with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_idx: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            ids: Vec::with_capacity(capacity),
        }
    }

    /// Register a task id. Returns `None` if the id was already registered.
    pub fn insert(&mut self, id: TaskId) -> Option<TaskIdx> {
        if self.to_idx.contains_key(&id) {
            return None;
        }
        let idx = self.ids.len() as TaskIdx;
        self.ids.push(id);
        self.to_idx.insert(id, idx);
        Some(idx)
    }

    /// Get the dense index for a task id, if registered.
    #[inline]
    pub fn get(&self, id: TaskId) -> Option<TaskIdx> {
        self.to_idx.get(&id).copied()
    }

    /// Get the task id for a dense index issued by this index.
    #[inline]
    pub fn id(&self, idx: TaskIdx) -> TaskId {
        self.ids[idx as usize]
    }

    /// All registered ids in index order.
    pub fn ids(&self) -> &[TaskId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for TaskIndex {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_resolve() {
        let mut index = TaskIndex::with_capacity(4);

        let a = index.insert(42).unwrap();
        let b = index.insert(7).unwrap();

        assert_eq!((a, b), (0, 1));
        assert_eq!(index.insert(42), None); // duplicate
        assert_eq!(index.get(7), Some(1));
        assert_eq!(index.get(99), None);
        assert_eq!(index.id(a), 42);
        assert_eq!(index.ids(), &[42, 7]);
        assert_eq!(index.len(), 2);
    }
}
