// src/task/dependency.rs

use std::collections::BTreeSet;

use crate::task::model::TaskId;

/// Immutable set of dependee ids owned by a task.
///
/// `add` and `remove` return a new set and leave `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    ids: BTreeSet<TaskId>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, dependee: TaskId) -> Self {
        let mut ids = self.ids.clone();
        ids.insert(dependee);
        Self { ids }
    }

    pub fn remove(&self, dependee: TaskId) -> Self {
        let mut ids = self.ids.clone();
        ids.remove(&dependee);
        Self { ids }
    }

    pub fn contains(&self, dependee: TaskId) -> bool {
        self.ids.contains(&dependee)
    }

    pub fn iter(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<TaskId> for DependencySet {
    fn from_iter<I: IntoIterator<Item = TaskId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
