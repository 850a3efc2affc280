// src/dag/urgency.rs

//! Due-date urgency propagation.
//!
//! A task is effectively due no later than the earliest due date among
//! itself and everything it transitively depends on.
//!
//! PRECONDITION: the graph must be acyclic. Every mutation that adds an edge
//! is gated by [`DependencyGraph::would_cycle`], which is what guarantees
//! this. The walk below still tracks the nodes it is expanding and returns
//! [`QuestlogError::DagCycle`] if it ever meets one of them again, rather
//! than looping.

use std::collections::{HashMap, HashSet};

use crate::dag::graph::{DependencyGraph, InvertedGraph};
use crate::errors::{QuestlogError, Result};
use crate::task::{DueDate, TaskId};

impl DependencyGraph {
    /// Earliest due date among `node` and all of its transitive dependees.
    ///
    /// `memo` caches results per node so shared sub-graphs are only walked
    /// once; it can be reused across calls against the same `inverted` graph.
    pub fn earliest_dependent_due_date(
        &self,
        node: TaskId,
        inverted: &InvertedGraph,
        memo: &mut HashMap<TaskId, DueDate>,
    ) -> Result<DueDate> {
        if let Some(date) = memo.get(&node) {
            return Ok(*date);
        }
        if !self.contains(node) {
            return Err(QuestlogError::TaskNotFound(node.to_string()));
        }

        // (node, expanded): a node is pushed once to expand its dependees and
        // once more to fold their results after they are all memoised.
        let mut stack: Vec<(TaskId, bool)> = vec![(node, false)];
        let mut in_progress: HashSet<TaskId> = HashSet::new();

        while let Some((id, expanded)) = stack.pop() {
            if memo.contains_key(&id) {
                continue;
            }

            let dependees = inverted.get(&id);

            if expanded {
                let mut earliest = self.due_date_of(id)?;
                for dep in dependees.into_iter().flatten() {
                    if let Some(date) = memo.get(dep) {
                        earliest = earliest.min(*date);
                    }
                }
                in_progress.remove(&id);
                memo.insert(id, earliest);
                continue;
            }

            if !in_progress.insert(id) {
                return Err(QuestlogError::DagCycle(format!(
                    "cycle detected while propagating due dates through task '{}'",
                    self.name_of(id)
                )));
            }

            stack.push((id, true));
            for dep in dependees.into_iter().flatten() {
                if !memo.contains_key(dep) {
                    stack.push((*dep, false));
                }
            }
        }

        memo.get(&node)
            .copied()
            .ok_or_else(|| QuestlogError::TaskNotFound(node.to_string()))
    }

    /// Convenience wrapper: builds the pruned inverted graph and a fresh memo.
    pub fn earliest_dependent_due_date_of(&self, node: TaskId) -> Result<DueDate> {
        let inverted = self.pruned_inverted_graph();
        let mut memo = HashMap::new();
        self.earliest_dependent_due_date(node, &inverted, &mut memo)
    }

    fn due_date_of(&self, id: TaskId) -> Result<DueDate> {
        self.nodes
            .get(&id)
            .map(|n| n.due_date)
            .ok_or_else(|| QuestlogError::DanglingReference(id.to_string()))
    }
}
