// src/dag/graph.rs

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{debug, warn};

use crate::errors::{QuestlogError, Result};
use crate::task::{DueDate, Task, TaskId};

/// Each node mapped to the dependees it has inside the snapshot.
pub type InvertedGraph = HashMap<TaskId, BTreeSet<TaskId>>;

/// Internal node structure: stores immediate deps and dependants.
#[derive(Debug, Clone)]
pub(crate) struct GraphNode {
    pub(crate) name: String,
    pub(crate) due_date: DueDate,
    /// Direct dependees, as referenced by the task. May include ids that are
    /// not part of the snapshot.
    pub(crate) deps: Vec<TaskId>,
    /// Direct dependants present in the snapshot.
    pub(crate) dependants: Vec<TaskId>,
}

/// Dependency graph built from one snapshot of tasks.
///
/// The graph is cheap to build and is meant to be thrown away after the
/// query; it is never the source of truth. Dependees that are missing from
/// the snapshot are not validated here: they stay as edge targets but never
/// become nodes.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    pub(crate) nodes: HashMap<TaskId, GraphNode>,
    /// Node ids in input order; used to break ties deterministically.
    order: Vec<TaskId>,
}

impl DependencyGraph {
    /// Build a graph from a snapshot of distinct tasks.
    pub fn from_tasks<'a, I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut nodes: HashMap<TaskId, GraphNode> = HashMap::new();
        let mut order = Vec::new();

        // First pass: create nodes with their dependency lists.
        for task in tasks {
            let node = GraphNode {
                name: task.name().to_string(),
                due_date: task.due_date(),
                deps: task.dependencies().iter().collect(),
                dependants: Vec::new(),
            };
            if nodes.insert(task.id(), node).is_none() {
                order.push(task.id());
            } else {
                warn!(task = %task.name(), "task id appears twice in snapshot; keeping the last one");
            }
        }

        // Second pass: populate dependants based on deps.
        for id in order.iter() {
            let deps = nodes.get(id).map(|n| n.deps.clone()).unwrap_or_default();
            for dep in deps {
                if let Some(dep_node) = nodes.get_mut(&dep) {
                    dep_node.dependants.push(*id);
                }
            }
        }

        Self { nodes, order }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Node ids in input order.
    pub fn task_ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.order.iter().copied()
    }

    /// Immediate dependees of a node, including ones missing from the snapshot.
    pub fn dependencies_of(&self, id: TaskId) -> &[TaskId] {
        self.nodes
            .get(&id)
            .map(|n| n.deps.as_slice())
            .unwrap_or(&[])
    }

    /// Immediate dependants of a node.
    pub fn dependants_of(&self, id: TaskId) -> &[TaskId] {
        self.nodes
            .get(&id)
            .map(|n| n.dependants.as_slice())
            .unwrap_or(&[])
    }

    /// Nodes with no dependees inside the snapshot, in input order.
    pub fn roots(&self) -> Vec<TaskId> {
        self.order
            .iter()
            .copied()
            .filter(|id| !self.dependencies_of(*id).iter().any(|d| self.contains(*d)))
            .collect()
    }

    pub(crate) fn name_of(&self, id: TaskId) -> String {
        self.nodes
            .get(&id)
            .map(|n| n.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Whether `candidate`, carrying a proposed dependency set, would close a
    /// cycle.
    ///
    /// The candidate's own edges replace whatever the snapshot holds for the
    /// same id. Traversal starts from the candidate's dependees and reports a
    /// cycle as soon as the candidate's id is reached again, so only the part
    /// of the graph reachable from the candidate is visited.
    pub fn would_cycle(&self, candidate: &Task) -> bool {
        let target = candidate.id();
        let mut stack: Vec<TaskId> = candidate.dependencies().iter().collect();
        let mut visited: HashSet<TaskId> = HashSet::new();

        while let Some(id) = stack.pop() {
            if id == target {
                debug!(task = %candidate.name(), "proposed dependencies lead back to the task");
                return true;
            }
            if !visited.insert(id) {
                continue;
            }
            stack.extend(self.dependencies_of(id).iter().copied());
        }

        false
    }

    /// Order every node so that each dependee precedes its dependants.
    ///
    /// Kahn's algorithm; among nodes that are ready at the same time the one
    /// that came first in the input wins. The graph must be acyclic; if it is
    /// not, a [`QuestlogError::DagCycle`] naming a task on the cycle is
    /// returned instead of a partial order.
    pub fn topological_order(&self) -> Result<Vec<TaskId>> {
        let position: HashMap<TaskId, usize> = self
            .order
            .iter()
            .enumerate()
            .map(|(i, id)| (*id, i))
            .collect();

        let mut in_degree: Vec<usize> = self
            .order
            .iter()
            .map(|id| {
                self.dependencies_of(*id)
                    .iter()
                    .filter(|dep| self.contains(**dep))
                    .count()
            })
            .collect();

        let mut ready: BTreeSet<usize> = in_degree
            .iter()
            .enumerate()
            .filter(|(_, degree)| **degree == 0)
            .map(|(i, _)| i)
            .collect();

        let mut sorted = Vec::with_capacity(self.order.len());

        while let Some(i) = ready.pop_first() {
            let id = self.order[i];
            sorted.push(id);

            for dependant in self.dependants_of(id) {
                if let Some(&j) = position.get(dependant) {
                    in_degree[j] -= 1;
                    if in_degree[j] == 0 {
                        ready.insert(j);
                    }
                }
            }
        }

        if sorted.len() != self.order.len() {
            let stuck = in_degree
                .iter()
                .position(|degree| *degree > 0)
                .map(|i| self.name_of(self.order[i]))
                .unwrap_or_default();
            return Err(QuestlogError::DagCycle(format!(
                "cycle detected in dependency graph involving task '{}'",
                stuck
            )));
        }

        Ok(sorted)
    }

    /// Map each node to the dependees it has inside the snapshot.
    ///
    /// Edges pointing at ids that are not nodes are dropped rather than
    /// reported, so stale references never fail the query.
    pub fn pruned_inverted_graph(&self) -> InvertedGraph {
        self.order
            .iter()
            .map(|id| {
                let deps = self
                    .dependencies_of(*id)
                    .iter()
                    .copied()
                    .filter(|dep| {
                        let present = self.contains(*dep);
                        if !present {
                            debug!(
                                task = %self.name_of(*id),
                                dependee = %dep,
                                "dropping dangling dependency reference"
                            );
                        }
                        present
                    })
                    .collect();
                (*id, deps)
            })
            .collect()
    }
}
