//! Dependency graph construction and referential validation.

use thiserror::Error;

use crate::interner::{TaskIdx, TaskIndex};
use crate::models::{Dependency, Task, TaskId};

use super::types::Edge;

/// Errors from validating the task and dependency records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "Dependency {predecessor_id} -> {successor_id} references unknown task {missing_id}"
    )]
    UnknownTask {
        successor_id: TaskId,
        predecessor_id: TaskId,
        missing_id: TaskId,
    },
    #[error("Duplicate task id: {0}")]
    DuplicateTask(TaskId),
}

/// Predecessor and successor adjacency over dense task indices.
///
/// Parallel edges between the same pair are kept; each is an independent constraint.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Task id <-> dense index mapping, in task list order.
    pub index: TaskIndex,
    /// Incoming edges, indexed by successor.
    pub predecessors: Vec<Vec<Edge>>,
    /// Outgoing edges, indexed by predecessor.
    pub successors: Vec<Vec<Edge>>,
}

impl DependencyGraph {
    /// Build the graph for one run.
    ///
    /// Task `i` in the slice receives dense index `i`. Every dependency is
    /// checked before any edge is added; the first dependency naming an
    /// unknown task (in input order) is reported.
    pub fn build(tasks: &[Task], dependencies: &[Dependency]) -> Result<Self, ValidationError> {
        let mut index = TaskIndex::with_capacity(tasks.len());
        for task in tasks {
            if index.insert(task.id).is_none() {
                return Err(ValidationError::DuplicateTask(task.id));
            }
        }

        let mut resolved: Vec<(TaskIdx, TaskIdx, &Dependency)> =
            Vec::with_capacity(dependencies.len());
        for dep in dependencies {
            let lookup = |id: TaskId| {
                index.get(id).ok_or(ValidationError::UnknownTask {
                    successor_id: dep.successor_id,
                    predecessor_id: dep.predecessor_id,
                    missing_id: id,
                })
            };
            let succ = lookup(dep.successor_id)?;
            let pred = lookup(dep.predecessor_id)?;
            resolved.push((succ, pred, dep));
        }

        let n = index.len();
        let mut predecessors: Vec<Vec<Edge>> = vec![Vec::new(); n];
        let mut successors: Vec<Vec<Edge>> = vec![Vec::new(); n];
        for (succ, pred, dep) in resolved {
            predecessors[succ as usize].push(Edge {
                task: pred,
                dep_type: dep.dep_type,
                lag: dep.lag,
            });
            successors[pred as usize].push(Edge {
                task: succ,
                dep_type: dep.dep_type,
                lag: dep.lag,
            });
        }

        Ok(Self {
            index,
            predecessors,
            successors,
        })
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of dependency edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }
}
