//! Types shared by the critical path passes.

use crate::interner::TaskIdx;
use crate::models::DependencyType;

/// One side of a dependency, stored in an adjacency list.
///
/// In a predecessor list `task` is the predecessor; in a successor list it is the successor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub task: TaskIdx,
    pub dep_type: DependencyType,
    pub lag: i64,
}

/// Per-task timing, in whole days from the project baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskTiming {
    pub duration: i64,
    /// Earliest possible start time (from forward pass).
    pub earliest_start: i64,
    /// Earliest possible finish time (from forward pass).
    pub earliest_finish: i64,
    /// Latest allowable start time (from backward pass).
    pub latest_start: i64,
    /// Latest allowable finish time (from backward pass).
    pub latest_finish: i64,
    /// Slack = latest_start - earliest_start.
    pub slack: i64,
}

impl TaskTiming {
    pub fn is_critical(&self) -> bool {
        self.slack == 0
    }
}
