//! Topological ordering (Kahn's algorithm) and cycle detection.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use thiserror::Error;

use crate::config::TieBreak;
use crate::interner::TaskIdx;
use crate::models::TaskId;

use super::graph::DependencyGraph;

/// The dependency graph is not acyclic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Circular dependency detected among tasks {task_ids:?}")]
pub struct CycleError {
    /// Tasks on a cycle or on a path between cycles, sorted by id.
    pub task_ids: Vec<TaskId>,
}

/// Ready set of tasks whose predecessors have all been ordered.
enum ReadyQueue {
    Fifo(VecDeque<TaskIdx>),
    Ascending(BinaryHeap<Reverse<(TaskId, TaskIdx)>>),
    Descending(BinaryHeap<(TaskId, TaskIdx)>),
}

impl ReadyQueue {
    fn new(tie_break: TieBreak) -> Self {
        match tie_break {
            TieBreak::Fifo => Self::Fifo(VecDeque::new()),
            TieBreak::IdAscending => Self::Ascending(BinaryHeap::new()),
            TieBreak::IdDescending => Self::Descending(BinaryHeap::new()),
        }
    }

    fn push(&mut self, idx: TaskIdx, id: TaskId) {
        match self {
            Self::Fifo(queue) => queue.push_back(idx),
            Self::Ascending(heap) => heap.push(Reverse((id, idx))),
            Self::Descending(heap) => heap.push((id, idx)),
        }
    }

    fn pop(&mut self) -> Option<TaskIdx> {
        match self {
            Self::Fifo(queue) => queue.pop_front(),
            Self::Ascending(heap) => heap.pop().map(|Reverse((_, idx))| idx),
            Self::Descending(heap) => heap.pop().map(|(_, idx)| idx),
        }
    }
}

/// Order tasks so every predecessor precedes its successors.
///
/// In-degree counts edges, so parallel edges each hold a task back until released.
/// If some tasks can never be released the graph has a cycle and nothing is returned.
pub fn topological_order(
    graph: &DependencyGraph,
    tie_break: TieBreak,
) -> Result<Vec<TaskIdx>, CycleError> {
    let n = graph.len();
    let mut in_degree: Vec<usize> = graph.predecessors.iter().map(Vec::len).collect();

    let mut ready = ReadyQueue::new(tie_break);
    for (idx, &degree) in in_degree.iter().enumerate() {
        if degree == 0 {
            let idx = idx as TaskIdx;
            ready.push(idx, graph.index.id(idx));
        }
    }

    let mut order: Vec<TaskIdx> = Vec::with_capacity(n);
    while let Some(idx) = ready.pop() {
        order.push(idx);

        for edge in &graph.successors[idx as usize] {
            let degree = &mut in_degree[edge.task as usize];
            *degree -= 1;
            if *degree == 0 {
                ready.push(edge.task, graph.index.id(edge.task));
            }
        }
    }

    if order.len() != n {
        return Err(CycleError {
            task_ids: cycle_members(graph, &in_degree),
        });
    }

    Ok(order)
}

/// Narrow the tasks Kahn's algorithm could not release down to those that lead into a cycle.
///
/// Unreleased tasks are all downstream of some cycle. Peeling off those with no
/// unreleased successors (repeatedly) drops the tails hanging off a cycle.
fn cycle_members(graph: &DependencyGraph, in_degree: &[usize]) -> Vec<TaskId> {
    let n = graph.len();
    let mut remaining: Vec<bool> = in_degree.iter().map(|&degree| degree > 0).collect();

    let mut out_degree: Vec<usize> = vec![0; n];
    let mut queue: VecDeque<usize> = VecDeque::new();
    for idx in 0..n {
        if !remaining[idx] {
            continue;
        }
        out_degree[idx] = graph.successors[idx]
            .iter()
            .filter(|edge| remaining[edge.task as usize])
            .count();
        if out_degree[idx] == 0 {
            queue.push_back(idx);
        }
    }

    while let Some(idx) = queue.pop_front() {
        remaining[idx] = false;
        for edge in &graph.predecessors[idx] {
            let pred = edge.task as usize;
            if !remaining[pred] || out_degree[pred] == 0 {
                continue;
            }
            out_degree[pred] -= 1;
            if out_degree[pred] == 0 {
                queue.push_back(pred);
            }
        }
    }

    let mut task_ids: Vec<TaskId> = graph
        .index
        .ids()
        .iter()
        .zip(&remaining)
        .filter(|(_, &still_remaining)| still_remaining)
        .map(|(&id, _)| id)
        .collect();
    task_ids.sort_unstable();
    task_ids
}
