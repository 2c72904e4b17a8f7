//! Critical path calculation using forward and backward passes.
//!
//! Every function here works on vectors indexed by dense task index and takes
//! the topological order produced by [`super::topo::topological_order`].

use crate::config::BackwardRule;
use crate::interner::TaskIdx;
use crate::models::DependencyType;

use super::graph::DependencyGraph;
use super::types::{Edge, TaskTiming};

/// Earliest start a single incoming dependency allows for a task of `duration`.
fn earliest_start_bound(edge: &Edge, pred: &TaskTiming, duration: i64) -> i64 {
    match edge.dep_type {
        DependencyType::FinishToStart => pred.earliest_finish.saturating_add(edge.lag),
        DependencyType::StartToStart => pred.earliest_start.saturating_add(edge.lag),
        DependencyType::FinishToFinish => pred
            .earliest_finish
            .saturating_add(edge.lag)
            .saturating_sub(duration),
        DependencyType::StartToFinish => pred
            .earliest_start
            .saturating_add(edge.lag)
            .saturating_sub(duration),
    }
}

/// Latest finish a single outgoing dependency allows for a task of `duration`.
fn latest_finish_bound(edge: &Edge, succ: &TaskTiming, duration: i64, rule: BackwardRule) -> i64 {
    match (edge.dep_type, rule) {
        (DependencyType::FinishToStart, _) => succ.latest_start.saturating_sub(edge.lag),
        (DependencyType::FinishToFinish, _) => succ.latest_finish.saturating_sub(edge.lag),
        (DependencyType::StartToStart, BackwardRule::Standard) => succ
            .latest_start
            .saturating_sub(edge.lag)
            .saturating_add(duration),
        (DependencyType::StartToFinish, BackwardRule::Standard) => succ
            .latest_finish
            .saturating_sub(edge.lag)
            .saturating_add(duration),
        (DependencyType::StartToStart, BackwardRule::Legacy) => {
            succ.earliest_start.saturating_sub(edge.lag)
        }
        (DependencyType::StartToFinish, BackwardRule::Legacy) => succ
            .earliest_start
            .saturating_sub(edge.lag)
            .saturating_add(duration),
    }
}

/// Forward pass: compute earliest start/finish for every task.
///
/// A task starts at the latest bound any incoming dependency imposes, never before day 0.
pub fn forward_pass(
    graph: &DependencyGraph,
    order: &[TaskIdx],
    durations: &[i64],
) -> Vec<TaskTiming> {
    let mut timings: Vec<TaskTiming> = durations
        .iter()
        .map(|&duration| TaskTiming {
            duration,
            ..TaskTiming::default()
        })
        .collect();

    for &task in order {
        let idx = task as usize;
        let duration = durations[idx];

        let earliest_start = graph.predecessors[idx]
            .iter()
            .map(|edge| earliest_start_bound(edge, &timings[edge.task as usize], duration))
            .fold(0, i64::max);

        let timing = &mut timings[idx];
        timing.earliest_start = earliest_start;
        timing.earliest_finish = earliest_start.saturating_add(duration);
    }

    timings
}

/// Project finish: the latest earliest-finish of any task, 0 when there are none.
pub fn project_finish(timings: &[TaskTiming]) -> i64 {
    timings
        .iter()
        .map(|timing| timing.earliest_finish)
        .max()
        .unwrap_or(0)
}

/// Backward pass: compute latest start/finish in reverse topological order.
///
/// Every task starts bounded by `finish`; tasks without successors keep that bound.
pub fn backward_pass(
    graph: &DependencyGraph,
    order: &[TaskIdx],
    timings: &mut [TaskTiming],
    finish: i64,
    rule: BackwardRule,
) {
    for timing in timings.iter_mut() {
        timing.latest_finish = finish;
        timing.latest_start = finish.saturating_sub(timing.duration);
    }

    for &task in order.iter().rev() {
        let idx = task as usize;
        let duration = timings[idx].duration;

        let latest_finish = graph.successors[idx]
            .iter()
            .map(|edge| latest_finish_bound(edge, &timings[edge.task as usize], duration, rule))
            .fold(timings[idx].latest_finish, i64::min);

        let timing = &mut timings[idx];
        timing.latest_finish = latest_finish;
        timing.latest_start = latest_finish.saturating_sub(duration);
    }
}

/// Fill in slack and return the critical (zero-slack) tasks in index order.
pub fn compute_slack(timings: &mut [TaskTiming]) -> Vec<TaskIdx> {
    let mut critical = Vec::new();
    for (idx, timing) in timings.iter_mut().enumerate() {
        timing.slack = timing.latest_start.saturating_sub(timing.earliest_start);
        if timing.is_critical() {
            critical.push(idx as TaskIdx);
        }
    }
    critical
}
