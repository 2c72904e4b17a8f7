//! CPM scheduling pipeline: validation, ordering, passes and date mapping.

use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

use crate::config::{ConfigError, ScheduleConfig};
use crate::models::{Dependency, ScheduleEntry, ScheduleResult, Task, TaskId};
use crate::{log_debug, log_stages, log_summary};

use super::calculation::{backward_pass, compute_slack, forward_pass, project_finish};
use super::dates::{compute_baseline, map_dates, offset_date};
use super::duration::derive_duration;
use super::graph::{DependencyGraph, ValidationError};
use super::topo::{topological_order, CycleError};

/// Errors that abort a scheduling run. No task is modified when one occurs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid task data: {0}")]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    CycleDetected(#[from] CycleError),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("Task {task_id} is scheduled {offset} days from the baseline, outside the calendar range")]
    DateOutOfRange { task_id: TaskId, offset: i64 },
}

/// Compute the earliest-start schedule for `tasks` without modifying them.
///
/// Durations come from each task's current dates. The result maps every task to
/// its timings and the calendar dates it would be moved to by [`apply`].
pub fn compute_schedule(
    tasks: &[Task],
    dependencies: &[Dependency],
    config: &ScheduleConfig,
) -> Result<ScheduleResult, ScheduleError> {
    let verbosity = config.verbosity;
    let tie_break = config.tie_break()?;
    let rule = config.backward_rule()?;

    log_summary!(
        verbosity,
        "Scheduling {} tasks with {} dependencies",
        tasks.len(),
        dependencies.len()
    );

    let graph = DependencyGraph::build(tasks, dependencies)?;
    // Graph indices follow task list order
    let durations: Vec<i64> = tasks
        .iter()
        .map(|task| derive_duration(task.start, task.end))
        .collect();
    log_stages!(
        verbosity,
        "Graph built: {} tasks, {} edges",
        graph.len(),
        graph.edge_count()
    );

    let order = topological_order(&graph, tie_break)?;
    log_stages!(verbosity, "Topological order ({:?}) complete", tie_break);

    let mut timings = forward_pass(&graph, &order, &durations);
    let finish = project_finish(&timings);
    log_stages!(verbosity, "Forward pass complete, project finish = {}", finish);

    backward_pass(&graph, &order, &mut timings, finish, rule);
    let critical = compute_slack(&mut timings);
    log_stages!(
        verbosity,
        "Backward pass ({:?}) complete, {} critical tasks",
        rule,
        critical.len()
    );

    let baseline = compute_baseline(tasks, config.fallback_baseline());
    let mut entries: BTreeMap<TaskId, ScheduleEntry> = BTreeMap::new();
    for (task, timing) in tasks.iter().zip(&timings) {
        let (start_date, end_date) =
            map_dates(baseline, timing.earliest_start, timing.earliest_finish).map_err(
                |offset| ScheduleError::DateOutOfRange {
                    task_id: task.id,
                    offset,
                },
            )?;

        log_debug!(
            verbosity,
            "Task {}: dur={} es={} ef={} ls={} lf={} slack={} -> {}..{}",
            task.id,
            timing.duration,
            timing.earliest_start,
            timing.earliest_finish,
            timing.latest_start,
            timing.latest_finish,
            timing.slack,
            start_date,
            end_date
        );

        entries.insert(
            task.id,
            ScheduleEntry {
                task_id: task.id,
                duration: timing.duration,
                earliest_start: timing.earliest_start,
                earliest_finish: timing.earliest_finish,
                latest_start: timing.latest_start,
                latest_finish: timing.latest_finish,
                slack: timing.slack,
                is_critical: timing.is_critical(),
                start_date,
                end_date,
            },
        );
    }

    log_stages!(
        verbosity,
        "Dates mapped from baseline {}, {} entries",
        baseline,
        entries.len()
    );

    let critical_ids: BTreeSet<TaskId> = critical
        .iter()
        .map(|&idx| graph.index.id(idx))
        .collect();

    let (project_start, project_end) = if tasks.is_empty() {
        (None, None)
    } else {
        // Every entry mapped, so the latest end date is representable
        (Some(baseline), offset_date(baseline, finish - 1))
    };

    log_summary!(
        verbosity,
        "Project finish {} days from {} ({} critical of {} tasks)",
        finish,
        baseline,
        critical_ids.len(),
        tasks.len()
    );

    Ok(ScheduleResult {
        entries,
        project_finish: finish,
        critical_ids,
        baseline,
        project_start,
        project_end,
    })
}

/// Write each task's computed start and end dates back onto the task records.
///
/// Tasks missing from the result are left untouched.
pub fn apply(result: &ScheduleResult, tasks: &mut [Task]) {
    for task in tasks.iter_mut() {
        if let Some(entry) = result.entries.get(&task.id) {
            task.start = Some(entry.start_date);
            task.end = Some(entry.end_date);
        }
    }
}

/// Compute the schedule and, only if that succeeds, apply it to `tasks`.
pub fn schedule_tasks(
    tasks: &mut [Task],
    dependencies: &[Dependency],
    config: &ScheduleConfig,
) -> Result<ScheduleResult, ScheduleError> {
    let result = compute_schedule(tasks, dependencies, config)?;
    apply(&result, tasks);
    Ok(result)
}
