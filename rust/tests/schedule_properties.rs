//! Property tests for the CPM pipeline over random acyclic graphs.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use gantt_cpm::{
    compute_schedule, schedule_tasks, Dependency, DependencyType, ScheduleConfig,
    ScheduleError, ScheduleResult, Task, TaskId,
};

const TYPES: [DependencyType; 4] = [
    DependencyType::FinishToStart,
    DependencyType::StartToStart,
    DependencyType::FinishToFinish,
    DependencyType::StartToFinish,
];

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
}

/// Ids are assigned in descending order so that list order, ascending ids and
/// descending ids all give different ready-queue orders.
fn task_id(position: usize) -> TaskId {
    1000 - position as TaskId * 7
}

/// Tasks with optional dates: (start offset, span) where a negative span inverts the range.
fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec(prop::option::of((0i64..20, -3i64..10)), 1..12).prop_map(|dated| {
        dated
            .into_iter()
            .enumerate()
            .map(|(position, dates)| {
                let task = Task::new(task_id(position));
                match dates {
                    Some((offset, span)) => {
                        let start = base_date() + Duration::days(offset);
                        task.with_dates(Some(start), Some(start + Duration::days(span)))
                    }
                    None => task,
                }
            })
            .collect()
    })
}

/// Dependencies always point from a lower to a higher list position, so the graph is acyclic.
fn arb_graph() -> impl Strategy<Value = (Vec<Task>, Vec<Dependency>)> {
    arb_tasks().prop_flat_map(|tasks| {
        let n = tasks.len();
        let edges = prop::collection::vec((0..n, 0..n, 0usize..4, -3i64..6), 0..(n * 2));
        (Just(tasks), edges).prop_map(|(tasks, edges)| {
            let deps = edges
                .into_iter()
                .filter(|(a, b, _, _)| a != b)
                .map(|(a, b, kind, lag)| {
                    let (pred, succ) = (a.min(b), a.max(b));
                    Dependency::new(task_id(succ), task_id(pred), TYPES[kind], lag)
                })
                .collect();
            (tasks, deps)
        })
    })
}

fn config(tie_break: &str, backward_rule: &str) -> ScheduleConfig {
    ScheduleConfig {
        tie_break: tie_break.to_string(),
        backward_rule: backward_rule.to_string(),
        today: Some(base_date()),
        verbosity: 0,
    }
}

fn run(tasks: &[Task], deps: &[Dependency], tie_break: &str, rule: &str) -> ScheduleResult {
    compute_schedule(tasks, deps, &config(tie_break, rule)).unwrap()
}

proptest! {
    #[test]
    fn tie_break_does_not_change_schedule((tasks, deps) in arb_graph()) {
        for rule in ["standard", "legacy"] {
            let fifo = run(&tasks, &deps, "fifo", rule);
            prop_assert_eq!(&fifo, &run(&tasks, &deps, "id_asc", rule));
            prop_assert_eq!(&fifo, &run(&tasks, &deps, "id_desc", rule));
        }
    }

    #[test]
    fn timing_invariants_hold((tasks, deps) in arb_graph()) {
        let result = run(&tasks, &deps, "fifo", "standard");

        prop_assert_eq!(result.entries.len(), tasks.len());
        for entry in result.entries.values() {
            prop_assert!(entry.duration >= 1);
            prop_assert!(entry.earliest_start >= 0);
            prop_assert_eq!(entry.earliest_finish, entry.earliest_start + entry.duration);
            prop_assert_eq!(entry.latest_finish, entry.latest_start + entry.duration);
            prop_assert_eq!(entry.slack, entry.latest_start - entry.earliest_start);
            prop_assert!(entry.slack >= 0);
            prop_assert!(entry.latest_finish <= result.project_finish);
            prop_assert_eq!(entry.is_critical, result.critical_ids.contains(&entry.task_id));
        }

        let max_finish = result.entries.values().map(|e| e.earliest_finish).max().unwrap();
        prop_assert_eq!(result.project_finish, max_finish);
    }

    #[test]
    fn every_dependency_is_satisfied((tasks, deps) in arb_graph()) {
        let result = run(&tasks, &deps, "fifo", "standard");

        for dep in &deps {
            let pred = result.entry(dep.predecessor_id).unwrap();
            let succ = result.entry(dep.successor_id).unwrap();
            let satisfied = match dep.dep_type {
                DependencyType::FinishToStart => succ.earliest_start >= pred.earliest_finish + dep.lag,
                DependencyType::StartToStart => succ.earliest_start >= pred.earliest_start + dep.lag,
                DependencyType::FinishToFinish => succ.earliest_finish >= pred.earliest_finish + dep.lag,
                DependencyType::StartToFinish => succ.earliest_finish >= pred.earliest_start + dep.lag,
            };
            prop_assert!(satisfied, "violated {:?}", dep);
        }
    }

    #[test]
    fn latest_schedule_satisfies_every_dependency((tasks, deps) in arb_graph()) {
        let result = run(&tasks, &deps, "fifo", "standard");

        for dep in &deps {
            let pred = result.entry(dep.predecessor_id).unwrap();
            let succ = result.entry(dep.successor_id).unwrap();
            let satisfied = match dep.dep_type {
                DependencyType::FinishToStart => succ.latest_start >= pred.latest_finish + dep.lag,
                DependencyType::StartToStart => succ.latest_start >= pred.latest_start + dep.lag,
                DependencyType::FinishToFinish => succ.latest_finish >= pred.latest_finish + dep.lag,
                DependencyType::StartToFinish => succ.latest_finish >= pred.latest_start + dep.lag,
            };
            prop_assert!(satisfied, "violated {:?}", dep);
        }
    }

    #[test]
    fn at_least_one_task_is_critical((tasks, deps) in arb_graph()) {
        let result = run(&tasks, &deps, "fifo", "standard");
        prop_assert!(!result.critical_ids.is_empty());
    }

    #[test]
    fn calendar_dates_follow_offsets((tasks, deps) in arb_graph()) {
        let result = run(&tasks, &deps, "id_asc", "standard");

        for entry in result.entries.values() {
            prop_assert_eq!(
                entry.start_date,
                result.baseline + Duration::days(entry.earliest_start)
            );
            prop_assert_eq!(
                entry.end_date,
                result.baseline + Duration::days(entry.earliest_finish - 1)
            );
        }
    }

    #[test]
    fn cycle_rejected_without_mutation(
        (tasks, mut deps) in arb_graph(),
        back_lag in -3i64..6,
    ) {
        prop_assume!(tasks.len() >= 2);
        // Close a loop from the last task back to the first
        let first = tasks[0].id;
        let last = tasks[tasks.len() - 1].id;
        deps.push(Dependency::finish_to_start(last, first));
        deps.push(Dependency::new(first, last, DependencyType::FinishToStart, back_lag));

        let mut updated = tasks.clone();
        let err = schedule_tasks(&mut updated, &deps, &config("fifo", "standard")).unwrap_err();

        match err {
            ScheduleError::CycleDetected(cycle) => {
                prop_assert!(cycle.task_ids.contains(&first));
                prop_assert!(cycle.task_ids.contains(&last));
            }
            other => prop_assert!(false, "unexpected error {:?}", other),
        }
        prop_assert_eq!(updated, tasks);
    }
}
