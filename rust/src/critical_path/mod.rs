//! Critical path method (CPM) scheduling.
//!
//! Pipeline, each stage pure over the task/dependency set of one run:
//! duration derivation and graph building, topological ordering (which also
//! detects cycles), forward and backward passes, slack extraction and
//! finally mapping day offsets onto calendar dates.

mod calculation;
mod dates;
mod duration;
mod graph;
mod scheduler;
mod topo;
mod types;

pub use calculation::{backward_pass, compute_slack, forward_pass, project_finish};
pub use dates::{compute_baseline, map_dates, offset_date};
pub use duration::derive_duration;
pub use graph::{DependencyGraph, ValidationError};
pub use scheduler::{apply, compute_schedule, schedule_tasks, ScheduleError};
pub use topo::{topological_order, CycleError};
pub use types::{Edge, TaskTiming};
