//! Critical Path Method scheduling engine.
//!
//! Given tasks with optional start/end dates and typed precedence dependencies
//! (FS/SS/FF/SF with signed lag), computes earliest/latest start and finish,
//! slack, the critical task set and an earliest-start calendar schedule.
//! Usable as a Rust library and as the `gantt_cpm` Python extension module.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod config;
pub mod critical_path;
pub mod interner;
pub mod logging;
mod models;

pub use config::{BackwardRule, ConfigError, ScheduleConfig, TieBreak};
pub use critical_path::{
    apply, compute_schedule, schedule_tasks, CycleError, ScheduleError, ValidationError,
};
pub use models::{Dependency, DependencyType, ScheduleEntry, ScheduleResult, Task, TaskId};

/// Python exception types raised by the module.
mod exceptions {
    pyo3::create_exception!(
        gantt_cpm,
        ValidationError,
        pyo3::exceptions::PyValueError,
        "A dependency references an unknown task, or a task id is duplicated."
    );
    pyo3::create_exception!(
        gantt_cpm,
        CycleDetectedError,
        pyo3::exceptions::PyValueError,
        "The dependency graph contains a cycle."
    );
}

fn to_py_err(err: ScheduleError) -> PyErr {
    match err {
        ScheduleError::Validation(_) => exceptions::ValidationError::new_err(err.to_string()),
        ScheduleError::CycleDetected(_) => {
            exceptions::CycleDetectedError::new_err(err.to_string())
        }
        ScheduleError::InvalidConfig(_) | ScheduleError::DateOutOfRange { .. } => {
            pyo3::exceptions::PyValueError::new_err(err.to_string())
        }
    }
}

/// Compute the CPM schedule without modifying the tasks.
///
/// # Arguments
/// * `tasks` - List of tasks; only id, start and end are used
/// * `dependencies` - List of precedence dependencies between the tasks
/// * `config` - Scheduling configuration (defaults if omitted)
///
/// # Returns
/// * ScheduleResult with per-task timings, project finish and critical ids
///
/// # Raises
/// * ValidationError if a dependency references an unknown task
/// * CycleDetectedError if the dependencies form a cycle
/// * ValueError for an invalid configuration
#[pyfunction]
#[pyo3(name = "compute_schedule", signature = (tasks, dependencies, config=None))]
fn py_compute_schedule(
    tasks: Vec<Task>,
    dependencies: Vec<Dependency>,
    config: Option<ScheduleConfig>,
) -> PyResult<ScheduleResult> {
    let config = config.unwrap_or_default();
    compute_schedule(&tasks, &dependencies, &config).map_err(to_py_err)
}

/// Compute the CPM schedule and return it with updated copies of the tasks.
///
/// The returned tasks carry the computed start/end dates; persisting them is
/// up to the caller. On error nothing is returned, so no partial update exists.
///
/// # Raises
/// * ValidationError if a dependency references an unknown task
/// * CycleDetectedError if the dependencies form a cycle
/// * ValueError for an invalid configuration
#[pyfunction]
#[pyo3(signature = (tasks, dependencies, config=None))]
fn run_schedule(
    mut tasks: Vec<Task>,
    dependencies: Vec<Dependency>,
    config: Option<ScheduleConfig>,
) -> PyResult<(ScheduleResult, Vec<Task>)> {
    let config = config.unwrap_or_default();
    let result = schedule_tasks(&mut tasks, &dependencies, &config).map_err(to_py_err)?;
    Ok((result, tasks))
}

/// The gantt_cpm Python module.
#[pymodule]
fn gantt_cpm(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<Task>()?;
    m.add_class::<Dependency>()?;
    m.add_class::<ScheduleEntry>()?;
    m.add_class::<ScheduleResult>()?;
    m.add_class::<ScheduleConfig>()?;

    // Errors
    let py = m.py();
    m.add(
        "ValidationError",
        py.get_type_bound::<exceptions::ValidationError>(),
    )?;
    m.add(
        "CycleDetectedError",
        py.get_type_bound::<exceptions::CycleDetectedError>(),
    )?;

    // Algorithms
    m.add_function(wrap_pyfunction!(py_compute_schedule, m)?)?;
    m.add_function(wrap_pyfunction!(run_schedule, m)?)?;

    Ok(())
}
