//! Core data types for the CPM engine.

use chrono::NaiveDate;
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// Note: We use std BTreeMap/BTreeSet here for PyO3 interface compatibility and stable output order

/// Caller-supplied task identity (the task store's integer key).
pub type TaskId = i64;

/// Precedence relation between a predecessor and a successor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DependencyType {
    /// Successor starts after predecessor finishes.
    #[default]
    FinishToStart,
    /// Successor starts after predecessor starts.
    StartToStart,
    /// Successor finishes after predecessor finishes.
    FinishToFinish,
    /// Successor finishes after predecessor starts.
    StartToFinish,
}

impl DependencyType {
    /// Parse a two-letter code. Unrecognized codes are treated as finish-to-start.
    pub fn parse(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "SS" => Self::StartToStart,
            "FF" => Self::FinishToFinish,
            "SF" => Self::StartToFinish,
            _ => Self::FinishToStart,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FinishToStart => "FS",
            Self::StartToStart => "SS",
            Self::FinishToFinish => "FF",
            Self::StartToFinish => "SF",
        }
    }
}

impl fmt::Display for DependencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for DependencyType {
    fn from(code: String) -> Self {
        Self::parse(&code)
    }
}

impl From<DependencyType> for String {
    fn from(dep_type: DependencyType) -> Self {
        dep_type.as_str().to_string()
    }
}

/// A task record.
///
/// Only `id`, `start` and `end` matter to the engine. The remaining fields are
/// payload from the task store and are carried through untouched.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[pyo3(get, set)]
    #[serde(rename = "TaskID")]
    pub id: TaskId,
    #[pyo3(get, set)]
    #[serde(rename = "TaskName", default)]
    pub name: String,
    #[pyo3(get, set)]
    #[serde(rename = "Start", default)]
    pub start: Option<NaiveDate>,
    #[pyo3(get, set)]
    #[serde(rename = "End", default)]
    pub end: Option<NaiveDate>,
    #[pyo3(get, set)]
    #[serde(rename = "ProjectID", default)]
    pub project_id: Option<String>,
    #[pyo3(get, set)]
    #[serde(rename = "ParentTaskID", default)]
    pub parent_id: Option<TaskId>,
    #[pyo3(get, set)]
    #[serde(rename = "Assignee", default)]
    pub assignee: Option<String>,
    #[pyo3(get, set)]
    #[serde(rename = "NoteID", default)]
    pub note_id: Option<String>,
}

impl Task {
    /// Create an unnamed, undated task.
    pub fn new(id: TaskId) -> Self {
        Self {
            id,
            name: String::new(),
            start: None,
            end: None,
            project_id: None,
            parent_id: None,
            assignee: None,
            note_id: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start = start;
        self.end = end;
        self
    }
}

#[pymethods]
impl Task {
    #[new]
    #[pyo3(signature = (
        id,
        name=String::new(),
        start=None,
        end=None,
        project_id=None,
        parent_id=None,
        assignee=None,
        note_id=None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn py_new(
        id: TaskId,
        name: String,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        project_id: Option<String>,
        parent_id: Option<TaskId>,
        assignee: Option<String>,
        note_id: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            start,
            end,
            project_id,
            parent_id,
            assignee,
            note_id,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Task(id={}, name={:?}, start={:?}, end={:?})",
            self.id, self.name, self.start, self.end
        )
    }
}

/// A precedence constraint: `successor_id` depends on `predecessor_id`.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    #[pyo3(get, set)]
    pub successor_id: TaskId,
    #[pyo3(get, set)]
    pub predecessor_id: TaskId,
    #[serde(rename = "type", default)]
    pub dep_type: DependencyType,
    /// Signed day offset; positive delays the successor, negative allows overlap.
    #[pyo3(get, set)]
    #[serde(default)]
    pub lag: i64,
}

impl Dependency {
    pub fn new(
        successor_id: TaskId,
        predecessor_id: TaskId,
        dep_type: DependencyType,
        lag: i64,
    ) -> Self {
        Self {
            successor_id,
            predecessor_id,
            dep_type,
            lag,
        }
    }

    /// Plain finish-to-start dependency without lag.
    pub fn finish_to_start(successor_id: TaskId, predecessor_id: TaskId) -> Self {
        Self::new(successor_id, predecessor_id, DependencyType::FinishToStart, 0)
    }
}

#[pymethods]
impl Dependency {
    #[new]
    #[pyo3(signature = (successor_id, predecessor_id, dep_type="FS", lag=0))]
    fn py_new(successor_id: TaskId, predecessor_id: TaskId, dep_type: &str, lag: i64) -> Self {
        Self::new(
            successor_id,
            predecessor_id,
            DependencyType::parse(dep_type),
            lag,
        )
    }

    #[getter(dep_type)]
    fn get_dep_type(&self) -> &'static str {
        self.dep_type.as_str()
    }

    #[setter(dep_type)]
    fn set_dep_type(&mut self, code: &str) {
        self.dep_type = DependencyType::parse(code);
    }

    fn __repr__(&self) -> String {
        format!(
            "Dependency(successor_id={}, predecessor_id={}, dep_type={}, lag={})",
            self.successor_id, self.predecessor_id, self.dep_type, self.lag
        )
    }
}

/// Computed timing for one task. All offsets are days from the baseline.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[pyo3(get)]
    pub task_id: TaskId,
    #[pyo3(get)]
    pub duration: i64,
    #[pyo3(get)]
    pub earliest_start: i64,
    #[pyo3(get)]
    pub earliest_finish: i64,
    #[pyo3(get)]
    pub latest_start: i64,
    #[pyo3(get)]
    pub latest_finish: i64,
    #[pyo3(get)]
    pub slack: i64,
    #[pyo3(get)]
    pub is_critical: bool,
    #[pyo3(get)]
    pub start_date: NaiveDate,
    #[pyo3(get)]
    pub end_date: NaiveDate,
}

#[pymethods]
impl ScheduleEntry {
    fn __repr__(&self) -> String {
        format!(
            "ScheduleEntry(task_id={}, es={}, ef={}, ls={}, lf={}, slack={})",
            self.task_id,
            self.earliest_start,
            self.earliest_finish,
            self.latest_start,
            self.latest_finish,
            self.slack
        )
    }
}

/// Output of one scheduling run.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    #[pyo3(get)]
    pub entries: BTreeMap<TaskId, ScheduleEntry>,
    /// Maximum earliest finish over all tasks; 0 for an empty task set.
    #[pyo3(get)]
    pub project_finish: i64,
    #[pyo3(get)]
    pub critical_ids: BTreeSet<TaskId>,
    /// Calendar date of day offset 0.
    #[pyo3(get)]
    pub baseline: NaiveDate,
    #[pyo3(get)]
    pub project_start: Option<NaiveDate>,
    #[pyo3(get)]
    pub project_end: Option<NaiveDate>,
}

impl ScheduleResult {
    pub fn entry(&self, task_id: TaskId) -> Option<&ScheduleEntry> {
        self.entries.get(&task_id)
    }

    pub fn is_critical(&self, task_id: TaskId) -> bool {
        self.critical_ids.contains(&task_id)
    }
}

#[pymethods]
impl ScheduleResult {
    fn __repr__(&self) -> String {
        format!(
            "ScheduleResult(tasks={}, project_finish={}, critical={})",
            self.entries.len(),
            self.project_finish,
            self.critical_ids.len()
        )
    }
}
