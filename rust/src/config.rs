//! Configuration types for the CPM engine.

use chrono::NaiveDate;
use pyo3::prelude::*;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing configuration values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown tie-break strategy: {0} (expected fifo, id_asc or id_desc)")]
    UnknownTieBreak(String),
    #[error("Unknown backward rule: {0} (expected standard or legacy)")]
    UnknownBackwardRule(String),
}

/// Order in which simultaneously-ready tasks leave the topological queue.
///
/// Computed timings never depend on this; it only changes the visiting order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Input order of the task list.
    #[default]
    Fifo,
    IdAscending,
    IdDescending,
}

impl FromStr for TieBreak {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fifo" => Ok(Self::Fifo),
            "id_asc" => Ok(Self::IdAscending),
            "id_desc" => Ok(Self::IdDescending),
            other => Err(ConfigError::UnknownTieBreak(other.to_string())),
        }
    }
}

/// Latest-finish bounds used by the backward pass for non-FS dependencies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackwardRule {
    /// Textbook CPM bounds. Guarantees non-negative slack.
    #[default]
    Standard,
    /// SS/SF bounded by the successor's earliest start. Slack may go negative.
    Legacy,
}

impl FromStr for BackwardRule {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "legacy" => Ok(Self::Legacy),
            other => Err(ConfigError::UnknownBackwardRule(other.to_string())),
        }
    }
}

/// Configuration for a scheduling run.
#[pyclass]
#[derive(Clone, Debug)]
pub struct ScheduleConfig {
    /// Ready-queue strategy: "fifo", "id_asc" or "id_desc"
    #[pyo3(get, set)]
    pub tie_break: String,
    /// Backward pass bounds: "standard" or "legacy"
    #[pyo3(get, set)]
    pub backward_rule: String,
    /// Baseline used when no task has a start date (None = local current date)
    #[pyo3(get, set)]
    pub today: Option<NaiveDate>,
    /// Verbosity level: 0=silent, 1=summary, 2=stages, 3=debug
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            tie_break: "fifo".to_string(),
            backward_rule: "standard".to_string(),
            today: None,
            verbosity: 0,
        }
    }
}

impl ScheduleConfig {
    pub fn tie_break(&self) -> Result<TieBreak, ConfigError> {
        self.tie_break.parse()
    }

    pub fn backward_rule(&self) -> Result<BackwardRule, ConfigError> {
        self.backward_rule.parse()
    }

    /// Fallback baseline date, resolving "today" against the local clock.
    pub fn fallback_baseline(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

#[pymethods]
impl ScheduleConfig {
    #[new]
    #[pyo3(signature = (tie_break=None, backward_rule=None, today=None, verbosity=None))]
    fn new(
        tie_break: Option<String>,
        backward_rule: Option<String>,
        today: Option<NaiveDate>,
        verbosity: Option<u8>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            tie_break: tie_break.unwrap_or(defaults.tie_break),
            backward_rule: backward_rule.unwrap_or(defaults.backward_rule),
            today,
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "ScheduleConfig(tie_break={:?}, backward_rule={:?}, today={:?}, verbosity={})",
            self.tie_break, self.backward_rule, self.today, self.verbosity
        )
    }
}
