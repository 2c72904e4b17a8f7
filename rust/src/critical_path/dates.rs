//! Mapping of day offsets onto calendar dates.

use chrono::{Duration, NaiveDate};

use crate::models::Task;

/// Earliest start date among tasks that have one, or `fallback` if none do.
pub fn compute_baseline(tasks: &[Task], fallback: NaiveDate) -> NaiveDate {
    tasks
        .iter()
        .filter_map(|task| task.start)
        .min()
        .unwrap_or(fallback)
}

/// Calendar date `days` after `baseline`, if representable.
pub fn offset_date(baseline: NaiveDate, days: i64) -> Option<NaiveDate> {
    baseline.checked_add_signed(Duration::try_days(days)?)
}

/// Calendar start and end of a task occupying `[earliest_start, earliest_finish)`.
///
/// The end date is inclusive: a one-day task starts and ends on the same date.
/// On failure, returns the day offset that could not be mapped.
pub fn map_dates(
    baseline: NaiveDate,
    earliest_start: i64,
    earliest_finish: i64,
) -> Result<(NaiveDate, NaiveDate), i64> {
    let start = offset_date(baseline, earliest_start).ok_or(earliest_start)?;
    let end_offset = earliest_finish.saturating_sub(1);
    let end = offset_date(baseline, end_offset).ok_or(end_offset)?;
    Ok((start, end))
}
