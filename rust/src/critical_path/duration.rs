//! Task duration derivation from calendar dates.

use chrono::NaiveDate;

/// Duration in whole days, inclusive of both endpoints.
///
/// Missing dates yield a single day. Inverted ranges are clamped to one day
/// rather than rejected.
pub fn derive_duration(start: Option<NaiveDate>, end: Option<NaiveDate>) -> i64 {
    match (start, end) {
        (Some(start), Some(end)) => ((end - start).num_days() + 1).max(1),
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2025, 12, day)
    }

    #[test]
    fn test_inclusive_span() {
        assert_eq!(derive_duration(date(2), date(5)), 4);
        assert_eq!(derive_duration(date(4), date(4)), 1);
    }

    #[test]
    fn test_missing_dates_default_to_one_day() {
        assert_eq!(derive_duration(None, None), 1);
        assert_eq!(derive_duration(date(2), None), 1);
        assert_eq!(derive_duration(None, date(5)), 1);
    }

    #[test]
    fn test_inverted_range_clamped() {
        assert_eq!(derive_duration(date(10), date(9)), 1);
        assert_eq!(derive_duration(date(10), date(1)), 1);
    }

    #[test]
    fn test_span_across_months() {
        let start = NaiveDate::from_ymd_opt(2025, 11, 28);
        assert_eq!(derive_duration(start, date(3)), 6);
    }
}
