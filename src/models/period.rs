//! Report period model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The date range a summary or exported report covers.
///
/// Callers slice an employee's reconciled records to this window before
/// invoking the aggregator or the exporter; the engine itself does no
/// filtering.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ReportPeriod;
/// use chrono::NaiveDate;
///
/// let period = ReportPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// };
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl ReportPeriod {
    /// Checks whether a date falls within this period, inclusive of both
    /// endpoints.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_period(start: &str, end: &str) -> ReportPeriod {
        ReportPeriod {
            start_date: NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap(),
            end_date: NaiveDate::parse_from_str(end, "%Y-%m-%d").unwrap(),
        }
    }

    #[test]
    fn test_contains_date_within_period() {
        let period = make_period("2026-01-01", "2026-01-31");
        assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
    }

    #[test]
    fn test_contains_date_on_both_endpoints() {
        let period = make_period("2026-01-01", "2026-01-31");
        assert!(period.contains_date(period.start_date));
        assert!(period.contains_date(period.end_date));
    }

    #[test]
    fn test_contains_date_outside_period() {
        let period = make_period("2026-01-01", "2026-01-31");
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()));
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()));
    }

    #[test]
    fn test_serialization_round_trip() {
        let period = make_period("2026-01-01", "2026-01-31");
        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"start_date\":\"2026-01-01\""));
        let deserialized: ReportPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(period, deserialized);
    }
}
