//! Holiday calendar model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A calendar date observed as a holiday, with its display label.
///
/// The engine only consumes the set of holiday dates; the label exists for
/// the editing surface and the exported report's consumers.
///
/// # Example
///
/// ```
/// use attendance_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
///     name: "Republic Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The display label for the holiday.
    pub name: String,
}

/// Projects a holiday list into the date set consumed by the classifier.
///
/// Duplicate dates collapse into one entry.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{Holiday, holiday_date_set};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();
/// let holidays = vec![Holiday { date, name: "Christmas Day".to_string() }];
/// assert!(holiday_date_set(&holidays).contains(&date));
/// ```
pub fn holiday_date_set(holidays: &[Holiday]) -> HashSet<NaiveDate> {
    holidays.iter().map(|h| h.date).collect()
}
