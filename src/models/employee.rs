//! Employee attendance collection model.

use serde::{Deserialize, Serialize};

use super::record::AttendanceRecord;

/// An employee name plus that employee's attendance records.
///
/// Before reconciliation the records may be sparse and unordered. After
/// reconciliation they are dense: strictly increasing by date, one entry
/// per calendar day, with placeholders filling every gap. Collections are
/// rebuilt wholesale on every reconciliation pass.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{AttendanceRecord, EmployeeData};
/// use chrono::NaiveDate;
///
/// let employee = EmployeeData {
///     name: "Jane Doe".to_string(),
///     records: vec![AttendanceRecord::placeholder(
///         "Jane Doe",
///         NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
///     )],
/// };
/// assert_eq!(employee.records.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeData {
    /// The employee's display name, also used in record identifiers.
    pub name: String,
    /// The employee's attendance records, ordered by date once reconciled.
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
}
