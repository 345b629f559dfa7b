//! Attendance record model and status classification enum.
//!
//! This module defines the [`AttendanceRecord`] struct representing one
//! calendar day for one employee, and the closed [`AttendanceStatus`] enum
//! assigned to every record during reconciliation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The classification assigned to one calendar day of attendance.
///
/// The variants form a closed set; every record ends up with exactly one
/// of them after reconciliation. Days that qualify for multiple conditions
/// are resolved with a fixed precedence: holiday beats weekend, and both
/// beat the work-hour threshold comparisons.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceStatus;
///
/// assert_eq!(AttendanceStatus::WorkOnHoliday.to_string(), "Work on Holiday");
/// assert_eq!(AttendanceStatus::default(), AttendanceStatus::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Worked at least the full-day hour threshold on an ordinary workday.
    Present,
    /// No hours recorded on an ordinary workday.
    Absent,
    /// Worked less than the half-day hour threshold.
    HalfDay,
    /// Worked at least the half-day threshold but less than a full day.
    ShortHours,
    /// A configured weekend day with no hours recorded.
    Weekend,
    /// A holiday with no hours recorded.
    Holiday,
    /// Positive hours recorded on a configured weekend day.
    WorkOnWeekend,
    /// Positive hours recorded on a holiday.
    WorkOnHoliday,
    /// Not yet classified; the initial state of synthesized placeholders.
    #[default]
    Unknown,
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::HalfDay => "Half Day",
            AttendanceStatus::ShortHours => "Short Hours",
            AttendanceStatus::Weekend => "Weekend",
            AttendanceStatus::Holiday => "Holiday",
            AttendanceStatus::WorkOnWeekend => "Work on Weekend",
            AttendanceStatus::WorkOnHoliday => "Work on Holiday",
            AttendanceStatus::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}

/// One calendar day of attendance for one employee.
///
/// Records are either carried over from observed punch data or synthesized
/// as placeholders by the reconciler when a day has no observation. They
/// are superseded by new values, never mutated in place.
///
/// `work_hours` is the canonical numeric source of truth; the `in_time`,
/// `out_time` and `total_hours` strings are derived display fields and are
/// never used to recompute the numeric value.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceRecord;
/// use chrono::NaiveDate;
///
/// let record = AttendanceRecord::placeholder(
///     "Jane Doe",
///     NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
/// );
/// assert_eq!(record.id, "Jane Doe-2026-01-14");
/// assert_eq!(record.work_hours, 0.0);
/// assert_eq!(record.date_key(), "2026-01-14");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Stable identifier, unique per (employee, date).
    pub id: String,
    /// The calendar day the record tracks. Time-of-day is irrelevant and
    /// normalized away before records enter the engine.
    pub date: NaiveDate,
    /// The owning employee.
    pub employee_name: String,
    /// Clock-in display time, absent when no punch was recorded.
    #[serde(default)]
    pub in_time: Option<String>,
    /// Clock-out display time, absent when no punch was recorded.
    #[serde(default)]
    pub out_time: Option<String>,
    /// Derived `H:MM` display string for the hours worked.
    #[serde(default)]
    pub total_hours: Option<String>,
    /// Fractional hours actually worked that day; always non-negative.
    pub work_hours: f64,
    /// Classification for the day; recomputed during reconciliation and
    /// never trusted from input.
    #[serde(default)]
    pub status: AttendanceStatus,
    /// Free-text note such as a leave type; empty when none.
    #[serde(default)]
    pub reason: String,
    /// True when the record's fields were inferred rather than observed.
    #[serde(default)]
    pub is_ai_enhanced: bool,
}

impl AttendanceRecord {
    /// Builds a synthetic zero-hours record standing in for a day with no
    /// observed punch data.
    ///
    /// The identifier is derived from the employee name and the canonical
    /// date string, so two reconciliations of the same input produce
    /// content-equal placeholders.
    pub fn placeholder(employee_name: &str, date: NaiveDate) -> Self {
        Self {
            id: format!("{}-{}", employee_name, date.format("%Y-%m-%d")),
            date,
            employee_name: employee_name.to_string(),
            in_time: None,
            out_time: None,
            total_hours: None,
            work_hours: 0.0,
            status: AttendanceStatus::Unknown,
            reason: String::new(),
            is_ai_enhanced: false,
        }
    }

    /// Renders the record's date as the canonical `YYYY-MM-DD` key used
    /// for per-day lookups and identifiers.
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Returns a superseding copy of this record with the given status.
    pub fn with_status(&self, status: AttendanceStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}
