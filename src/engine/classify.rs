//! Attendance status classification.
//!
//! This module provides the pure classification function that assigns one
//! [`AttendanceStatus`] to a record from its worked hours, its date, and
//! the holiday/weekend configuration.

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::config::AttendanceConfig;
use crate::models::{AttendanceRecord, AttendanceStatus};

/// The reason literal an upstream writer attaches to approved
/// out-of-office days.
pub const OUT_OF_OFFICE_REASON: &str = "Out of Office";

/// Classifies one record against the holiday calendar and configuration.
///
/// The decision policy is evaluated in a fixed order. For positive worked
/// hours, a holiday date wins over a weekend date, and both win over the
/// threshold comparisons; for zero hours the same holiday-over-weekend
/// precedence applies before falling back to absent.
///
/// The function is total: every combination of inputs maps to a status,
/// and classification depends on nothing but the arguments.
///
/// # Arguments
///
/// * `record` - The record to classify; only its date, worked hours and
///   reason are consulted
/// * `holidays` - The set of holiday dates
/// * `config` - Weekend days and hour thresholds
///
/// # Example
///
/// ```
/// use attendance_engine::config::AttendanceConfig;
/// use attendance_engine::engine::classify;
/// use attendance_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
/// use std::collections::HashSet;
///
/// let config = AttendanceConfig::default();
/// let holidays = HashSet::new();
///
/// // 2026-01-14 is a Wednesday
/// let mut record = AttendanceRecord::placeholder(
///     "Jane Doe",
///     NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
/// );
/// record.work_hours = 8.0;
/// assert_eq!(classify(&record, &holidays, &config), AttendanceStatus::Present);
/// ```
pub fn classify(
    record: &AttendanceRecord,
    holidays: &HashSet<NaiveDate>,
    config: &AttendanceConfig,
) -> AttendanceStatus {
    let is_holiday = holidays.contains(&record.date);
    let is_weekend = config.is_weekend(record.date);

    if record.work_hours > 0.0 {
        if is_holiday {
            return AttendanceStatus::WorkOnHoliday;
        }
        if is_weekend {
            return AttendanceStatus::WorkOnWeekend;
        }
        if record.work_hours >= config.full_day_hours() {
            return AttendanceStatus::Present;
        }
        if record.work_hours >= config.half_day_hours() {
            return AttendanceStatus::ShortHours;
        }
        return AttendanceStatus::HalfDay;
    }

    // Inherited from the upstream punch writer, which was expected to set
    // an approved out-of-office day's hours to the full-day value. With
    // zero hours the condition cannot match while the full-day threshold
    // is positive; kept literal until that writer's intent is settled.
    if record.reason == OUT_OF_OFFICE_REASON && record.work_hours == config.full_day_hours() {
        return AttendanceStatus::Present;
    }

    if is_holiday {
        AttendanceStatus::Holiday
    } else if is_weekend {
        AttendanceStatus::Weekend
    } else {
        AttendanceStatus::Absent
    }
}
