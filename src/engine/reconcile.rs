//! Calendar reconciliation.
//!
//! This module fills every missing calendar day in each employee's record
//! set with a synthesized placeholder, so that every employee's sequence
//! densely covers one shared calendar window, and recomputes the status of
//! every record along the way.

use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::config::AttendanceConfig;
use crate::engine::classify;
use crate::models::{AttendanceRecord, EmployeeData, Holiday, holiday_date_set};

/// Reconciles every employee's records against the shared calendar window.
///
/// The window is the minimum-to-maximum observed date across **all**
/// employees and all their records, applied uniformly so every employee's
/// report spans the same calendar range regardless of that employee's own
/// coverage. Within the window, each day either carries the employee's
/// existing record or a synthesized placeholder, and every record's status
/// is recomputed through the classifier. Persisted statuses are never
/// trusted, which also covers records coming back from an edit.
///
/// Reconciling an already-reconciled, unmodified collection against the
/// same holiday list yields an identical collection: placeholder identity
/// is derived from employee and date, never from generation time.
///
/// # Arguments
///
/// * `employees` - Per-employee record collections, sparse and unordered
/// * `holidays` - The holiday calendar
/// * `config` - Weekend days and hour thresholds for classification
///
/// # Returns
///
/// Freshly built collections in the input's employee order, each with one
/// record per calendar day, sorted ascending by date. When no employee has
/// any records there is no window to reconcile against and the input is
/// returned unchanged.
///
/// # Example
///
/// ```
/// use attendance_engine::config::AttendanceConfig;
/// use attendance_engine::engine::reconcile;
/// use attendance_engine::models::{AttendanceRecord, EmployeeData};
/// use chrono::NaiveDate;
///
/// let mut record = AttendanceRecord::placeholder(
///     "Jane Doe",
///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
/// );
/// record.work_hours = 8.0;
///
/// let employees = vec![
///     EmployeeData { name: "Jane Doe".to_string(), records: vec![record] },
///     EmployeeData { name: "John Roe".to_string(), records: vec![] },
/// ];
///
/// let reconciled = reconcile(&employees, &[], &AttendanceConfig::default());
/// // Both employees cover the one-day window established by Jane's record.
/// assert_eq!(reconciled[0].records.len(), 1);
/// assert_eq!(reconciled[1].records.len(), 1);
/// ```
pub fn reconcile(
    employees: &[EmployeeData],
    holidays: &[Holiday],
    config: &AttendanceConfig,
) -> Vec<EmployeeData> {
    let Some((min_date, max_date)) = observed_range(employees) else {
        return employees.to_vec();
    };

    debug!(
        start = %min_date,
        end = %max_date,
        employees = employees.len(),
        "reconciling attendance against shared calendar window"
    );

    let holiday_dates = holiday_date_set(holidays);

    employees
        .iter()
        .map(|employee| {
            let by_day = index_by_day(&employee.records);

            let mut records: Vec<AttendanceRecord> = min_date
                .iter_days()
                .take_while(|day| *day <= max_date)
                .map(|day| {
                    let record = match by_day.get(&day) {
                        Some(existing) => (*existing).clone(),
                        None => AttendanceRecord::placeholder(&employee.name, day),
                    };
                    let status = classify(&record, &holiday_dates, config);
                    record.with_status(status)
                })
                .collect();

            records.sort_by_key(|record| record.date);

            EmployeeData {
                name: employee.name.clone(),
                records,
            }
        })
        .collect()
}

/// Computes the global minimum and maximum observed date across all
/// employees, or `None` when no records exist anywhere.
fn observed_range(employees: &[EmployeeData]) -> Option<(NaiveDate, NaiveDate)> {
    let mut dates = employees
        .iter()
        .flat_map(|employee| employee.records.iter().map(|record| record.date));

    let first = dates.next()?;
    let (min, max) = dates.fold((first, first), |(min, max), date| {
        (min.min(date), max.max(date))
    });
    Some((min, max))
}

/// Indexes an employee's records by calendar day.
///
/// Duplicate-day policy: the last record in input order wins. Collisions
/// are logged rather than silently dropped; substituting a strict variant
/// that rejects duplicates only requires changing this function.
fn index_by_day(records: &[AttendanceRecord]) -> HashMap<NaiveDate, &AttendanceRecord> {
    let mut by_day = HashMap::with_capacity(records.len());
    for record in records {
        if let Some(previous) = by_day.insert(record.date, record) {
            warn!(
                employee = %record.employee_name,
                date = %record.date,
                superseded_id = %previous.id,
                "duplicate record for day, keeping the later one"
            );
        }
    }
    by_day
}
