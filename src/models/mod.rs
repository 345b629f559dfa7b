//! Core data models for the Attendance Reconciliation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod holiday;
mod period;
mod record;
mod stat;

pub use employee::EmployeeData;
pub use holiday::{Holiday, holiday_date_set};
pub use period::ReportPeriod;
pub use record::{AttendanceRecord, AttendanceStatus};
pub use stat::{StatValue, SummaryStat};
