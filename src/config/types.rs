//! Configuration types for attendance classification.
//!
//! This module contains the strongly-typed configuration consumed by the
//! classifier, plus the raw file-shaped structs deserialized from YAML.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// The work-hour thresholds section of the configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsSection {
    /// Hours at or above which a workday counts as a full day.
    pub full_day_hours: f64,
    /// Hours at or above which a workday counts as short hours rather
    /// than a half day.
    pub half_day_hours: f64,
}

/// The raw configuration file structure (`attendance.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceConfigFile {
    /// Weekend day names, e.g. `["saturday", "sunday"]`.
    pub weekend_days: Vec<String>,
    /// Work-hour thresholds.
    pub thresholds: ThresholdsSection,
}

/// The validated classification configuration.
///
/// Classification depends on exactly three configuration points: the set
/// of weekend days and the full-day and half-day hour thresholds. The
/// invariant `full_day_hours > half_day_hours > 0` is enforced on
/// construction.
///
/// # Example
///
/// ```
/// use attendance_engine::config::AttendanceConfig;
/// use chrono::NaiveDate;
///
/// let config = AttendanceConfig::default();
/// assert_eq!(config.full_day_hours(), 8.0);
/// assert_eq!(config.half_day_hours(), 4.0);
///
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert!(config.is_weekend(saturday));
/// ```
#[derive(Debug, Clone)]
pub struct AttendanceConfig {
    /// Day-of-week values treated as weekend.
    weekend_days: Vec<Weekday>,
    /// Full-day hour threshold.
    full_day_hours: f64,
    /// Half-day hour threshold.
    half_day_hours: f64,
}

impl AttendanceConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] when the thresholds are not
    /// finite, not positive, or not strictly ordered
    /// (`full_day_hours > half_day_hours`).
    pub fn new(
        weekend_days: Vec<Weekday>,
        full_day_hours: f64,
        half_day_hours: f64,
    ) -> EngineResult<Self> {
        if !full_day_hours.is_finite() || !half_day_hours.is_finite() {
            return Err(EngineError::InvalidConfig {
                message: "hour thresholds must be finite numbers".to_string(),
            });
        }
        if half_day_hours <= 0.0 {
            return Err(EngineError::InvalidConfig {
                message: format!("half_day_hours must be positive, got {}", half_day_hours),
            });
        }
        if full_day_hours <= half_day_hours {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "full_day_hours ({}) must exceed half_day_hours ({})",
                    full_day_hours, half_day_hours
                ),
            });
        }
        Ok(Self {
            weekend_days,
            full_day_hours,
            half_day_hours,
        })
    }

    /// Returns the configured weekend days.
    pub fn weekend_days(&self) -> &[Weekday] {
        &self.weekend_days
    }

    /// Returns the full-day hour threshold.
    pub fn full_day_hours(&self) -> f64 {
        self.full_day_hours
    }

    /// Returns the half-day hour threshold.
    pub fn half_day_hours(&self) -> f64 {
        self.half_day_hours
    }

    /// Checks whether a date falls on a configured weekend day.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend_days.contains(&date.weekday())
    }
}

impl Default for AttendanceConfig {
    /// Saturday/Sunday weekend with an 8-hour full day and a 4-hour half
    /// day.
    fn default() -> Self {
        Self {
            weekend_days: vec![Weekday::Sat, Weekday::Sun],
            full_day_hours: 8.0,
            half_day_hours: 4.0,
        }
    }
}
