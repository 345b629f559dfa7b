//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! attendance classification configuration from a YAML file.

use chrono::Weekday;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};

use super::types::{AttendanceConfig, AttendanceConfigFile};

/// Loads and provides access to the attendance configuration.
///
/// # File structure
///
/// ```text
/// attendance.yaml
/// ├── weekend_days: ["saturday", "sunday"]
/// └── thresholds:
///     ├── full_day_hours: 8.0
///     └── half_day_hours: 4.0
/// ```
///
/// Weekend day names are parsed case-insensitively and accept both full
/// names ("saturday") and three-letter forms ("sat").
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/attendance.yaml")?;
/// let config = loader.config();
/// assert!(config.full_day_hours() > config.half_day_hours());
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AttendanceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] when the file cannot be read
    /// - [`EngineError::ConfigParseError`] when the YAML is malformed
    /// - [`EngineError::InvalidConfig`] when a weekend day name does not
    ///   parse or the thresholds violate `full > half > 0`
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let file = Self::load_yaml::<AttendanceConfigFile>(path.as_ref())?;

        let weekend_days = file
            .weekend_days
            .iter()
            .map(|name| {
                Weekday::from_str(name).map_err(|_| EngineError::InvalidConfig {
                    message: format!("unrecognized weekend day name '{}'", name),
                })
            })
            .collect::<EngineResult<Vec<Weekday>>>()?;

        let config = AttendanceConfig::new(
            weekend_days,
            file.thresholds.full_day_hours,
            file.thresholds.half_day_hours,
        )?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the validated configuration.
    pub fn config(&self) -> &AttendanceConfig {
        &self.config
    }

    /// Consumes the loader and returns the validated configuration.
    pub fn into_config(self) -> AttendanceConfig {
        self.config
    }
}
