//! Configuration for the Attendance Reconciliation Engine.
//!
//! This module provides the strongly-typed [`AttendanceConfig`] consumed by
//! the classifier and the [`ConfigLoader`] that reads it from a YAML file.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AttendanceConfig, AttendanceConfigFile, ThresholdsSection};
