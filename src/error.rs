//! Error types for the Attendance Reconciliation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The engine itself favours total functions with well-defined fallback
//! values; only configuration loading and the final report write can fail.

use rust_xlsxwriter::XlsxError;
use thiserror::Error;

/// The main error type for the Attendance Reconciliation Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/attendance.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/attendance.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration values were inconsistent or out of range.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of what made the configuration invalid.
        message: String,
    },

    /// The report workbook could not be assembled.
    #[error("Failed to assemble report workbook: {message}")]
    ReportBuild {
        /// A description of the workbook error.
        message: String,
    },

    /// The report file could not be written to disk.
    #[error("Failed to write report '{path}': {source}")]
    ReportWrite {
        /// The destination path of the report.
        path: String,
        /// The underlying spreadsheet writer error.
        #[source]
        source: XlsxError,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
