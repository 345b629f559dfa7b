//! Spreadsheet report generation.
//!
//! This module assembles the two-sheet attendance report workbook and
//! writes it to disk.

mod exporter;

pub use exporter::{build_report, export_report, report_file_name, status_color};
