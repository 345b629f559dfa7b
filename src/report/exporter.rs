//! Attendance report workbook assembly and export.
//!
//! The exported document has exactly two sheets: a metrics sheet and a
//! detail sheet with one background-colored row per record. The sheet
//! structure, row ordering and per-status coloring are the exporter's
//! compatibility contract.

use chrono::{Local, NaiveDate};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus, ReportPeriod, StatValue, SummaryStat};

/// Placeholder for a missing clock-in or clock-out time.
const MISSING_TIME: &str = "--:--";
/// Placeholder for an empty text cell.
const MISSING_TEXT: &str = "-";
/// Zero-hours display string for records without a derived total.
const ZERO_HOURS: &str = "0:00";

/// Returns the fixed background color for a status.
///
/// The match is exhaustive over the closed status enum, so a newly added
/// variant fails compilation here rather than falling through to a
/// runtime lookup failure.
pub fn status_color(status: AttendanceStatus) -> Color {
    match status {
        AttendanceStatus::Present => Color::RGB(0xC6EFCE),
        AttendanceStatus::Absent => Color::RGB(0xFFC7CE),
        AttendanceStatus::HalfDay => Color::RGB(0xFFEB9C),
        AttendanceStatus::ShortHours => Color::RGB(0xFFF2CC),
        AttendanceStatus::Weekend => Color::RGB(0xD9D9D9),
        AttendanceStatus::Holiday => Color::RGB(0xBDD7EE),
        AttendanceStatus::WorkOnWeekend => Color::RGB(0xE2EFDA),
        AttendanceStatus::WorkOnHoliday => Color::RGB(0xE4DFEC),
        AttendanceStatus::Unknown => Color::RGB(0xFFFFFF),
    }
}

/// Derives the report file name from the employee label and export date.
///
/// Spaces in the label are replaced with underscores; the date renders as
/// `YYYY-MM-DD`.
///
/// # Example
///
/// ```
/// use attendance_engine::report::report_file_name;
/// use chrono::NaiveDate;
///
/// let name = report_file_name(
///     "Jane Doe",
///     NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
/// );
/// assert_eq!(name, "Attendance_Report_Jane_Doe_2026-02-01.xlsx");
/// ```
pub fn report_file_name(employee_label: &str, export_date: NaiveDate) -> String {
    format!(
        "Attendance_Report_{}_{}.xlsx",
        employee_label.replace(' ', "_"),
        export_date.format("%Y-%m-%d")
    )
}

/// Assembles the two-sheet report workbook without touching disk.
///
/// Records land on the detail sheet in the order given; callers are
/// expected to have already sorted and filtered them. Inputs are not
/// mutated.
///
/// # Errors
///
/// Returns [`EngineError::ReportBuild`] when the spreadsheet writer
/// rejects the assembly (duplicate sheet names and similar conditions).
pub fn build_report(
    records: &[AttendanceRecord],
    stats: &[SummaryStat],
    employee_label: &str,
    period: &ReportPeriod,
) -> EngineResult<Workbook> {
    assemble_workbook(records, stats, employee_label, period).map_err(|e| {
        EngineError::ReportBuild {
            message: e.to_string(),
        }
    })
}

/// Writes the report into `dir`, named from the employee label and
/// today's date.
///
/// The write is a single atomic producer call; an I/O failure surfaces as
/// [`EngineError::ReportWrite`] with the underlying error attached, and no
/// partial file handling happens here.
pub fn export_report(
    records: &[AttendanceRecord],
    stats: &[SummaryStat],
    employee_label: &str,
    period: &ReportPeriod,
    dir: &Path,
) -> EngineResult<PathBuf> {
    let path = dir.join(report_file_name(employee_label, Local::now().date_naive()));

    let mut workbook = build_report(records, stats, employee_label, period)?;
    workbook
        .save(&path)
        .map_err(|source| EngineError::ReportWrite {
            path: path.display().to_string(),
            source,
        })?;

    info!(
        path = %path.display(),
        rows = records.len(),
        "attendance report written"
    );
    Ok(path)
}

fn assemble_workbook(
    records: &[AttendanceRecord],
    stats: &[SummaryStat],
    employee_label: &str,
    period: &ReportPeriod,
) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();

    let summary = workbook.add_worksheet();
    write_summary_sheet(summary, stats, employee_label, period)?;

    let detail = workbook.add_worksheet();
    write_detail_sheet(detail, records)?;

    Ok(workbook)
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
}

fn write_summary_sheet(
    worksheet: &mut Worksheet,
    stats: &[SummaryStat],
    employee_label: &str,
    period: &ReportPeriod,
) -> Result<(), XlsxError> {
    worksheet.set_name("Summary")?;

    let title_format = Format::new()
        .set_bold()
        .set_font_size(14)
        .set_align(FormatAlign::Center);
    worksheet.merge_range(0, 0, 0, 1, "Attendance Summary", &title_format)?;

    // Row 1 stays blank.
    let label_format = Format::new().set_bold();
    worksheet.write_string_with_format(2, 0, "Employee", &label_format)?;
    worksheet.write_string(2, 1, employee_label)?;
    worksheet.write_string_with_format(3, 0, "Period", &label_format)?;
    worksheet.write_string(
        3,
        1,
        format!(
            "{} - {}",
            period.start_date.format("%d %b %Y"),
            period.end_date.format("%d %b %Y")
        ),
    )?;

    // Row 4 stays blank.
    let header = header_format();
    worksheet.write_string_with_format(5, 0, "Metric", &header)?;
    worksheet.write_string_with_format(5, 1, "Value", &header)?;

    let hours_format = Format::new().set_num_format("0.00");
    for (idx, stat) in stats.iter().enumerate() {
        let row = (6 + idx) as u32;
        worksheet.write_string(row, 0, stat.label)?;
        // The raw hour sum is written as a number so precision survives
        // the display string.
        if let Some(raw_hours) = stat.total_hours {
            worksheet.write_number_with_format(row, 1, raw_hours, &hours_format)?;
            continue;
        }
        match &stat.value {
            StatValue::Count(n) => worksheet.write_number(row, 1, f64::from(*n))?,
            StatValue::Text(s) => worksheet.write_string(row, 1, s)?,
        };
    }

    worksheet.set_column_width(0, 24)?;
    worksheet.set_column_width(1, 22)?;

    Ok(())
}

fn write_detail_sheet(
    worksheet: &mut Worksheet,
    records: &[AttendanceRecord],
) -> Result<(), XlsxError> {
    worksheet.set_name("Detailed Report")?;

    let headers = [
        "Date",
        "Day",
        "In Time",
        "Out Time",
        "Total Hours",
        "Status",
        "Reason/Note",
    ];

    let header = header_format();
    for (col, label) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *label, &header)?;
    }

    for (idx, record) in records.iter().enumerate() {
        let row = (idx + 1) as u32;
        let row_format = Format::new().set_background_color(status_color(record.status));

        let reason = if record.reason.is_empty() {
            MISSING_TEXT
        } else {
            record.reason.as_str()
        };

        worksheet.write_string_with_format(
            row,
            0,
            record.date.format("%Y-%m-%d").to_string(),
            &row_format,
        )?;
        worksheet.write_string_with_format(
            row,
            1,
            record.date.format("%A").to_string(),
            &row_format,
        )?;
        worksheet.write_string_with_format(
            row,
            2,
            record.in_time.as_deref().unwrap_or(MISSING_TIME),
            &row_format,
        )?;
        worksheet.write_string_with_format(
            row,
            3,
            record.out_time.as_deref().unwrap_or(MISSING_TIME),
            &row_format,
        )?;
        worksheet.write_string_with_format(
            row,
            4,
            record.total_hours.as_deref().unwrap_or(ZERO_HOURS),
            &row_format,
        )?;
        worksheet.write_string_with_format(row, 5, record.status.to_string(), &row_format)?;
        worksheet.write_string_with_format(row, 6, reason, &row_format)?;
    }

    // Fixed presentation widths, not computed from content.
    worksheet.set_column_width(0, 12)?;
    worksheet.set_column_width(1, 12)?;
    worksheet.set_column_width(2, 10)?;
    worksheet.set_column_width(3, 10)?;
    worksheet.set_column_width(4, 12)?;
    worksheet.set_column_width(5, 16)?;
    worksheet.set_column_width(6, 28)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatValue;
    use std::collections::HashSet;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_record(date_str: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord::placeholder("Jane Doe", make_date(date_str)).with_status(status)
    }

    fn make_period() -> ReportPeriod {
        ReportPeriod {
            start_date: make_date("2026-01-01"),
            end_date: make_date("2026-01-31"),
        }
    }

    fn make_stats() -> Vec<SummaryStat> {
        vec![
            SummaryStat {
                label: "Present Days",
                value: StatValue::Count(18),
                tone: "green",
                total_hours: None,
            },
            SummaryStat {
                label: "Total Hours Worked",
                value: StatValue::Text("152:30".to_string()),
                tone: "teal",
                total_hours: Some(152.5),
            },
        ]
    }

    const ALL_STATUSES: [AttendanceStatus; 9] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::HalfDay,
        AttendanceStatus::ShortHours,
        AttendanceStatus::Weekend,
        AttendanceStatus::Holiday,
        AttendanceStatus::WorkOnWeekend,
        AttendanceStatus::WorkOnHoliday,
        AttendanceStatus::Unknown,
    ];

    #[test]
    fn test_status_colors_are_distinct() {
        let colors: HashSet<String> = ALL_STATUSES
            .iter()
            .map(|s| format!("{:?}", status_color(*s)))
            .collect();
        assert_eq!(colors.len(), ALL_STATUSES.len());
    }

    #[test]
    fn test_report_file_name_replaces_spaces() {
        let name = report_file_name("Jane Mary Doe", make_date("2026-02-01"));
        assert_eq!(name, "Attendance_Report_Jane_Mary_Doe_2026-02-01.xlsx");
    }

    #[test]
    fn test_report_file_name_is_deterministic() {
        let a = report_file_name("Jane Doe", make_date("2026-02-01"));
        let b = report_file_name("Jane Doe", make_date("2026-02-01"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_build_report_succeeds_for_every_status() {
        let records: Vec<AttendanceRecord> = ALL_STATUSES
            .iter()
            .enumerate()
            .map(|(i, status)| make_record(&format!("2026-01-{:02}", i + 1), *status))
            .collect();

        let workbook = build_report(&records, &make_stats(), "Jane Doe", &make_period());
        assert!(workbook.is_ok());
    }

    #[test]
    fn test_build_report_succeeds_with_no_records() {
        let workbook = build_report(&[], &make_stats(), "Jane Doe", &make_period());
        assert!(workbook.is_ok());
    }

    #[test]
    fn test_export_report_writes_named_file() {
        let records = vec![make_record("2026-01-14", AttendanceStatus::Present)];
        let dir = std::env::temp_dir();

        let path = export_report(&records, &make_stats(), "Jane Doe", &make_period(), &dir)
            .expect("export should succeed");

        assert!(path.exists());
        let file_name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(file_name.starts_with("Attendance_Report_Jane_Doe_"));
        assert!(file_name.ends_with(".xlsx"));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_export_report_surfaces_write_failure() {
        let records = vec![make_record("2026-01-14", AttendanceStatus::Present)];
        let dir = Path::new("/nonexistent/attendance/reports");

        let result = export_report(&records, &make_stats(), "Jane Doe", &make_period(), dir);
        assert!(matches!(result, Err(EngineError::ReportWrite { .. })));
    }
}
