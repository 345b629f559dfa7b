//! Summary aggregation over classified record sequences.

use crate::engine::format_clock;
use crate::models::{AttendanceRecord, AttendanceStatus, StatValue, SummaryStat};

/// Folds a classified record sequence into the fixed set of summary
/// metrics.
///
/// The caller hands in whatever slice it wants summarized, typically one
/// employee's records over one date range; the aggregator does no
/// filtering of its own. The returned order is significant and fixed:
/// consumers render the metrics positionally.
///
/// Workable days exclude holiday-status and weekend-status days on both
/// their worked and unworked variants. The total-hours metric carries the
/// raw numeric sum alongside its clock-formatted display value.
///
/// # Example
///
/// ```
/// use attendance_engine::engine::summarize;
/// use attendance_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
///
/// let mut record = AttendanceRecord::placeholder(
///     "Jane Doe",
///     NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
/// );
/// record.work_hours = 8.0;
/// let record = record.with_status(AttendanceStatus::Present);
///
/// let stats = summarize(&[record]);
/// assert_eq!(stats[0].label, "Total Workable Days");
/// assert_eq!(stats[5].total_hours, Some(8.0));
/// ```
pub fn summarize(records: &[AttendanceRecord]) -> Vec<SummaryStat> {
    let count = |status: AttendanceStatus| -> u32 {
        records.iter().filter(|r| r.status == status).count() as u32
    };

    let holiday_days = count(AttendanceStatus::Holiday) + count(AttendanceStatus::WorkOnHoliday);
    let weekend_days = count(AttendanceStatus::Weekend) + count(AttendanceStatus::WorkOnWeekend);
    let workable_days = records.len() as u32 - holiday_days - weekend_days;

    let short_days = count(AttendanceStatus::ShortHours);
    let half_days = count(AttendanceStatus::HalfDay);

    let total_hours: f64 = records.iter().map(|r| r.work_hours).sum();

    vec![
        SummaryStat {
            label: "Total Workable Days",
            value: StatValue::Count(workable_days),
            tone: "blue",
            total_hours: None,
        },
        SummaryStat {
            label: "Present Days",
            value: StatValue::Count(count(AttendanceStatus::Present)),
            tone: "green",
            total_hours: None,
        },
        SummaryStat {
            label: "Absent Days",
            value: StatValue::Count(count(AttendanceStatus::Absent)),
            tone: "red",
            total_hours: None,
        },
        SummaryStat {
            label: "Short/Half Days",
            value: StatValue::Text(format!("{}/{}", short_days, half_days)),
            tone: "orange",
            total_hours: None,
        },
        SummaryStat {
            label: "Work on Holiday",
            value: StatValue::Count(count(AttendanceStatus::WorkOnHoliday)),
            tone: "purple",
            total_hours: None,
        },
        SummaryStat {
            label: "Total Hours Worked",
            value: StatValue::Text(format_clock(total_hours)),
            tone: "teal",
            total_hours: Some(total_hours),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_record(day: u32, work_hours: f64, status: AttendanceStatus) -> AttendanceRecord {
        let mut record = AttendanceRecord::placeholder(
            "Jane Doe",
            NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
        );
        record.work_hours = work_hours;
        record.with_status(status)
    }

    fn stat_count(stats: &[SummaryStat], label: &str) -> u32 {
        match stats.iter().find(|s| s.label == label).unwrap().value {
            StatValue::Count(n) => n,
            StatValue::Text(_) => panic!("expected count for {}", label),
        }
    }

    /// SM-001: metric order is fixed
    #[test]
    fn test_metric_order_is_fixed() {
        let stats = summarize(&[]);
        let labels: Vec<&str> = stats.iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec![
                "Total Workable Days",
                "Present Days",
                "Absent Days",
                "Short/Half Days",
                "Work on Holiday",
                "Total Hours Worked",
            ]
        );
    }

    /// SM-002: workable days exclude both kinds of holiday and weekend
    #[test]
    fn test_workable_days_exclude_holidays_and_weekends() {
        let records = vec![
            make_record(12, 8.0, AttendanceStatus::Present),
            make_record(13, 0.0, AttendanceStatus::Absent),
            make_record(14, 0.0, AttendanceStatus::Holiday),
            make_record(15, 6.0, AttendanceStatus::WorkOnHoliday),
            make_record(17, 0.0, AttendanceStatus::Weekend),
            make_record(18, 4.0, AttendanceStatus::WorkOnWeekend),
        ];

        let stats = summarize(&records);
        assert_eq!(stat_count(&stats, "Total Workable Days"), 2);
    }

    /// SM-003: short/half renders as a combined display value
    #[test]
    fn test_short_half_combined_display() {
        let records = vec![
            make_record(12, 5.0, AttendanceStatus::ShortHours),
            make_record(13, 6.0, AttendanceStatus::ShortHours),
            make_record(14, 2.0, AttendanceStatus::HalfDay),
        ];

        let stats = summarize(&records);
        let stat = stats.iter().find(|s| s.label == "Short/Half Days").unwrap();
        assert_eq!(stat.value, StatValue::Text("2/1".to_string()));
    }

    /// SM-004: total hours carries both display and raw values
    #[test]
    fn test_total_hours_formatted_and_raw() {
        let records = vec![
            make_record(12, 8.25, AttendanceStatus::Present),
            make_record(13, 7.75, AttendanceStatus::ShortHours),
        ];

        let stats = summarize(&records);
        let stat = stats.iter().find(|s| s.label == "Total Hours Worked").unwrap();
        assert_eq!(stat.value, StatValue::Text("16:00".to_string()));
        assert_eq!(stat.total_hours, Some(16.0));
    }

    /// SM-005: status counts partition the input when no Unknown present
    #[test]
    fn test_counts_partition_record_total() {
        let records = vec![
            make_record(12, 8.0, AttendanceStatus::Present),
            make_record(13, 0.0, AttendanceStatus::Absent),
            make_record(14, 5.0, AttendanceStatus::ShortHours),
            make_record(15, 2.0, AttendanceStatus::HalfDay),
            make_record(16, 0.0, AttendanceStatus::Holiday),
            make_record(17, 0.0, AttendanceStatus::Weekend),
            make_record(18, 4.0, AttendanceStatus::WorkOnWeekend),
            make_record(19, 6.0, AttendanceStatus::WorkOnHoliday),
        ];

        let stats = summarize(&records);
        let present = stat_count(&stats, "Present Days");
        let absent = stat_count(&stats, "Absent Days");
        let work_on_holiday = stat_count(&stats, "Work on Holiday");

        let (short, half) = match &stats[3].value {
            StatValue::Text(s) => {
                let mut parts = s.split('/');
                (
                    parts.next().unwrap().parse::<u32>().unwrap(),
                    parts.next().unwrap().parse::<u32>().unwrap(),
                )
            }
            StatValue::Count(_) => panic!("expected combined display value"),
        };

        let holiday = records
            .iter()
            .filter(|r| r.status == AttendanceStatus::Holiday)
            .count() as u32;
        let weekend_both = records
            .iter()
            .filter(|r| {
                r.status == AttendanceStatus::Weekend
                    || r.status == AttendanceStatus::WorkOnWeekend
            })
            .count() as u32;

        assert_eq!(
            present + absent + short + half + holiday + work_on_holiday + weekend_both,
            records.len() as u32
        );
    }

    #[test]
    fn test_empty_input_gives_zero_metrics() {
        let stats = summarize(&[]);
        assert_eq!(stat_count(&stats, "Total Workable Days"), 0);
        assert_eq!(stat_count(&stats, "Present Days"), 0);
        let total = stats.iter().find(|s| s.label == "Total Hours Worked").unwrap();
        assert_eq!(total.value, StatValue::Text("0:00".to_string()));
        assert_eq!(total.total_hours, Some(0.0));
    }

    #[test]
    fn test_every_metric_carries_a_tone() {
        for stat in summarize(&[]) {
            assert!(!stat.tone.is_empty());
        }
    }
}
