//! Clock-time rendering of fractional hour quantities.

/// Renders a fractional-hour quantity as an `H:MM` clock string.
///
/// NaN, infinite or negative input degrades to the canonical zero string
/// `"0:00"`; the function never panics. Rounding is applied once to the
/// total minutes rather than independently to hours and minutes, so a
/// 59.5-minute quantity renders as `"01:00"` and not `"0:60"`.
///
/// Minutes are always zero-padded to two digits. Hours are zero-padded to
/// two digits except a bare zero hour, which renders unpadded.
///
/// # Example
///
/// ```
/// use attendance_engine::engine::format_clock;
///
/// assert_eq!(format_clock(0.5), "0:30");
/// assert_eq!(format_clock(8.25), "08:15");
/// assert_eq!(format_clock(-1.0), "0:00");
/// assert_eq!(format_clock(f64::NAN), "0:00");
/// ```
pub fn format_clock(hours: f64) -> String {
    if !hours.is_finite() || hours < 0.0 {
        return "0:00".to_string();
    }

    let total_minutes = (hours * 60.0).round() as i64;
    let h = total_minutes / 60;
    let m = total_minutes % 60;

    if h == 0 {
        format!("0:{:02}", m)
    } else {
        format!("{:02}:{:02}", h, m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_hour() {
        assert_eq!(format_clock(0.5), "0:30");
    }

    #[test]
    fn test_negative_is_zero_string() {
        assert_eq!(format_clock(-1.0), "0:00");
        assert_eq!(format_clock(-0.001), "0:00");
    }

    #[test]
    fn test_nan_is_zero_string() {
        assert_eq!(format_clock(f64::NAN), "0:00");
    }

    #[test]
    fn test_infinities_are_zero_string() {
        assert_eq!(format_clock(f64::INFINITY), "0:00");
        assert_eq!(format_clock(f64::NEG_INFINITY), "0:00");
    }

    #[test]
    fn test_zero_is_canonical_zero_string() {
        assert_eq!(format_clock(0.0), "0:00");
    }

    #[test]
    fn test_fractional_minute_rounds_up() {
        // 8.0084 hours is 480.504 minutes; truncation would display 08:00.
        assert_eq!(format_clock(8.0084), "08:01");
    }

    #[test]
    fn test_rounding_applies_once_to_total_minutes() {
        // 59.502 minutes must carry into the hour, never render as 0:60.
        assert_eq!(format_clock(0.9917), "01:00");
    }

    #[test]
    fn test_fractional_minute_rounds_down() {
        // 480.4 minutes rounds back to 480.
        assert_eq!(format_clock(8.0066), "08:00");
    }

    #[test]
    fn test_exact_hours_and_minutes() {
        assert_eq!(format_clock(8.0), "08:00");
        assert_eq!(format_clock(8.25), "08:15");
        assert_eq!(format_clock(12.75), "12:45");
    }

    #[test]
    fn test_large_totals_keep_accumulating_hours() {
        assert_eq!(format_clock(152.5), "152:30");
    }
}
