//! Summary metric model.

use serde::Serialize;

/// The displayable value of a summary metric.
///
/// Metrics are either plain counts or pre-formatted display strings such
/// as the combined `"{short}/{half}"` value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    /// A plain day count.
    Count(u32),
    /// A pre-formatted display string.
    Text(String),
}

/// A named summary metric produced by the aggregator.
///
/// The `tone` field is a presentation tag; consumers may ignore or
/// reinterpret it. `total_hours` carries the raw numeric sum alongside the
/// formatted value for the one metric where a display string would lose
/// precision.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{StatValue, SummaryStat};
///
/// let stat = SummaryStat {
///     label: "Present Days",
///     value: StatValue::Count(18),
///     tone: "green",
///     total_hours: None,
/// };
/// assert_eq!(stat.label, "Present Days");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStat {
    /// The metric's display label.
    pub label: &'static str,
    /// The metric's display value.
    pub value: StatValue,
    /// Presentation tag for the consuming surface.
    pub tone: &'static str,
    /// Raw numeric hours behind the formatted value, when one exists.
    pub total_hours: Option<f64>,
}
