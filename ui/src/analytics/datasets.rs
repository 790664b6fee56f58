//! Turning page-provided JSON into chart-ready series.

use serde_json::Value;
use thiserror::Error;
use time::{macros::format_description, Date};

use super::palette;

/// Why a single chart could not be built. Never escapes its slot.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("{slot} data could not be decoded: {reason}")]
    Decode { slot: &'static str, reason: String },
    #[error("unrecognised date `{0}` in timeline data")]
    InvalidDate(String),
    #[error("hourly data must contain 24 values, found {0}")]
    HourlyLength(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineSeries {
    pub dates: Vec<String>,
    pub counts: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: u64,
    pub share: u32,
    pub color: &'static str,
}

impl Slice {
    /// Hover text, e.g. `Mobile: 30 (75%)`.
    pub fn tooltip(&self) -> String {
        format!("{}: {} ({}%)", self.label, self.value, self.share)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub color: &'static str,
    pub orientation: Orientation,
}

/// Everything a chart component needs to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartModel {
    Line(TimelineSeries),
    Doughnut(Vec<Slice>),
    Bar(BarSeries),
}

/// Parse a `date → count` object and order it by calendar date.
pub fn timeline_from_value(value: &Value) -> Result<TimelineSeries, ChartError> {
    let object = value.as_object().ok_or_else(|| ChartError::Decode {
        slot: "timeline",
        reason: "expected an object of date → count".into(),
    })?;

    let mut entries = Vec::with_capacity(object.len());
    for (date, count) in object {
        let count = count.as_u64().ok_or_else(|| ChartError::Decode {
            slot: "timeline",
            reason: format!("count for `{date}` is not a whole number"),
        })?;
        entries.push((date.clone(), count));
    }

    sort_timeline(entries)
}

/// Stable sort by parsed calendar date (not string order).
pub fn sort_timeline(entries: Vec<(String, u64)>) -> Result<TimelineSeries, ChartError> {
    let mut keyed = entries
        .into_iter()
        .map(|(label, count)| parse_day(&label).map(|day| (day, label, count)))
        .collect::<Result<Vec<_>, _>>()?;

    keyed.sort_by_key(|(day, _, _)| *day);

    let (dates, counts) = keyed
        .into_iter()
        .map(|(_, label, count)| (label, count))
        .unzip();
    Ok(TimelineSeries { dates, counts })
}

fn parse_day(raw: &str) -> Result<Date, ChartError> {
    let day_part = raw.trim().get(..10).unwrap_or(raw.trim());
    Date::parse(day_part, &format_description!("[year]-[month]-[day]"))
        .map_err(|_| ChartError::InvalidDate(raw.to_string()))
}

/// Parse `[{<label_key>: "...", scans: n}, ...]`, keeping feed order.
pub fn breakdown_from_value(
    value: &Value,
    slot: &'static str,
    label_key: &str,
) -> Result<Vec<(String, u64)>, ChartError> {
    let items = value.as_array().ok_or_else(|| ChartError::Decode {
        slot,
        reason: "expected an array".into(),
    })?;

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let label = item
                .get(label_key)
                .and_then(Value::as_str)
                .ok_or_else(|| ChartError::Decode {
                    slot,
                    reason: format!("entry {idx} is missing `{label_key}`"),
                })?;
            let scans = item
                .get("scans")
                .and_then(Value::as_u64)
                .ok_or_else(|| ChartError::Decode {
                    slot,
                    reason: format!("entry {idx} is missing a whole `scans` count"),
                })?;
            Ok((label.to_string(), scans))
        })
        .collect()
}

pub fn hourly_from_value(value: &Value) -> Result<Vec<u64>, ChartError> {
    let items = value.as_array().ok_or_else(|| ChartError::Decode {
        slot: "hourly",
        reason: "expected an array of 24 counts".into(),
    })?;
    if items.len() != 24 {
        return Err(ChartError::HourlyLength(items.len()));
    }
    items
        .iter()
        .map(|item| {
            item.as_u64().ok_or_else(|| ChartError::Decode {
                slot: "hourly",
                reason: "hourly counts must be whole numbers".into(),
            })
        })
        .collect()
}

/// `round(value / sum * 100)` for each value; all zero when the sum is zero.
pub fn share_percentages(values: &[u64]) -> Vec<u32> {
    let total: u64 = values.iter().sum();
    values
        .iter()
        .map(|&value| {
            if total == 0 {
                0
            } else {
                (value as f64 / total as f64 * 100.0).round() as u32
            }
        })
        .collect()
}

/// Attach shares and palette colors to breakdown rows.
pub fn slices(rows: Vec<(String, u64)>, colors: &'static [&'static str]) -> Vec<Slice> {
    let values: Vec<u64> = rows.iter().map(|(_, value)| *value).collect();
    let shares = share_percentages(&values);
    rows.into_iter()
        .zip(shares)
        .enumerate()
        .map(|(idx, ((label, value), share))| Slice {
            label,
            value,
            share,
            color: colors[idx % colors.len()],
        })
        .collect()
}

/// 12-hour clock label for an hour of the day (`0 → 12AM`, `13 → 1PM`).
pub fn hour_label(hour: usize) -> String {
    let clock = match hour % 12 {
        0 => 12,
        other => other,
    };
    let suffix = if hour % 24 < 12 { "AM" } else { "PM" };
    format!("{clock}{suffix}")
}

pub fn hour_labels() -> Vec<String> {
    (0..24).map(hour_label).collect()
}

pub fn hourly_series(counts: Vec<u64>) -> BarSeries {
    BarSeries {
        labels: hour_labels(),
        values: counts,
        color: palette::SECONDARY,
        orientation: Orientation::Vertical,
    }
}

pub fn location_series(rows: Vec<(String, u64)>) -> BarSeries {
    let (labels, values) = rows.into_iter().unzip();
    BarSeries {
        labels,
        values,
        color: palette::PRIMARY,
        orientation: Orientation::Horizontal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn timeline_sorts_by_calendar_date() {
        let series = sort_timeline(vec![
            ("2024-03-02".into(), 7),
            ("2024-01-05".into(), 2),
            ("2024-02-10".into(), 4),
        ])
        .unwrap();
        assert_eq!(series.dates, ["2024-01-05", "2024-02-10", "2024-03-02"]);
        assert_eq!(series.counts, [2, 4, 7]);
    }

    #[test]
    fn timeline_rejects_garbage_dates() {
        let err = timeline_from_value(&json!({"yesterday": 1})).unwrap_err();
        assert_eq!(err, ChartError::InvalidDate("yesterday".into()));
    }

    #[test]
    fn hour_labels_use_twelve_hour_clock() {
        let labels = hour_labels();
        assert_eq!(labels.len(), 24);
        assert_eq!(labels[0], "12AM");
        assert_eq!(labels[11], "11AM");
        assert_eq!(labels[12], "12PM");
        assert_eq!(labels[13], "1PM");
        assert_eq!(labels[23], "11PM");
    }

    #[test]
    fn hourly_requires_full_day() {
        let err = hourly_from_value(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err, ChartError::HourlyLength(3));
    }

    #[test]
    fn shares_round_against_sum() {
        assert_eq!(share_percentages(&[3, 1]), [75, 25]);
        assert_eq!(share_percentages(&[1, 1, 1]), [33, 33, 33]);
        assert_eq!(share_percentages(&[0, 0]), [0, 0]);
    }

    #[test]
    fn slice_tooltip_reports_share() {
        let rows = vec![("Mobile".to_string(), 3), ("Desktop".to_string(), 1)];
        let slices = slices(rows, palette::DEVICE);
        assert_eq!(slices[0].tooltip(), "Mobile: 3 (75%)");
        assert_eq!(slices[1].tooltip(), "Desktop: 1 (25%)");
        assert_eq!(slices[0].color, palette::SECONDARY);
    }

    #[test]
    fn breakdown_reads_slot_specific_key() {
        let rows =
            breakdown_from_value(&json!([{"os": "Android", "scans": 5}]), "os", "os").unwrap();
        assert_eq!(rows, vec![("Android".to_string(), 5)]);

        let err = breakdown_from_value(&json!([{"device": "Mobile"}]), "device", "device")
            .unwrap_err();
        assert!(matches!(err, ChartError::Decode { slot: "device", .. }));
    }
}
