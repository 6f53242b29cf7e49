//! Reporting payloads: chart series, summary tiles and the date-range query.

use crate::transactions::TransactionRow;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Chart series payload as emitted by the reports endpoints.
///
/// The shape (labels + datasets with styling fields) predates this frontend
/// and is shared with other consumers, so it is decoded as-is rather than
/// remodelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPayload {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartPayload {
    /// The endpoints always emit exactly one dataset; everything downstream
    /// renders the first and ignores the rest.
    pub fn primary(&self) -> Option<&ChartDataset> {
        self.datasets.first()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    #[serde(default)]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(rename = "borderColor", default)]
    pub border_color: Option<String>,
    #[serde(rename = "backgroundColor", default)]
    pub background_color: Option<ColorSpec>,
    #[serde(rename = "borderWidth", default)]
    pub border_width: Option<f64>,
    #[serde(default)]
    pub tension: Option<f64>,
    #[serde(default)]
    pub fill: Option<bool>,
}

/// `backgroundColor` is a single color for line fills and a per-slice array
/// for the category doughnut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    One(String),
    Many(Vec<String>),
}

impl ColorSpec {
    /// Color for slice `index`, cycling when the array is shorter than the data.
    pub fn slice_color(&self, index: usize) -> Option<&str> {
        match self {
            ColorSpec::One(color) => Some(color.as_str()),
            ColorSpec::Many(colors) if colors.is_empty() => None,
            ColorSpec::Many(colors) => Some(colors[index % colors.len()].as_str()),
        }
    }
}

/// `GET /api/reports/summary` payload: the tiles plus the two report tables.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSummary {
    pub total_items: i64,
    pub total_value: f64,
    pub supplier_count: i64,
    pub low_stock: Vec<LowStockRow>,
    pub recent_transactions: Vec<TransactionRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowStockRow {
    pub part_number: String,
    pub description: String,
    pub current_quantity: i64,
    pub minimum_quantity: i64,
    pub location: String,
}

/// Why a date-range form was rejected before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    Missing,
    Invalid,
    Inverted,
}

impl std::fmt::Display for DateRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateRangeError::Missing => write!(f, "Start and end dates are required"),
            DateRangeError::Invalid => write!(f, "Dates must be in YYYY-MM-DD format"),
            DateRangeError::Inverted => write!(f, "Start date must not be after end date"),
        }
    }
}

/// Inclusive date range for the stock-movement refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Validates the two form fields; both must be present and ordered.
    pub fn parse(start: &str, end: &str) -> Result<Self, DateRangeError> {
        let start = start.trim();
        let end = end.trim();
        if start.is_empty() || end.is_empty() {
            return Err(DateRangeError::Missing);
        }
        let start = NaiveDate::parse_from_str(start, "%Y-%m-%d")
            .map_err(|_| DateRangeError::Invalid)?;
        let end =
            NaiveDate::parse_from_str(end, "%Y-%m-%d").map_err(|_| DateRangeError::Invalid)?;
        if start > end {
            return Err(DateRangeError::Inverted);
        }
        Ok(Self { start, end })
    }

    /// Default window shown before the operator picks anything.
    pub fn last_30_days(today: NaiveDate) -> Self {
        Self {
            start: today - Duration::days(30),
            end: today,
        }
    }

    /// Query-string fragment for the stock-movement endpoint.
    pub fn query_string(&self) -> String {
        format!(
            "start={}&end={}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_requires_both_dates() {
        assert_eq!(DateRange::parse("", "2026-01-31"), Err(DateRangeError::Missing));
        assert_eq!(DateRange::parse("2026-01-01", "  "), Err(DateRangeError::Missing));
    }

    #[test]
    fn parse_rejects_garbage_and_inversion() {
        assert_eq!(
            DateRange::parse("01/02/2026", "2026-01-31"),
            Err(DateRangeError::Invalid)
        );
        assert_eq!(
            DateRange::parse("2026-02-01", "2026-01-01"),
            Err(DateRangeError::Inverted)
        );
    }

    #[test]
    fn parse_accepts_ordered_range() {
        let range = DateRange::parse("2026-01-01", "2026-01-31").unwrap();
        assert_eq!(range.query_string(), "start=2026-01-01&end=2026-01-31");
    }

    #[test]
    fn default_window_is_30_days_back() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let range = DateRange::last_30_days(today);
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2026, 2, 13).unwrap());
        assert_eq!(range.end, today);
    }

    #[test]
    fn chart_payload_decodes_doughnut_shape() {
        let json = r##"{
            "labels": ["Mechanical", "Electrical"],
            "datasets": [{
                "data": [1200.5, 340.0],
                "backgroundColor": ["#198754", "#0d6efd"],
                "borderWidth": 1,
                "borderColor": "#343a40"
            }]
        }"##;
        let payload: ChartPayload = serde_json::from_str(json).unwrap();
        let dataset = payload.primary().unwrap();
        assert_eq!(dataset.data, vec![1200.5, 340.0]);
        let colors = dataset.background_color.as_ref().unwrap();
        assert_eq!(colors.slice_color(0), Some("#198754"));
        // Cycles past the end of the array.
        assert_eq!(colors.slice_color(2), Some("#198754"));
    }

    #[test]
    fn chart_payload_decodes_line_shape() {
        let json = r##"{
            "labels": ["2026-01-01", "2026-01-02"],
            "datasets": [{
                "label": "Net Stock Change",
                "data": [4.0, -2.0],
                "borderColor": "#0d6efd",
                "backgroundColor": "rgba(13, 110, 253, 0.1)",
                "tension": 0.1,
                "fill": true
            }]
        }"##;
        let payload: ChartPayload = serde_json::from_str(json).unwrap();
        let dataset = payload.primary().unwrap();
        assert_eq!(dataset.label.as_deref(), Some("Net Stock Change"));
        assert_eq!(
            dataset.background_color.as_ref().unwrap().slice_color(5),
            Some("rgba(13, 110, 253, 0.1)")
        );
        assert_eq!(dataset.fill, Some(true));
    }
}
