//! Reporting endpoints.

use crate::shared::api_utils::get_json;
use contracts::reports::{ChartPayload, DateRange, ReportSummary};

/// Tiles, low-stock table and recent transactions.
pub async fn fetch_summary() -> Result<ReportSummary, String> {
    get_json("/api/reports/summary").await
}

/// Inventory value grouped by category, doughnut-shaped.
pub async fn fetch_category_value() -> Result<ChartPayload, String> {
    get_json("/api/reports/category-value").await
}

/// Net stock change per day over the range.
pub async fn fetch_stock_movement(range: &DateRange) -> Result<ChartPayload, String> {
    get_json(&format!(
        "/api/reports/stock-movement?{}",
        range.query_string()
    ))
    .await
}
