//! Transaction history endpoint.

use crate::shared::api_utils::get_json;
use contracts::transactions::TransactionRow;

/// Recent transactions, newest first.
pub async fn fetch_transactions() -> Result<Vec<TransactionRow>, String> {
    get_json("/api/transactions").await
}
