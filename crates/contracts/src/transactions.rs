//! Transaction history list payloads.

use crate::inventory::TransactionKind;
use serde::{Deserialize, Serialize};

/// One row of `/api/transactions`, newest first.
///
/// Joins the component's part number and description onto the movement so the
/// history page needs no second fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRow {
    pub transaction_date: String,
    pub part_number: String,
    pub description: String,
    pub transaction_type: TransactionKind,
    pub quantity: i64,
    pub previous_quantity: i64,
    pub new_quantity: i64,
    pub user_id: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_decodes_with_and_without_notes() {
        let json = r#"{
            "transaction_date": "2026-03-01T09:30:00Z",
            "part_number": "PN-100",
            "description": "Bearing",
            "transaction_type": "OUT",
            "quantity": 2,
            "previous_quantity": 10,
            "new_quantity": 8,
            "user_id": "system"
        }"#;
        let row: TransactionRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.transaction_type, TransactionKind::Out);
        assert_eq!(row.notes, None);
    }
}
