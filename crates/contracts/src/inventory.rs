//! Parts table, search and stock-adjustment payloads.

use serde::{Deserialize, Serialize};

/// One row of the parts table.
///
/// `/api/inventory/list` returns the whole table as these; `/api/inventory/search`
/// returns the ranked subset matching `q`. Display-only projection: the part
/// number doubles as the lookup key for the detail fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartSummary {
    pub id: i64,
    pub part_number: String,
    pub description: String,
    pub supplier: String,
    pub location: String,
    pub quantity: i64,
    /// Ownership category (Mechanical/Electrical in the seed data).
    #[serde(rename = "type")]
    pub kind: String,
}

/// Component attributes shown in the detail dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDetail {
    pub component_id: i64,
    pub supplier_part_number: String,
    pub description: String,
    pub supplier_name: String,
    pub current_quantity: i64,
    pub location_code: String,
    pub owner: String,
}

/// `/api/inventory/component/{partNumber}` success payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentPayload {
    pub component: ComponentDetail,
    pub transactions: Vec<TransactionRecord>,
}

/// One line of a component's movement history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// ISO datetime as sent by the server.
    pub transaction_date: String,
    pub transaction_type: TransactionKind,
    pub quantity: i64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Stock movement direction. The wire values are the database CHECK constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "OUT")]
    Out,
    #[serde(rename = "ADJUST")]
    Adjust,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 3] =
        [TransactionKind::In, TransactionKind::Out, TransactionKind::Adjust];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::In => "IN",
            TransactionKind::Out => "OUT",
            TransactionKind::Adjust => "ADJUST",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "IN" => Some(TransactionKind::In),
            "OUT" => Some(TransactionKind::Out),
            "ADJUST" => Some(TransactionKind::Adjust),
            _ => None,
        }
    }

    /// Badge tone used wherever a transaction type is rendered.
    pub fn badge_tone(&self) -> &'static str {
        match self {
            TransactionKind::In => "success",
            TransactionKind::Out => "danger",
            TransactionKind::Adjust => "warning",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/inventory/update`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateRequest {
    pub component_id: i64,
    pub quantity: u32,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub notes: String,
    pub user_id: String,
}

impl UpdateRequest {
    pub fn new(component_id: i64, quantity: u32, kind: TransactionKind, notes: String) -> Self {
        Self {
            component_id,
            quantity,
            kind,
            notes,
            // The API requires an operator id; there is no login in this app.
            user_id: "system".to_string(),
        }
    }
}

/// `POST /api/inventory/update` success payload.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAck {
    pub success: bool,
}

/// Why a quantity input was rejected before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    Empty,
    NotANumber,
    Negative,
}

impl std::fmt::Display for QuantityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuantityError::Empty => write!(f, "Please enter a quantity"),
            QuantityError::NotANumber => write!(f, "Please enter a valid quantity"),
            QuantityError::Negative => write!(f, "Quantity cannot be negative"),
        }
    }
}

/// Gate for the adjustment dialog: quantities are non-negative integers.
///
/// Submission is blocked on any `Err`; no request leaves the browser.
pub fn parse_quantity(input: &str) -> Result<u32, QuantityError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(QuantityError::Empty);
    }
    if let Some(rest) = trimmed.strip_prefix('-') {
        if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()) {
            return Err(QuantityError::Negative);
        }
    }
    trimmed.parse::<u32>().map_err(|_| QuantityError::NotANumber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_quantities_pass() {
        assert_eq!(parse_quantity("0"), Ok(0));
        assert_eq!(parse_quantity("42"), Ok(42));
        assert_eq!(parse_quantity("  7  "), Ok(7));
    }

    #[test]
    fn negative_quantity_is_blocked() {
        assert_eq!(parse_quantity("-1"), Err(QuantityError::Negative));
        assert_eq!(parse_quantity("-250"), Err(QuantityError::Negative));
    }

    #[test]
    fn non_numeric_quantity_is_blocked() {
        assert_eq!(parse_quantity("abc"), Err(QuantityError::NotANumber));
        assert_eq!(parse_quantity("5.5"), Err(QuantityError::NotANumber));
        assert_eq!(parse_quantity("1e3"), Err(QuantityError::NotANumber));
        assert_eq!(parse_quantity(""), Err(QuantityError::Empty));
        assert_eq!(parse_quantity("   "), Err(QuantityError::Empty));
    }

    #[test]
    fn transaction_kind_wire_names() {
        for kind in TransactionKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            assert_eq!(TransactionKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(TransactionKind::from_str("in"), None);
    }

    #[test]
    fn badge_tones() {
        assert_eq!(TransactionKind::In.badge_tone(), "success");
        assert_eq!(TransactionKind::Out.badge_tone(), "danger");
        assert_eq!(TransactionKind::Adjust.badge_tone(), "warning");
    }

    #[test]
    fn update_request_wire_shape() {
        let request = UpdateRequest::new(17, 5, TransactionKind::Out, "scrapped".to_string());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["component_id"], 17);
        assert_eq!(json["quantity"], 5);
        assert_eq!(json["type"], "OUT");
        assert_eq!(json["user_id"], "system");
    }

    #[test]
    fn part_summary_kind_uses_type_on_the_wire() {
        let json = r#"{"id":1,"part_number":"PN-1","description":"Widget",
                       "supplier":"Acme","location":"A1","quantity":3,"type":"Mechanical"}"#;
        let row: PartSummary = serde_json::from_str(json).unwrap();
        assert_eq!(row.kind, "Mechanical");
    }
}
