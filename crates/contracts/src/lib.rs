//! Wire contracts shared between the frontend and the inventory API.
//!
//! Every type here mirrors a payload the HTTP API actually emits or accepts;
//! field names are the wire contract and must not drift.

pub mod import_csv;
pub mod inventory;
pub mod reports;
pub mod transactions;

use serde::Deserialize;

/// Either a payload or the server's `{error: "..."}` envelope.
///
/// Every read endpoint answers with one of the two; the envelope carries the
/// server-side message verbatim and is shown to the operator as-is.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiOutcome<T> {
    // Tried first so a bare `{error}` is never swallowed by a permissive T.
    Error { error: String },
    Ok(T),
}

impl<T> ApiOutcome<T> {
    pub fn into_result(self) -> Result<T, String> {
        match self {
            ApiOutcome::Ok(value) => Ok(value),
            ApiOutcome::Error { error } => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_decodes_payload() {
        let outcome: ApiOutcome<Vec<i32>> = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(outcome.into_result().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn outcome_decodes_error_envelope() {
        let outcome: ApiOutcome<Vec<i32>> =
            serde_json::from_str(r#"{"error": "Component not found"}"#).unwrap();
        assert_eq!(
            outcome.into_result().unwrap_err(),
            "Component not found".to_string()
        );
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        let outcome: Result<ApiOutcome<Vec<i32>>, _> = serde_json::from_str(r#"{"rows": 3}"#);
        assert!(outcome.is_err());
    }
}
