//! Inventory endpoints.

use crate::shared::api_utils::{get_json, post_json};
use contracts::inventory::{ComponentPayload, PartSummary, UpdateAck, UpdateRequest};

/// Full parts table.
pub async fn fetch_parts() -> Result<Vec<PartSummary>, String> {
    get_json("/api/inventory/list").await
}

/// Ranked matches for the incremental search.
pub async fn search_parts(query: &str) -> Result<Vec<PartSummary>, String> {
    get_json(&format!(
        "/api/inventory/search?q={}",
        urlencoding::encode(query)
    ))
    .await
}

/// Attributes plus movement history for one component.
pub async fn fetch_component(part_number: &str) -> Result<ComponentPayload, String> {
    get_json(&format!(
        "/api/inventory/component/{}",
        urlencoding::encode(part_number)
    ))
    .await
}

/// Post a stock movement. A `{success: false}` ack without a message is still
/// a failure for the caller.
pub async fn post_update(request: &UpdateRequest) -> Result<(), String> {
    let ack: UpdateAck = post_json("/api/inventory/update", request).await?;
    if ack.success {
        Ok(())
    } else {
        Err("Error updating inventory".to_string())
    }
}
