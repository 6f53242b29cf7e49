//! Import endpoints.
//!
//! The upload is a multipart form post, so this client speaks `web_sys` fetch
//! directly; the browser supplies the multipart boundary itself.

use crate::shared::api_utils::api_url;
use contracts::import_csv::{ImportAck, ImportStatus};
use contracts::ApiOutcome;
use wasm_bindgen::JsCast;
use web_sys::{window, FormData, RequestInit, RequestMode, Response};

/// Upload the chosen CSV file (form field `file`).
pub async fn upload_csv(form: &FormData) -> Result<ImportAck, String> {
    let window = window().ok_or("No window object")?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    // No Content-Type header: fetch derives the multipart boundary from the body.
    opts.set_body(form.as_ref());

    let request = web_sys::Request::new_with_str_and_init(&api_url("/import"), &opts)
        .map_err(|e| format!("Failed to create request: {:?}", e))?;

    let response_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {:?}", e))?;
    let response: Response = response_value.dyn_into().map_err(|_| "Not a Response")?;

    let ok = response.ok();
    let status = response.status();
    let json = wasm_bindgen_futures::JsFuture::from(
        response
            .json()
            .map_err(|e| format!("Failed to parse JSON: {:?}", e))?,
    )
    .await
    .map_err(|e| format!("Failed to get JSON: {:?}", e))?;

    // Rejections arrive as `{error}` with a 4xx/5xx status; keep the message.
    match serde_wasm_bindgen::from_value::<ApiOutcome<ImportAck>>(json) {
        Ok(outcome) => outcome.into_result(),
        Err(_) if !ok => Err(format!("HTTP error: {}", status)),
        Err(e) => Err(e.to_string()),
    }
}

/// One tick of the import status poll.
pub async fn fetch_status() -> Result<ImportStatus, String> {
    let window = window().ok_or("No window object")?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = web_sys::Request::new_with_str_and_init(&api_url("/api/import/status"), &opts)
        .map_err(|e| format!("Failed to create request: {:?}", e))?;

    let response_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {:?}", e))?;
    let response: Response = response_value.dyn_into().map_err(|_| "Not a Response")?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let json = wasm_bindgen_futures::JsFuture::from(
        response
            .json()
            .map_err(|e| format!("Failed to parse JSON: {:?}", e))?,
    )
    .await
    .map_err(|e| format!("Failed to get JSON: {:?}", e))?;

    let status: ImportStatus = serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())?;
    Ok(status)
}
