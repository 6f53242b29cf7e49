//! API utilities for frontend-backend communication
//!
//! The JSON endpoints answer either their payload or an `{error}` envelope;
//! `get_json`/`post_json` fold both (plus transport failures) into
//! `Result<T, String>` so callers surface one message and move on.

use contracts::ApiOutcome;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// The API is served from the same origin as the app, so this is just the
/// current window origin (empty outside a browser).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET a JSON endpoint.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    decode(response).await
}

/// POST a JSON body.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    let ok = response.ok();
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    // Error envelopes arrive with 4xx/5xx statuses; prefer the server's own
    // message over a bare status code when the body parses.
    match serde_json::from_str::<ApiOutcome<T>>(&text) {
        Ok(outcome) => outcome.into_result(),
        Err(_) if !ok => Err(format!("HTTP error: {}", status)),
        Err(e) => Err(format!("Failed to parse response: {}", e)),
    }
}
