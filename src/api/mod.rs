//! REST API Client
//!
//! Thin fetch wrappers over the parking backend, organized by domain.
//! Every function resolves to `Result<T, String>`; list endpoints are
//! unwrapped from their `{"data": [...], "count": N}` envelope here so
//! pages only ever see plain vectors.

mod residents;
mod subscriptions;
mod visitors;
mod supervisors;
mod dashboard;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

// Re-export all public items
pub use residents::*;
pub use subscriptions::*;
pub use visitors::*;
pub use supervisors::*;
pub use dashboard::*;

const DEFAULT_BASE: &str = "http://localhost:8000";

fn api_base() -> &'static str {
    option_env!("PARKING_API_URL").unwrap_or(DEFAULT_BASE)
}

async fn request(method: &str, path: &str, body: Option<String>) -> Result<JsValue, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let url = format!("{}{}", api_base(), path);
    let request =
        Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("bad request: {e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("headers: {e:?}"))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("network error: {e:?}"))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| format!("not a Response: {e:?}"))?;

    if !response.ok() {
        return Err(format!("HTTP {} for {}", response.status(), path));
    }

    let json = response.json().map_err(|e| format!("body: {e:?}"))?;
    JsFuture::from(json)
        .await
        .map_err(|e| format!("invalid JSON from {path}: {e:?}"))
}

pub(crate) async fn get<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let value = request("GET", path, None).await?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let body = serde_json::to_string(body).map_err(|e| e.to_string())?;
    let value = request("POST", path, Some(body)).await?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

/// POST whose response body the caller does not care about.
pub(crate) async fn post_discard<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let body = serde_json::to_string(body).map_err(|e| e.to_string())?;
    request("POST", path, Some(body)).await.map(|_| ())
}

pub(crate) async fn delete(path: &str) -> Result<(), String> {
    request("DELETE", path, None).await.map(|_| ())
}
