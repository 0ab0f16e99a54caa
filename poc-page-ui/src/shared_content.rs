//! One-shot fetch of the shared content snippet.
//!
//! A single GET with cache bypass; no retry and no timeout. Failures come
//! back as `ContentError` so the caller can render the inline message.

use poc_core::content::check_status;
use poc_core::settings::SHARED_CONTENT_SELECTOR;
use poc_core::ContentError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Request, RequestCache, RequestInit, Response};

use crate::dom;

/// The `[data-shared-content]` container, if this page has one.
pub fn find_container(document: &Document) -> Option<Element> {
    document.query_selector(SHARED_CONTENT_SELECTOR).ok().flatten()
}

/// Fetch `path` as text.
pub async fn fetch_shared_text(path: &str) -> Result<String, ContentError> {
    let window = dom::window().ok_or_else(|| ContentError::Network("window is unavailable".into()))?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_cache(RequestCache::NoCache);
    let request = Request::new_with_str_and_init(path, &init)
        .map_err(|e| ContentError::Network(js_error_message(&e)))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ContentError::Network(js_error_message(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ContentError::Body("fetch did not resolve to a Response".into()))?;

    check_status(response.status())?;

    let body = response
        .text()
        .map_err(|e| ContentError::Body(js_error_message(&e)))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| ContentError::Body(js_error_message(&e)))?;

    text.as_string()
        .ok_or_else(|| ContentError::Body("response body is not text".into()))
}

/// Human-readable description of a thrown JS value (`Error.message` when it
/// is an `Error`).
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
