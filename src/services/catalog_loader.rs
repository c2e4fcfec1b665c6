use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::CatalogError;
use crate::models::{Catalog, ProductRecord};

/// Fetch and decode the catalog document at `url`.
///
/// A `null` document, a non-2xx status and malformed JSON are all errors;
/// callers fall back to an empty catalog.
#[allow(clippy::future_not_send)]
pub async fn fetch_catalog(url: &str) -> Result<Catalog, CatalogError> {
    let window = web_sys::window().ok_or(CatalogError::NoWindow)?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| CatalogError::Network(js_error_to_string(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| CatalogError::Network("fetch did not resolve to a Response".to_string()))?;

    read_catalog(&response).await
}

/// Turn a settled fetch response into a catalog.
#[allow(clippy::future_not_send)]
pub async fn read_catalog(response: &Response) -> Result<Catalog, CatalogError> {
    ensure_success(response.status())?;

    let body = response
        .json()
        .map_err(|e| CatalogError::Decode(js_error_to_string(&e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| CatalogError::Decode(js_error_to_string(&e)))?;

    decode_catalog(body)
}

/// Map an HTTP status to an error unless it is 2xx (what `Response.ok` checks).
pub fn ensure_success(status: u16) -> Result<(), CatalogError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(CatalogError::Status(status))
    }
}

/// Decode a parsed JSON body. `null` is `MissingData`; anything that is not
/// an array of product records is `Decode`.
pub fn decode_catalog(body: JsValue) -> Result<Catalog, CatalogError> {
    let payload = serde_wasm_bindgen::from_value::<Option<Vec<ProductRecord>>>(body)
        .map_err(|e| CatalogError::Decode(e.to_string()))?;

    Catalog::from_payload(payload)
}

fn js_error_to_string(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}
