//! Shared utilities for the web bindings

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Console.log binding for WASM
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);

    /// Console.warn binding for WASM
    #[wasm_bindgen(js_namespace = console)]
    pub fn warn(s: &str);
}

/// Global `window`, or a JS error when running outside a browser
pub fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

/// `document.body` of the current page
pub fn body(document: &web_sys::Document) -> Result<web_sys::HtmlElement, JsValue> {
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))
}
