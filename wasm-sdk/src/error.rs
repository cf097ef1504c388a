//! Error conversion utilities for WASM.

use js_sys::Reflect;
use wasm_bindgen::prelude::*;

/// Convert an SDK error into a JS `Error`.
///
/// HTTP failures additionally carry a numeric `status` property so UI code can
/// branch on it (`if (e.status === 401) ...`).
pub fn to_js_error(err: digemart_core::Error) -> JsValue {
    let js_err = js_sys::Error::new(&err.to_string());
    if let Some(status) = err.status() {
        // Setting a property on a fresh Error object cannot fail.
        let _ = Reflect::set(
            &js_err,
            &JsValue::from_str("status"),
            &JsValue::from_f64(f64::from(status)),
        );
    }
    js_err.into()
}

/// Convert a payload decoding error into a JS `TypeError`.
pub fn invalid_argument(what: &str, err: serde_wasm_bindgen::Error) -> JsValue {
    js_sys::TypeError::new(&format!("Invalid {}: {}", what, err)).into()
}
