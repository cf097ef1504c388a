//! Digemart Client SDK - WASM Bindings
//!
//! This crate provides WebAssembly bindings for the Digemart Client SDK.
//! It wraps the core API client with JS-friendly types so the storefront UI
//! can call it directly.
//!
//! **Note:** This crate is WASM-only and will not compile for native targets.
//!
//! # Usage from JavaScript/TypeScript
//!
//! ```javascript
//! import init, { Client, formatLocation } from '@digemart/sdk';
//!
//! // Initialize WASM
//! await init();
//!
//! // Defaults to https://api.digemart.com/api
//! const client = new Client();
//!
//! // Featured stores for the landing page
//! const stores = await client.fetchTopStores();
//!
//! // Search box; degrades to featured stores when search is down
//! const results = await client.searchStoresAndProducts('lagos', { productLimit: 5 });
//!
//! // Wallet login
//! const { nonce, message } = await client.walletLogin(address);
//! const session = await client.walletVerify(address, await signer.signMessage(message));
//! ```

// This crate only compiles for WASM targets
#![cfg(target_arch = "wasm32")]

mod client;
mod error;
mod js_types;

use serde::Serialize;
use wasm_bindgen::prelude::*;

pub use client::*;
pub use error::*;
pub use js_types::*;

/// Initialize the WASM module.
///
/// This sets up logging and panic hooks for better debugging.
#[wasm_bindgen(start)]
pub fn initialize() {
    // Set up panic hook for better error messages
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(log::Level::Debug).ok();
    log::info!("Digemart SDK initialized");
}

/// Serialize a value to JsValue as a plain object (not a Map).
fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Format a raw price, keeping existing currency glyphs (`"500"` → `"$500.00"`).
#[wasm_bindgen(js_name = "formatCurrency")]
pub fn format_currency(price: &str) -> String {
    digemart_core::format_currency(price)
}

/// Format a numeric string as en-US dollars (`"1234.5"` → `"$1,234.50"`).
#[wasm_bindgen(js_name = "formatPrice")]
pub fn format_price(price: &str) -> String {
    digemart_core::format_price(price)
}

/// Render a city/state pair, or "Location not specified".
#[wasm_bindgen(js_name = "formatLocation")]
pub fn format_location(city: Option<String>, state: Option<String>) -> String {
    digemart_core::format_location(city.as_deref(), state.as_deref())
}

/// Extract a checkout link from `{link}` or `{data: {link}}`.
#[wasm_bindgen(js_name = "parseLink")]
pub fn parse_link(body: JsValue) -> Option<String> {
    let body: serde_json::Value = serde_wasm_bindgen::from_value(body).ok()?;
    digemart_core::api::parse_link(&body)
}
