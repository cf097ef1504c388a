//! WASM-friendly type wrappers.
//!
//! Flat results get their own `#[wasm_bindgen]` classes; nested ones (search
//! results, wallet sessions) are returned as plain objects.

use digemart_core::api as core_api;
use wasm_bindgen::prelude::*;

/// Checkout or share link.
#[wasm_bindgen(getter_with_clone)]
#[derive(Debug, Clone)]
pub struct LinkResponse {
    /// Empty when the server did not return a link.
    pub link: String,
}

impl From<core_api::LinkResponse> for LinkResponse {
    fn from(r: core_api::LinkResponse) -> Self {
        LinkResponse { link: r.link }
    }
}

/// Challenge to be signed by the user's wallet.
#[wasm_bindgen(getter_with_clone)]
#[derive(Debug, Clone)]
pub struct WalletLoginResponse {
    pub nonce: String,
    /// Message to pass to the wallet's `signMessage`.
    pub message: String,
}

impl From<core_api::WalletLoginResponse> for WalletLoginResponse {
    fn from(r: core_api::WalletLoginResponse) -> Self {
        WalletLoginResponse {
            nonce: r.nonce,
            message: r.message,
        }
    }
}
