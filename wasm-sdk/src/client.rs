use crate::LinkResponse;
use crate::WalletLoginResponse;
use crate::to_js_value;
use crate::{invalid_argument, to_js_error};
use digemart_core::api::SearchParams;
use digemart_core::{ApiClient, ClientConfig};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

/// Read an optional JS object argument, treating `undefined`/`null` as the
/// type's default.
fn from_js_or_default<T>(value: JsValue, what: &str) -> Result<T, JsValue>
where
    T: serde::de::DeserializeOwned + Default,
{
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| invalid_argument(what, e))
}

/// Checkout payloads are forwarded as-is; a missing payload is sent as `{}`.
fn payload_from_js(payload: JsValue) -> Result<serde_json::Value, JsValue> {
    if payload.is_undefined() || payload.is_null() {
        return Ok(serde_json::json!({}));
    }
    serde_wasm_bindgen::from_value(payload).map_err(|e| invalid_argument("payload", e))
}

/// Digemart API client.
#[wasm_bindgen]
pub struct Client {
    inner: ApiClient,
}

#[wasm_bindgen]
impl Client {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `config` - Optional `{ apiBase?, searchUrl?, listingFailurePolicy? }`
    ///   where the policy is `"propagate"` or `"fallbackToFeaturedStores"`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<Client, JsValue> {
        let config: ClientConfig = from_js_or_default(config, "client config")?;
        log::debug!("Digemart client for {}", config.api_base());
        Ok(Client {
            inner: ApiClient::with_config(config),
        })
    }

    #[wasm_bindgen(getter, js_name = "baseUrl")]
    pub fn base_url(&self) -> String {
        self.inner.base_url().to_string()
    }

    /// Create a gift checkout link.
    #[wasm_bindgen(js_name = "createGiftCheckout")]
    pub async fn create_gift_checkout(
        &self,
        address: String,
        payload: JsValue,
    ) -> Result<LinkResponse, JsValue> {
        let payload = payload_from_js(payload)?;
        let link = self
            .inner
            .create_gift_checkout(&address, &payload)
            .await
            .map_err(to_js_error)?;
        Ok(link.into())
    }

    /// Create a pay link.
    #[wasm_bindgen(js_name = "createPayLink")]
    pub async fn create_pay_link(
        &self,
        address: String,
        payload: JsValue,
    ) -> Result<LinkResponse, JsValue> {
        let payload = payload_from_js(payload)?;
        let link = self
            .inner
            .create_pay_link(&address, &payload)
            .await
            .map_err(to_js_error)?;
        Ok(link.into())
    }

    /// Create a wishlist share link.
    #[wasm_bindgen(js_name = "createWishlistShare")]
    pub async fn create_wishlist_share(
        &self,
        address: String,
        payload: JsValue,
    ) -> Result<LinkResponse, JsValue> {
        let payload = payload_from_js(payload)?;
        let link = self
            .inner
            .create_wishlist_share(&address, &payload)
            .await
            .map_err(to_js_error)?;
        Ok(link.into())
    }

    #[wasm_bindgen(js_name = "walletLogin")]
    pub async fn wallet_login(&self, wallet_address: String) -> Result<WalletLoginResponse, JsValue> {
        let challenge = self
            .inner
            .wallet_login(&wallet_address)
            .await
            .map_err(to_js_error)?;
        Ok(challenge.into())
    }

    /// Returns `{ message, token, user: { id, email, walletAddress, role } }`.
    #[wasm_bindgen(js_name = "walletVerify")]
    pub async fn wallet_verify(
        &self,
        wallet_address: String,
        signature: String,
    ) -> Result<JsValue, JsValue> {
        let session = self
            .inner
            .wallet_verify(&wallet_address, &signature)
            .await
            .map_err(to_js_error)?;
        to_js_value(&session)
    }

    #[wasm_bindgen(js_name = "fetchUserProfile")]
    pub async fn fetch_user_profile(&self, token: String) -> Result<JsValue, JsValue> {
        let profile = self
            .inner
            .fetch_user_profile(&token)
            .await
            .map_err(to_js_error)?;
        to_js_value(&profile)
    }

    /// Featured stores of the landing page as `DisplayStore` objects.
    #[wasm_bindgen(js_name = "fetchTopStores")]
    pub async fn fetch_top_stores(&self) -> Result<JsValue, JsValue> {
        let stores = self
            .inner
            .fetch_top_stores()
            .await
            .map_err(to_js_error)?;
        to_js_value(&stores)
    }

    /// Returns `{ results, counts }`.
    #[wasm_bindgen(js_name = "advancedSearch")]
    pub async fn advanced_search(&self, params: JsValue) -> Result<JsValue, JsValue> {
        let params: SearchParams = serde_wasm_bindgen::from_value(params)
            .map_err(|e| invalid_argument("search params", e))?;
        let outcome = self
            .inner
            .advanced_search(&params)
            .await
            .map_err(to_js_error)?;
        to_js_value(&outcome)
    }

    /// Rank-ordered results for the search box.
    #[wasm_bindgen(js_name = "searchStoresAndProducts")]
    pub async fn search_stores_and_products(
        &self,
        query: String,
        options: JsValue,
    ) -> Result<JsValue, JsValue> {
        let options: SearchParams = from_js_or_default(options, "search options")?;
        let results = self
            .inner
            .search_stores_and_products(&query, &options)
            .await
            .map_err(to_js_error)?;
        to_js_value(&results)
    }
}
