//! HTTP client for the Digemart marketplace API.

use crate::config::{ClientConfig, FailurePolicy};
use crate::error::{Error, Result};
use crate::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
use crate::types::{DisplayStore, SearchOutcome, SearchResult};

use super::normalize;
use super::search::{SearchParams, SearchStyle};
use super::types::*;

/// Digemart API client.
///
/// Every call is one request/response round trip. Nothing is cached and
/// nothing is retried.
#[derive(Debug, Clone)]
pub struct ApiClient<T: Transport = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}

impl ApiClient<ReqwestTransport> {
    /// Create a new API client.
    ///
    /// # Arguments
    /// * `api_base` - Base URL of the Digemart API (e.g., "https://api.digemart.com/api")
    pub fn new(api_base: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(api_base))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl Default for ApiClient<ReqwestTransport> {
    fn default() -> Self {
        Self::with_config(ClientConfig::default())
    }
}

impl<T: Transport> ApiClient<T> {
    /// Create a client that sends its requests through `transport`.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.config.api_base()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // Checkout links

    /// Create a gift checkout link for the cart of `address`.
    ///
    /// `payload` is usually a [`GiftCartPayload`]; any serializable object is
    /// forwarded as-is.
    pub async fn create_gift_checkout<P: serde::Serialize + ?Sized>(
        &self,
        address: &str,
        payload: &P,
    ) -> Result<LinkResponse> {
        let url = self.config.user_endpoint(address, &["cart", "gift"])?;
        self.post_link(&url, payload, "Gift API error").await
    }

    /// Create a pay link for the cart of `address`, see [`PayLinkPayload`].
    pub async fn create_pay_link<P: serde::Serialize + ?Sized>(
        &self,
        address: &str,
        payload: &P,
    ) -> Result<LinkResponse> {
        let url = self.config.user_endpoint(address, &["cart", "paylink"])?;
        self.post_link(&url, payload, "Paylink API error").await
    }

    /// Create a share link for the wishlist of `address`, see
    /// [`ShareWishlistPayload`].
    pub async fn create_wishlist_share<P: serde::Serialize + ?Sized>(
        &self,
        address: &str,
        payload: &P,
    ) -> Result<LinkResponse> {
        let url = self.config.user_endpoint(address, &["wishlist", "share"])?;
        self.post_link(&url, payload, "Wishlist share API error")
            .await
    }

    /// Share the wishlist of `address` without customization (sends `{}`).
    pub async fn share_wishlist(&self, address: &str) -> Result<LinkResponse> {
        self.create_wishlist_share(address, &ShareWishlistPayload::default())
            .await
    }

    // Wallet auth

    /// Request a login challenge for `wallet_address`.
    pub async fn wallet_login(&self, wallet_address: &str) -> Result<WalletLoginResponse> {
        let url = self.config.endpoint("/auth/wallet/login");
        let request = WalletLoginRequest {
            wallet_address: wallet_address.to_string(),
        };
        self.post_json(&url, &request, "Wallet login failed").await
    }

    /// Exchange a signed challenge for a bearer token.
    pub async fn wallet_verify(
        &self,
        wallet_address: &str,
        signature: &str,
    ) -> Result<WalletVerifyResponse> {
        let url = self.config.endpoint("/auth/wallet/verify");
        let request = WalletVerifyRequest {
            wallet_address: wallet_address.to_string(),
            signature: signature.to_string(),
        };
        self.post_json(&url, &request, "Wallet verify failed").await
    }

    /// Fetch the profile of the user owning `token`.
    pub async fn fetch_user_profile(&self, token: &str) -> Result<UserProfile> {
        let url = self.config.endpoint("/users/me");
        let response = self
            .send(HttpRequest::get(url.as_str()).bearer(token))
            .await?;
        let response = ensure_success(response, "Profile fetch failed")?;
        decode(&url, &response.body)
    }

    // Landing page

    /// Fetch the featured stores of the landing page.
    pub async fn fetch_top_stores(&self) -> Result<Vec<DisplayStore>> {
        self.featured_stores().await.inspect_err(|e| {
            log::error!("Error fetching featured stores: {}", e);
        })
    }

    async fn featured_stores(&self) -> Result<Vec<DisplayStore>> {
        let url = self.config.endpoint("/landing-page");
        let response = self.send(HttpRequest::get(url.as_str())).await?;
        let response = ensure_success(response, "HTTP error! status")?;
        let page: LandingPageResponse = decode(&url, &response.body)?;

        let stores = match page.data.and_then(|d| d.featured_stores) {
            Some(stores) if page.status => stores,
            _ => {
                return Err(Error::InvalidResponse(
                    "Invalid response format".to_string(),
                ));
            }
        };

        Ok(stores.into_iter().map(normalize::landing_store).collect())
    }

    // Search

    /// Search products, stores and categories.
    ///
    /// `style` selects the query defaults and normalization rules; `policy`
    /// decides what happens when the search request fails. With
    /// [`FailurePolicy::FallbackToFeaturedStores`] only a failure of the
    /// landing-page request reaches the caller.
    pub async fn search(
        &self,
        params: &SearchParams,
        style: SearchStyle,
        policy: FailurePolicy,
    ) -> Result<SearchOutcome> {
        let err = match self.search_remote(params, style).await {
            Ok(outcome) => return Ok(outcome),
            Err(err) => err,
        };

        match policy {
            FailurePolicy::Propagate => {
                log::error!("Error performing search: {}", err);
                Err(err)
            }
            FailurePolicy::FallbackToFeaturedStores => {
                log::warn!(
                    "Search API error: {}; filtering featured stores for {:?}",
                    err,
                    params.term
                );
                let stores = self.fetch_top_stores().await?;
                Ok(normalize::fallback_outcome(normalize::filter_stores(
                    stores,
                    &params.term,
                )))
            }
        }
    }

    /// Search with only the options set in `params`, returning grouped
    /// results and server counts. Errors are returned to the caller.
    pub async fn advanced_search(&self, params: &SearchParams) -> Result<SearchOutcome> {
        if params.is_blank() {
            return Err(Error::InvalidRequest(
                "search term must not be empty".to_string(),
            ));
        }
        self.search(params, SearchStyle::Advanced, FailurePolicy::Propagate)
            .await
    }

    /// Rank-ordered search used by the storefront search box.
    ///
    /// Blank queries return nothing without touching the network. Failures
    /// follow [`ClientConfig::listing_failure_policy`], which by default
    /// degrades to matching featured stores.
    pub async fn search_stores_and_products(
        &self,
        query: &str,
        options: &SearchParams,
    ) -> Result<Vec<SearchResult>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let params = SearchParams {
            term: query.to_string(),
            ..options.clone()
        };
        let outcome = self
            .search(
                &params,
                SearchStyle::Listing,
                self.config.listing_failure_policy,
            )
            .await?;
        Ok(outcome.results)
    }

    async fn search_remote(
        &self,
        params: &SearchParams,
        style: SearchStyle,
    ) -> Result<SearchOutcome> {
        let url = params.to_url(&self.config.search_url(), style)?;
        let response = self.send(HttpRequest::get(url.as_str())).await?;
        let response = ensure_success(response, "Search API error")?;
        let envelope: SearchApiResponse = decode(&url, &response.body)?;

        if !envelope.status {
            return Err(Error::InvalidResponse(
                envelope
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "Search failed".to_string()),
            ));
        }
        let data = envelope
            .data
            .ok_or_else(|| Error::InvalidResponse("Invalid API response".to_string()))?;

        Ok(normalize::search_outcome(data, style))
    }

    // Helper methods

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        log::debug!("{} {}", request.method, request.url);
        let response = self.transport.execute(request).await?;
        log::debug!("response {}: {}", response.status, response.body);
        Ok(response)
    }

    async fn post_json<R, B>(&self, url: &str, body: &B, context: &str) -> Result<R>
    where
        R: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        let response = self.send(HttpRequest::post(url, body)).await?;
        let response = ensure_success(response, context)?;
        decode(url, &response.body)
    }

    async fn post_link<B: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
        context: &str,
    ) -> Result<LinkResponse> {
        let value: serde_json::Value = self.post_json(url, body, context).await?;
        Ok(LinkResponse {
            link: normalize::parse_link(&value).unwrap_or_default(),
        })
    }
}

fn ensure_success(response: HttpResponse, context: &str) -> Result<HttpResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(Error::http(response.status, context))
    }
}

fn decode<R: serde::de::DeserializeOwned>(url: &str, body: &str) -> Result<R> {
    serde_json::from_str(body).map_err(|e| {
        Error::Parse(format!(
            "Failed to parse response from {}: {}. Body: {}",
            url, e, body
        ))
    })
}
