//! Client configuration.

use crate::error::{Error, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Production API base.
pub const DEFAULT_API_BASE: &str = "https://api.digemart.com/api";

/// What a search does when the primary search request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FailurePolicy {
    /// Return the error to the caller.
    Propagate,
    /// Filter the featured stores from the landing page by the search term.
    #[default]
    #[serde(alias = "fallback_to_featured_stores")]
    FallbackToFeaturedStores,
}

/// Configuration for [`crate::ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Base URL including the `/api` suffix.
    #[serde(alias = "api_base")]
    pub api_base: String,
    /// Explicit search endpoint. `None` means `{api_base}/search`.
    #[serde(alias = "search_url")]
    pub search_url: Option<String>,
    /// Policy applied by [`crate::ApiClient::search_stores_and_products`].
    #[serde(alias = "listing_failure_policy")]
    pub listing_failure_policy: FailurePolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            search_url: None,
            listing_failure_policy: FailurePolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Create a config for an API base such as "https://api.digemart.com/api".
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Create a config for a bare origin, appending the `/api` suffix.
    pub fn for_origin(origin: impl AsRef<str>) -> Self {
        Self::new(format!("{}/api", origin.as_ref().trim_end_matches('/')))
    }

    pub fn with_search_url(mut self, search_url: impl Into<String>) -> Self {
        self.search_url = Some(search_url.into());
        self
    }

    pub fn with_listing_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.listing_failure_policy = policy;
        self
    }

    /// Base URL without a trailing slash.
    pub fn api_base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }

    /// Endpoint used by every search.
    pub fn search_url(&self) -> String {
        match &self.search_url {
            Some(url) => url.clone(),
            None => format!("{}/search", self.api_base()),
        }
    }

    /// Join an endpoint path such as `/landing-page` onto the base.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base(), path)
    }

    /// Build `/users/{address}/...`, percent-encoding the address as a single
    /// path segment.
    pub(crate) fn user_endpoint(&self, address: &str, rest: &[&str]) -> Result<String> {
        let mut url = Url::parse(self.api_base())
            .map_err(|e| Error::InvalidRequest(format!("invalid API base {}: {}", self.api_base, e)))?;
        url.path_segments_mut()
            .map_err(|_| Error::InvalidRequest(format!("API base {} cannot hold a path", self.api_base)))?
            .pop_if_empty()
            .push("users")
            .push(address)
            .extend(rest);
        Ok(url.into())
    }
}
