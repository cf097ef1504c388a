//! API types for the Digemart backend.
//!
//! These types match the backend API schema and are used for request/response
//! serialization. Each endpoint family has its own raw shape; see
//! [`super::normalize`] for how they become display records.

use crate::types::{EntityId, SearchCounts};
use serde::{Deserialize, Deserializer, Serialize};

/// Serde helpers for fields the backend sends with inconsistent JSON types.
mod lenient {
    use super::*;
    use serde_json::Value;

    /// Accept a JSON number; anything else (string, bool, object) becomes `None`.
    pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(|v| v.as_f64()))
    }

    /// Accept a non-negative JSON integer; anything else becomes `None`.
    pub fn count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(|v| v.as_u64()))
    }

    /// Accept a string or a number and keep its textual form.
    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        })
    }

    /// Accept a numeric or string id; a missing or malformed id becomes the default.
    pub fn id<'de, D>(deserializer: D) -> Result<EntityId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Number(n)) => match n.as_i64() {
                Some(id) => EntityId::Number(id),
                None => EntityId::Text(n.to_string()),
            },
            Some(Value::String(s)) => EntityId::Text(s),
            _ => EntityId::default(),
        })
    }

    /// Read a flag by JavaScript truthiness (`1`, `"yes"` and objects are set;
    /// `0`, `""` and `false` are not). `null` stays `None`.
    pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(|v| match v {
            Value::Null => None,
            Value::Bool(b) => Some(b),
            Value::Number(n) => Some(n.as_f64().is_some_and(|f| f != 0.0)),
            Value::String(s) => Some(!s.is_empty()),
            Value::Array(_) | Value::Object(_) => Some(true),
        }))
    }
}

// ============================================================================
// Landing page
// ============================================================================

/// Envelope returned by `GET /landing-page`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandingPageResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<LandingPageData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPageData {
    #[serde(default)]
    pub featured_stores: Option<Vec<LandingStore>>,
}

/// Store record of the landing page.
///
/// The landing endpoint has been served by two generations of the store model.
/// Current deployments send the canonical fields (`storeName`, `averageRating`,
/// `storeAddress`, ...); older ones send the short aliases (`name`, `rating`,
/// `location`, ...). Both sets are kept so normalization can prefer the
/// canonical value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingStore {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: EntityId,

    // Canonical fields
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub store_category: Option<StoreCategory>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub average_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_ratings: Option<u64>,
    #[serde(default)]
    pub store_address: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub store_url: Option<String>,

    // Legacy aliases
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub reviews: Option<u64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub location_city: Option<String>,
    #[serde(default)]
    pub location_state: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub verified: Option<bool>,
}

/// Category attached to a landing-page store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreCategory {
    #[serde(default)]
    pub description: Option<String>,
}

// ============================================================================
// Search
// ============================================================================

/// Envelope returned by `GET /search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchApiResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<SearchData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchData {
    #[serde(default)]
    pub products: Option<Vec<SearchProduct>>,
    #[serde(default)]
    pub stores: Option<Vec<SearchStore>>,
    #[serde(default)]
    pub categories: Option<Vec<SearchCategory>>,
    #[serde(default)]
    pub counts: Option<SearchCounts>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchProduct {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Raw price; usually a numeric string, sometimes already formatted.
    #[serde(default, deserialize_with = "lenient::text")]
    pub price: String,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub store_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub location_city: Option<String>,
    #[serde(default)]
    pub location_state: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub rank: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStore {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub reviews: Option<u64>,
    #[serde(default)]
    pub location_city: Option<String>,
    #[serde(default)]
    pub location_state: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub verified: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCategory {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

// ============================================================================
// Checkout links
// ============================================================================

macro_rules! checkout_payload {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        ///
        /// The field set is owned by the server; the payload is forwarded as a
        /// JSON object and `Default` sends `{}`.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            #[serde(flatten)]
            pub fields: serde_json::Map<String, serde_json::Value>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Set a top-level field.
            pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
                self.fields.insert(key.into(), value.into());
                self
            }
        }

        impl From<serde_json::Map<String, serde_json::Value>> for $name {
            fn from(fields: serde_json::Map<String, serde_json::Value>) -> Self {
                Self { fields }
            }
        }
    };
}

checkout_payload!(
    /// Body of `POST /users/{address}/cart/gift`.
    GiftCartPayload
);
checkout_payload!(
    /// Body of `POST /users/{address}/cart/paylink`.
    PayLinkPayload
);
checkout_payload!(
    /// Body of `POST /users/{address}/wishlist/share`.
    ShareWishlistPayload
);

/// Link created by the gift, pay-link and wishlist-share endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkResponse {
    pub link: String,
}

// ============================================================================
// Wallet auth
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletLoginRequest {
    pub wallet_address: String,
}

/// Challenge to be signed by the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletLoginResponse {
    pub nonce: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletVerifyRequest {
    pub wallet_address: String,
    pub signature: String,
}

/// Bearer token issued after a successful signature check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletVerifyResponse {
    pub message: String,
    pub token: String,
    pub user: WalletUser,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletUser {
    pub id: i64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub wallet_address: Option<String>,
    pub role: String,
}

/// Body of `GET /users/me`. The profile schema is owned by the server.
pub type UserProfile = serde_json::Value;
