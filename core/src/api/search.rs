//! Search parameters and query-string construction.

use crate::error::{Error, Result};
use crate::types::EntityId;
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Listing searches ask for this many products and stores when unset.
pub const DEFAULT_ENTITY_LIMIT: u32 = 10;
/// Listing searches ask for this many categories when unset.
pub const DEFAULT_CATEGORY_LIMIT: u32 = 5;

/// Which set of query defaults and normalization rules a search uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStyle {
    /// Only the parameters the caller set; results grouped by entity with
    /// counts.
    Advanced,
    /// Explicit limits and entity type; results ordered by rank.
    Listing,
}

/// Options of a product/store/category search.
///
/// Unset numeric options are omitted from the query (or replaced by the
/// listing defaults). Zero counts as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchParams {
    pub term: String,
    /// "all", "products", "stores" or "categories".
    pub entity_type: Option<String>,
    pub product_limit: Option<u32>,
    pub store_limit: Option<u32>,
    pub category_limit: Option<u32>,
    /// Pagination offset.
    pub skip: Option<u32>,
    pub include_out_of_stock: Option<bool>,
    pub location_state: Option<String>,
    pub location_city: Option<String>,
    pub category_ids: Vec<EntityId>,
}

impl SearchParams {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    /// True when the term has no searchable characters.
    pub fn is_blank(&self) -> bool {
        self.term.trim().is_empty()
    }

    /// Query pairs in the order the backend documents them. `categoryIds` is
    /// repeated once per id.
    pub fn query_pairs(&self, style: SearchStyle) -> Vec<(&'static str, String)> {
        let nonzero = |v: Option<u32>| v.filter(|n| *n != 0);
        let text = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());

        let mut pairs = vec![("term", self.term.clone())];

        match style {
            SearchStyle::Advanced => {
                if let Some(entity_type) = text(&self.entity_type) {
                    pairs.push(("entityType", entity_type));
                }
                if let Some(limit) = nonzero(self.product_limit) {
                    pairs.push(("productLimit", limit.to_string()));
                }
                if let Some(limit) = nonzero(self.store_limit) {
                    pairs.push(("storeLimit", limit.to_string()));
                }
                if let Some(limit) = nonzero(self.category_limit) {
                    pairs.push(("categoryLimit", limit.to_string()));
                }
            }
            SearchStyle::Listing => {
                let entity_type = text(&self.entity_type).unwrap_or_else(|| "all".to_string());
                let product_limit = nonzero(self.product_limit).unwrap_or(DEFAULT_ENTITY_LIMIT);
                let store_limit = nonzero(self.store_limit).unwrap_or(DEFAULT_ENTITY_LIMIT);
                let category_limit =
                    nonzero(self.category_limit).unwrap_or(DEFAULT_CATEGORY_LIMIT);

                pairs.push(("entityType", entity_type));
                pairs.push(("productLimit", product_limit.to_string()));
                pairs.push(("storeLimit", store_limit.to_string()));
                pairs.push(("categoryLimit", category_limit.to_string()));
            }
        }

        if let Some(skip) = nonzero(self.skip) {
            pairs.push(("skip", skip.to_string()));
        }

        // Advanced only sends the flag when it widens the search.
        let include_out_of_stock = match style {
            SearchStyle::Advanced => self.include_out_of_stock.filter(|v| *v),
            SearchStyle::Listing => self.include_out_of_stock,
        };
        if let Some(flag) = include_out_of_stock {
            pairs.push(("includeOutOfStock", flag.to_string()));
        }

        if let Some(state) = text(&self.location_state) {
            pairs.push(("locationState", state));
        }
        if let Some(city) = text(&self.location_city) {
            pairs.push(("locationCity", city));
        }

        pairs.extend(
            self.category_ids
                .iter()
                .map(|id| ("categoryIds", id.to_string())),
        );

        pairs
    }

    /// Full request URL for `endpoint` with the encoded query string.
    pub fn to_url(&self, endpoint: &str, style: SearchStyle) -> Result<String> {
        let mut url = Url::parse(endpoint)
            .map_err(|e| Error::InvalidRequest(format!("Invalid search URL {}: {}", endpoint, e)))?;
        url.query_pairs_mut().extend_pairs(self.query_pairs(style));
        Ok(url.into())
    }
}
