//! Display records handed to UI code.
//!
//! These are normalized, UI-ready views built from the raw API payloads in
//! [`crate::api`]. Each record serializes with a fixed `type` tag
//! (`"product"`, `"store"`, `"category"`).

use serde::{Deserialize, Serialize};

/// Backend identifier. The API sends numeric ids for most entities but some
/// endpoints return them as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl Default for EntityId {
    fn default() -> Self {
        EntityId::Number(0)
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        EntityId::Number(n)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        EntityId::Text(s.to_string())
    }
}

/// Product as shown in search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "product", rename_all = "camelCase")]
pub struct DisplayProduct {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    /// Formatted price, e.g. "$1,200.00".
    pub price: String,
    pub store_name: String,
    pub store_url: String,
    pub image: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    /// Server relevance score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<f64>,
}

/// Store as shown on the landing page and in search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "store", rename_all = "camelCase")]
pub struct DisplayStore {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u64>,
    pub location: String,
    pub image: String,
    pub url: String,
    #[serde(default)]
    pub verified: bool,
}

/// Category as shown in search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "category", rename_all = "camelCase")]
pub struct DisplayCategory {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub url: String,
}

/// One entry of a combined search result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchResult {
    Product(DisplayProduct),
    Store(DisplayStore),
    Category(DisplayCategory),
}

impl SearchResult {
    /// Relevance used for ordering; entries without a rank count as 0.
    pub fn rank(&self) -> f64 {
        match self {
            SearchResult::Product(p) => p.rank.unwrap_or(0.0),
            SearchResult::Store(_) | SearchResult::Category(_) => 0.0,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            SearchResult::Product(p) => &p.name,
            SearchResult::Store(s) => &s.name,
            SearchResult::Category(c) => &c.name,
        }
    }

    /// The serialized `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchResult::Product(_) => "product",
            SearchResult::Store(_) => "store",
            SearchResult::Category(_) => "category",
        }
    }
}

impl From<DisplayProduct> for SearchResult {
    fn from(p: DisplayProduct) -> Self {
        SearchResult::Product(p)
    }
}

impl From<DisplayStore> for SearchResult {
    fn from(s: DisplayStore) -> Self {
        SearchResult::Store(s)
    }
}

impl From<DisplayCategory> for SearchResult {
    fn from(c: DisplayCategory) -> Self {
        SearchResult::Category(c)
    }
}

/// Per-entity hit counts reported by the search endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCounts {
    pub products: u64,
    pub stores: u64,
    pub categories: u64,
    pub total: u64,
}

/// Results plus counts of a search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub results: Vec<SearchResult>,
    pub counts: SearchCounts,
}
