//! Conversion of raw API payloads into display records.
//!
//! One function per dialect: the landing page, the advanced search and the
//! listing search each have their own fallback rules.

use super::search::SearchStyle;
use super::types::*;
use crate::format::{DESCRIPTION_PLACEHOLDER, format_currency, format_location, format_price};
use crate::types::{
    DisplayCategory, DisplayProduct, DisplayStore, SearchCounts, SearchOutcome, SearchResult,
};

/// Treat empty strings like missing values.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn description_or_placeholder(value: Option<String>) -> String {
    present(value).unwrap_or_else(|| DESCRIPTION_PLACEHOLDER.to_string())
}

fn location_of(city: Option<&String>, state: Option<&String>) -> String {
    format_location(city.map(String::as_str), state.map(String::as_str))
}

/// Extract a checkout link from either `{link}` or `{data: {link}}`.
pub fn parse_link(body: &serde_json::Value) -> Option<String> {
    body.get("link")
        .and_then(|l| l.as_str())
        .or_else(|| body.get("data")?.get("link")?.as_str())
        .map(str::to_string)
}

/// Normalize a featured store from the landing page, preferring canonical
/// fields over legacy aliases.
pub fn landing_store(store: LandingStore) -> DisplayStore {
    let location = present(store.store_address)
        .or(present(store.location))
        .unwrap_or_else(|| {
            location_of(store.location_city.as_ref(), store.location_state.as_ref())
        });

    let description = store
        .store_category
        .and_then(|c| present(c.description))
        .or(present(store.description));

    DisplayStore {
        id: store.id,
        name: present(store.store_name)
            .or(present(store.name))
            .unwrap_or_default(),
        description: description_or_placeholder(description),
        rating: store.average_rating.or(store.rating),
        reviews: store.total_ratings.or(store.reviews),
        location,
        image: present(store.logo).or(present(store.image)).unwrap_or_default(),
        url: present(store.store_url)
            .or(present(store.url))
            .unwrap_or_default(),
        verified: store.verified.unwrap_or(false),
    }
}

fn advanced_product(product: SearchProduct) -> DisplayProduct {
    DisplayProduct {
        location: location_of(product.location_city.as_ref(), product.location_state.as_ref()),
        id: product.id,
        name: product.name,
        description: description_or_placeholder(product.description),
        price: format_currency(&product.price),
        store_name: product.store_name.unwrap_or_default(),
        store_url: product.store_url.unwrap_or_default(),
        image: product.image.unwrap_or_default(),
        category_name: product.category_name,
        rank: product.rank,
    }
}

fn advanced_store(store: SearchStore) -> DisplayStore {
    DisplayStore {
        location: location_of(store.location_city.as_ref(), store.location_state.as_ref()),
        id: store.id,
        name: store.name,
        description: description_or_placeholder(store.description),
        rating: store.rating,
        reviews: store.reviews,
        image: store.image.unwrap_or_default(),
        url: store.url.unwrap_or_default(),
        verified: store.verified.unwrap_or(false),
    }
}

fn listing_product(product: SearchProduct) -> DisplayProduct {
    DisplayProduct {
        location: location_of(product.location_city.as_ref(), product.location_state.as_ref()),
        id: product.id,
        name: product.name,
        description: description_or_placeholder(product.description),
        price: format_price(&product.price),
        store_name: present(product.store_name).unwrap_or_else(|| "Unknown Store".to_string()),
        store_url: product.store_url.unwrap_or_default(),
        image: product.image.unwrap_or_default(),
        category_name: None,
        rank: product.rank,
    }
}

fn listing_store(store: SearchStore) -> DisplayStore {
    DisplayStore {
        location: location_of(store.location_city.as_ref(), store.location_state.as_ref()),
        id: store.id,
        name: store.name,
        description: description_or_placeholder(store.description),
        rating: store.rating,
        reviews: None,
        image: store.image.unwrap_or_default(),
        url: store.url.unwrap_or_default(),
        verified: false,
    }
}

fn category(category: SearchCategory) -> DisplayCategory {
    DisplayCategory {
        id: category.id,
        name: category.name,
        description: description_or_placeholder(category.description),
        image: category.image.unwrap_or_default(),
        url: category.url.unwrap_or_default(),
    }
}

type ProductNormalizer = fn(SearchProduct) -> DisplayProduct;
type StoreNormalizer = fn(SearchStore) -> DisplayStore;

/// Turn the `data` section of a search response into display records.
///
/// Results are grouped products, stores, categories. The listing style then
/// orders them by descending rank; the sort is stable so equally ranked
/// entries keep that grouping.
pub fn search_outcome(data: SearchData, style: SearchStyle) -> SearchOutcome {
    let (to_product, to_store): (ProductNormalizer, StoreNormalizer) = match style {
        SearchStyle::Advanced => (advanced_product, advanced_store),
        SearchStyle::Listing => (listing_product, listing_store),
    };

    let products = data.products.unwrap_or_default().into_iter().map(to_product);
    let stores = data.stores.unwrap_or_default().into_iter().map(to_store);
    let categories = data.categories.unwrap_or_default().into_iter().map(category);

    let mut results: Vec<SearchResult> = products
        .map(SearchResult::from)
        .chain(stores.map(SearchResult::from))
        .chain(categories.map(SearchResult::from))
        .collect();

    if style == SearchStyle::Listing {
        results.sort_by(|a, b| b.rank().total_cmp(&a.rank()));
    }

    SearchOutcome {
        results,
        counts: data.counts.unwrap_or_default(),
    }
}

/// Featured stores whose name, description or location contains `term`,
/// ignoring case.
pub fn filter_stores(stores: Vec<DisplayStore>, term: &str) -> Vec<DisplayStore> {
    let needle = term.to_lowercase();
    stores
        .into_iter()
        .filter(|store| {
            store.name.to_lowercase().contains(&needle)
                || store.description.to_lowercase().contains(&needle)
                || store.location.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Wrap degraded store hits as a search outcome.
pub(crate) fn fallback_outcome(stores: Vec<DisplayStore>) -> SearchOutcome {
    let found = stores.len() as u64;
    SearchOutcome {
        results: stores.into_iter().map(SearchResult::from).collect(),
        counts: SearchCounts {
            stores: found,
            total: found,
            ..SearchCounts::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::LOCATION_PLACEHOLDER;
    use crate::types::EntityId;
    use serde_json::json;

    fn product(id: i64, rank: Option<f64>) -> SearchProduct {
        SearchProduct {
            id: EntityId::Number(id),
            name: format!("product-{id}"),
            price: "1500".to_string(),
            rank,
            ..SearchProduct::default()
        }
    }

    #[test]
    fn parse_link_shapes() {
        assert_eq!(parse_link(&json!({"link": "x"})).as_deref(), Some("x"));
        assert_eq!(
            parse_link(&json!({"status": true, "data": {"link": "y"}})).as_deref(),
            Some("y")
        );
        assert_eq!(parse_link(&json!({})), None);
        assert_eq!(parse_link(&json!({"link": 42})), None);
        assert_eq!(parse_link(&json!(null)), None);
    }

    #[test]
    fn landing_store_prefers_canonical_fields() {
        let store = landing_store(LandingStore {
            id: EntityId::Number(1),
            store_name: Some("Canonical".to_string()),
            name: Some("Alias".to_string()),
            store_category: Some(StoreCategory {
                description: Some("Groceries".to_string()),
            }),
            description: Some("alias description".to_string()),
            average_rating: Some(4.8),
            rating: Some(1.0),
            total_ratings: Some(20),
            store_address: Some("12 Marina, Lagos".to_string()),
            logo: Some("logo.png".to_string()),
            image: Some("image.png".to_string()),
            store_url: Some("/s/canonical".to_string()),
            verified: Some(true),
            ..LandingStore::default()
        });

        assert_eq!(store.name, "Canonical");
        assert_eq!(store.description, "Groceries");
        assert_eq!(store.rating, Some(4.8));
        assert_eq!(store.reviews, Some(20));
        assert_eq!(store.location, "12 Marina, Lagos");
        assert_eq!(store.image, "logo.png");
        assert_eq!(store.url, "/s/canonical");
        assert!(store.verified);
    }

    #[test]
    fn landing_store_falls_back_to_aliases_and_placeholders() {
        let store = landing_store(LandingStore {
            id: EntityId::Number(2),
            store_name: Some(String::new()),
            name: Some("Alias".to_string()),
            rating: Some(3.0),
            reviews: Some(4),
            location_city: Some("Abuja".to_string()),
            image: Some("image.png".to_string()),
            ..LandingStore::default()
        });

        assert_eq!(store.name, "Alias");
        assert_eq!(store.description, DESCRIPTION_PLACEHOLDER);
        assert_eq!(store.rating, Some(3.0));
        assert_eq!(store.reviews, Some(4));
        assert_eq!(store.location, "Abuja");
        assert_eq!(store.image, "image.png");
        assert_eq!(store.url, "");
        assert!(!store.verified);

        let bare = landing_store(LandingStore::default());
        assert_eq!(bare.location, LOCATION_PLACEHOLDER);
    }

    #[test]
    fn advanced_style_keeps_grouping_and_formats_currency() {
        let data = SearchData {
            products: Some(vec![product(1, Some(1.0)), product(2, Some(9.0))]),
            stores: Some(vec![SearchStore {
                id: EntityId::Number(10),
                name: "Store".to_string(),
                reviews: Some(3),
                verified: Some(true),
                ..SearchStore::default()
            }]),
            categories: None,
            counts: None,
        };

        let outcome = search_outcome(data, SearchStyle::Advanced);
        let names: Vec<&str> = outcome.results.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["product-1", "product-2", "Store"]);
        assert_eq!(outcome.counts, SearchCounts::default());

        match &outcome.results[0] {
            SearchResult::Product(p) => {
                assert_eq!(p.price, "$1500.00");
                assert_eq!(p.location, LOCATION_PLACEHOLDER);
                assert_eq!(p.description, DESCRIPTION_PLACEHOLDER);
            }
            other => panic!("expected product, got {other:?}"),
        }
        match &outcome.results[2] {
            SearchResult::Store(s) => {
                assert_eq!(s.reviews, Some(3));
                assert!(s.verified);
            }
            other => panic!("expected store, got {other:?}"),
        }
    }

    #[test]
    fn listing_style_orders_by_rank() {
        let data = SearchData {
            products: Some(vec![
                product(1, Some(3.0)),
                product(2, None),
                product(3, Some(7.0)),
            ]),
            ..SearchData::default()
        };

        let outcome = search_outcome(data, SearchStyle::Listing);
        let names: Vec<&str> = outcome.results.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["product-3", "product-1", "product-2"]);

        match &outcome.results[0] {
            SearchResult::Product(p) => {
                assert_eq!(p.price, "$1,500.00");
                assert_eq!(p.store_name, "Unknown Store");
            }
            other => panic!("expected product, got {other:?}"),
        }
    }

    #[test]
    fn listing_store_drops_reviews_and_verification() {
        let data = SearchData {
            stores: Some(vec![SearchStore {
                id: EntityId::Number(1),
                name: "Store".to_string(),
                rating: Some(4.0),
                reviews: Some(12),
                verified: Some(true),
                location_state: Some("Lagos".to_string()),
                ..SearchStore::default()
            }]),
            ..SearchData::default()
        };

        let outcome = search_outcome(data, SearchStyle::Listing);
        match &outcome.results[0] {
            SearchResult::Store(s) => {
                assert_eq!(s.rating, Some(4.0));
                assert_eq!(s.reviews, None);
                assert!(!s.verified);
                assert_eq!(s.location, "Lagos");
            }
            other => panic!("expected store, got {other:?}"),
        }
    }

    #[test]
    fn filter_is_case_insensitive_across_fields() {
        let stores = vec![
            landing_store(LandingStore {
                id: EntityId::Number(1),
                name: Some("LAGOS Fresh".to_string()),
                ..LandingStore::default()
            }),
            landing_store(LandingStore {
                id: EntityId::Number(2),
                name: Some("Kano Market".to_string()),
                location_city: Some("Kano".to_string()),
                ..LandingStore::default()
            }),
            landing_store(LandingStore {
                id: EntityId::Number(3),
                name: Some("Island Deli".to_string()),
                location_city: Some("Lagos".to_string()),
                ..LandingStore::default()
            }),
        ];

        let hits = filter_stores(stores, "lagos");
        let ids: Vec<String> = hits.iter().map(|s| s.id.to_string()).collect();
        assert_eq!(ids, ["1", "3"]);

        let outcome = fallback_outcome(hits);
        assert_eq!(outcome.counts.stores, 2);
        assert_eq!(outcome.counts.total, 2);
    }
}
