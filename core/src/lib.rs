//! Digemart Client SDK - Core Library
//!
//! Platform-agnostic access to the Digemart marketplace API.
//!
//! The client issues one request per call, normalizes the backend's response
//! dialects into display records ([`DisplayProduct`], [`DisplayStore`],
//! [`DisplayCategory`]) and exposes typed helpers for checkout links, wallet
//! login and search. HTTP goes through the [`Transport`] trait so the same
//! client runs natively and in WebAssembly.
//!
//! # Example
//!
//! ```rust,ignore
//! use digemart_core::{ApiClient, SearchParams};
//!
//! let client = ApiClient::default();
//!
//! // Featured stores for the landing page
//! let stores = client.fetch_top_stores().await?;
//!
//! // Search box: never fails on a search outage, degrades to featured stores
//! let results = client
//!     .search_stores_and_products("lagos", &SearchParams::default())
//!     .await?;
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod transport;
pub mod types;

pub use api::{ApiClient, SearchParams, SearchStyle};
pub use config::{ClientConfig, DEFAULT_API_BASE, FailurePolicy};
pub use error::{Error, Result};
pub use format::{format_currency, format_location, format_price};
pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport, TransportFuture};
pub use types::{
    DisplayCategory, DisplayProduct, DisplayStore, EntityId, SearchCounts, SearchOutcome,
    SearchResult,
};
