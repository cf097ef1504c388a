//! Digemart API client and types.
//!
//! This module provides the raw wire types, their normalization into display
//! records, and an HTTP client for the Digemart marketplace backend.

mod client;
pub mod normalize;
mod search;
mod types;

pub use client::ApiClient;
pub use normalize::parse_link;
pub use search::{DEFAULT_CATEGORY_LIMIT, DEFAULT_ENTITY_LIMIT, SearchParams, SearchStyle};
pub use types::*;
