//! Static catalog fetch.
//!
//! Client-side (hydrate): a plain `GET /kidsdata.json` via `gloo-net`.
//! Server-side (SSR): no network; callers receive `CatalogError::Unavailable`
//! and render their loading placeholder until hydration takes over.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use super::types::CatalogItem;

/// Path of the static catalog document.
pub const CATALOG_PATH: &str = "/kidsdata.json";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Network(String),
    #[error("catalog request returned status {0}")]
    Status(u16),
    #[error("catalog document is malformed: {0}")]
    Parse(String),
    #[error("catalog fetch is only available in the browser")]
    Unavailable,
}

/// Decode the catalog document body.
///
/// # Errors
///
/// Returns `CatalogError::Parse` when the body is not an array of records.
pub fn parse_catalog(body: &str) -> Result<Vec<CatalogItem>, CatalogError> {
    serde_json::from_str(body).map_err(|e| CatalogError::Parse(e.to_string()))
}

/// Fetch the full catalog.
///
/// # Errors
///
/// Returns an error on network failure, a non-OK status, or a malformed body.
pub async fn fetch_catalog() -> Result<Vec<CatalogItem>, CatalogError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CATALOG_PATH)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(CatalogError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| CatalogError::Network(e.to_string()))?;
        parse_catalog(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(CatalogError::Unavailable)
    }
}
