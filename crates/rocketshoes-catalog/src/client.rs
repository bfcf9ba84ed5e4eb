//! # Catalog Client
//!
//! HTTP client for the catalog service.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Lookup Flow                                │
//! │                                                                         │
//! │  store.add_product(1)                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogClient::stock(1)                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET {base_url}/stock/1                                                 │
//! │       │                                                                 │
//! │       ├── 200 { "id": 1, "amount": 5 } ──► Ok(Stock)                    │
//! │       ├── 404 ───────────────────────────► Err(NotFound)                │
//! │       ├── other status ──────────────────► Err(RequestFailed)           │
//! │       └── bad body ──────────────────────► Err(MalformedResponse)       │
//! │                                                                         │
//! │  Lookups are per-operation and uncached: stock must be as fresh as      │
//! │  the mutation it gates.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};
use rocketshoes_core::{Product, Stock};

// =============================================================================
// Catalog Trait
// =============================================================================

/// Read access to the catalog service (implemented by `CatalogClient`).
///
/// The store consumes the catalog through this trait so tests can substitute
/// an in-memory fake.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetches the available stock for a product.
    async fn stock(&self, product_id: u64) -> CatalogResult<Stock>;

    /// Fetches product metadata (the response carries no cart amount).
    async fn product(&self, product_id: u64) -> CatalogResult<Product>;
}

// =============================================================================
// Catalog Client
// =============================================================================

/// reqwest-backed client for the catalog service.
///
/// ## Usage
/// ```rust,ignore
/// let client = CatalogClient::new(&CatalogConfig::from_env()?)?;
/// let stock = client.stock(1).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Creates a new catalog client.
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::RequestFailed(e.to_string()))?;

        Ok(CatalogClient {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Builds an endpoint URL from path segments.
    ///
    /// Segment-wise construction keeps ids correctly escaped and tolerates a
    /// base URL with or without a trailing slash.
    fn endpoint(&self, segments: &[&str]) -> CatalogResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                CatalogError::InvalidUrl(format!("catalog base URL cannot carry paths: {}", self.base_url))
            })?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    /// Executes a GET request and decodes the JSON body.
    ///
    /// 404 is resolved to `NotFound` before any other status handling, so
    /// the unknown-product condition is never conflated with transport
    /// failures.
    async fn get_json<T: DeserializeOwned>(
        &self,
        entity: &'static str,
        id: u64,
        url: Url,
    ) -> CatalogResult<T> {
        debug!(%url, "Fetching from catalog");

        let response = self.http.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(entity = entity, id = id, "Catalog returned 404");
            return Err(CatalogError::NotFound { entity, id });
        }

        let response = response.error_for_status()?;
        let value = response.json::<T>().await?;
        Ok(value)
    }
}

#[async_trait]
impl Catalog for CatalogClient {
    async fn stock(&self, product_id: u64) -> CatalogResult<Stock> {
        let url = self.endpoint(&["stock", &product_id.to_string()])?;
        self.get_json("Stock", product_id, url).await
    }

    async fn product(&self, product_id: u64) -> CatalogResult<Product> {
        let url = self.endpoint(&["products", &product_id.to_string()])?;
        self.get_json("Product", product_id, url).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> CatalogClient {
        CatalogClient::new(&CatalogConfig::new(base).unwrap()).unwrap()
    }

    #[test]
    fn test_endpoint_construction() {
        let client = client("http://localhost:3333");
        let url = client.endpoint(&["stock", "1"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3333/stock/1");

        let url = client.endpoint(&["products", "42"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3333/products/42");
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let client = client("http://localhost:3333/");
        let url = client.endpoint(&["stock", "1"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3333/stock/1");
    }

    #[test]
    fn test_endpoint_preserves_base_path() {
        let client = client("https://api.rocketshoes.dev/v1");
        let url = client.endpoint(&["products", "7"]).unwrap();
        assert_eq!(url.as_str(), "https://api.rocketshoes.dev/v1/products/7");
    }

    #[tokio::test]
    async fn test_unreachable_catalog_is_a_request_failure() {
        // Port 9 (discard) is never serving the catalog; connecting fails fast
        let client = CatalogClient::new(
            &CatalogConfig::new("http://127.0.0.1:9")
                .unwrap()
                .timeout(std::time::Duration::from_millis(250)),
        )
        .unwrap();

        let err = client.stock(1).await.unwrap_err();
        assert!(
            matches!(err, CatalogError::RequestFailed(_)),
            "expected RequestFailed, got: {err:?}"
        );
    }
}
