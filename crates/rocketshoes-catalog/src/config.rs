//! # Catalog Configuration
//!
//! Endpoint configuration for the catalog service.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variable (`ROCKETSHOES_API_URL`)
//! 2. Defaults (the local dev API server)

use std::time::Duration;
use url::Url;

use crate::error::{CatalogError, CatalogResult};

/// Base URL of the local dev API server.
///
/// The storefront dev environment serves `/products/{id}` and `/stock/{id}`
/// from a fixture server on this port.
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Catalog service configuration.
///
/// ## Example
/// ```rust
/// use rocketshoes_catalog::CatalogConfig;
///
/// let config = CatalogConfig::new("https://api.rocketshoes.dev").unwrap();
/// assert_eq!(config.base_url.as_str(), "https://api.rocketshoes.dev/");
/// ```
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog service.
    pub base_url: Url,

    /// Per-request timeout.
    /// Default: 10 seconds
    pub timeout: Duration,
}

impl CatalogConfig {
    /// Creates a configuration for the given base URL.
    pub fn new(base_url: impl AsRef<str>) -> CatalogResult<Self> {
        let base_url = Url::parse(base_url.as_ref())?;

        if base_url.cannot_be_a_base() {
            return Err(CatalogError::InvalidUrl(format!(
                "catalog base URL cannot carry paths: {}",
                base_url
            )));
        }

        Ok(CatalogConfig {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Creates a configuration from the environment.
    ///
    /// ## Environment Variables
    /// - `ROCKETSHOES_API_URL`: Override the catalog base URL
    pub fn from_env() -> CatalogResult<Self> {
        let base_url =
            std::env::var("ROCKETSHOES_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        CatalogConfig::new(base_url)
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for CatalogConfig {
    /// Returns the local dev API configuration.
    fn default() -> Self {
        CatalogConfig {
            base_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_dev_server() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url.as_str(), "http://localhost:3333/");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_rejects_invalid_url() {
        assert!(matches!(
            CatalogConfig::new("definitely not a url").unwrap_err(),
            CatalogError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_rejects_cannot_be_a_base() {
        assert!(matches!(
            CatalogConfig::new("mailto:cart@rocketshoes.dev").unwrap_err(),
            CatalogError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_timeout_builder() {
        let config = CatalogConfig::default().timeout(Duration::from_secs(2));
        assert_eq!(config.timeout, Duration::from_secs(2));
    }
}
