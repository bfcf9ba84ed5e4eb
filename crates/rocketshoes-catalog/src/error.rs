//! # Catalog Error Types
//!
//! Error types for catalog/stock lookups.
//!
//! ## Why Structured Kinds
//! The store chooses the user-facing message by matching on these variants.
//! `NotFound` gets a fixed storefront message; everything else is opaque and
//! its `Display` output is forwarded to the notification channel verbatim.
//! No caller ever compares message strings.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog lookup errors.
///
/// ## Design Principles
/// - The not-found condition is distinguished from every other failure at
///   this boundary, so callers branch on a kind, not on message content
/// - Transport and decode failures carry the underlying message as context
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog has no such entity (HTTP 404).
    ///
    /// ## When This Occurs
    /// - Product id does not exist in the catalog
    /// - Product exists but has no stock record
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: u64 },

    /// Invalid catalog base URL or endpoint.
    #[error("invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete successfully.
    ///
    /// ## When This Occurs
    /// - Connection refused / DNS failure
    /// - Request timeout
    /// - Non-404 error status (5xx, 401, ...)
    #[error("catalog request failed: {0}")]
    RequestFailed(String),

    /// The response body did not decode as the expected shape.
    #[error("catalog response malformed: {0}")]
    MalformedResponse(String),
}

impl CatalogError {
    /// Returns true for the not-found condition.
    ///
    /// The store uses this to select the fixed "failed to add/change"
    /// storefront messages instead of forwarding the raw error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

// =============================================================================
// Error Conversions
// =============================================================================

/// Convert reqwest errors to CatalogError.
///
/// ## Error Mapping
/// ```text
/// body decode failure   → CatalogError::MalformedResponse
/// everything else       → CatalogError::RequestFailed
/// ```
/// (404 never reaches this conversion; the client checks the status first.)
impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CatalogError::MalformedResponse(err.to_string())
        } else {
            CatalogError::RequestFailed(err.to_string())
        }
    }
}

impl From<url::ParseError> for CatalogError {
    fn from(err: url::ParseError) -> Self {
        CatalogError::InvalidUrl(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let err = CatalogError::NotFound {
            entity: "Product",
            id: 99,
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Product not found: 99");

        assert!(!CatalogError::RequestFailed("connection refused".into()).is_not_found());
    }

    #[test]
    fn test_opaque_errors_keep_their_message() {
        let err = CatalogError::RequestFailed("connection reset by peer".into());
        assert_eq!(
            err.to_string(),
            "catalog request failed: connection reset by peer"
        );

        let err = CatalogError::MalformedResponse("expected value at line 1".into());
        assert_eq!(
            err.to_string(),
            "catalog response malformed: expected value at line 1"
        );
    }

    #[test]
    fn test_invalid_url_conversion() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: CatalogError = parse_err.into();
        assert!(matches!(err, CatalogError::InvalidUrl(_)));
    }
}
