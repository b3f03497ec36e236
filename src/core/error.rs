//! Error types for the product data source.
//!
//! Component logic is infallible by design — absent optional fields are
//! non-matches, never errors. The only fallible surface is fetching the
//! product list, and those failures degrade to an empty storefront.

use thiserror::Error;

/// Network/fetch-related errors for the product list request.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// Failed to create the HTTP request
    #[error("failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, DNS, offline, ...)
    #[error("network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read the response body
    #[error("failed to read response")]
    ResponseReadFailed,
    /// Response body was not text
    #[error("invalid response content")]
    InvalidContent,
    /// Response was not valid product JSON
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("request timed out")]
    Timeout,
}
