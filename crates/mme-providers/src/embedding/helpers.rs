//! Common helpers for embedding providers
//!
//! Shared construction and chunk-size handling used by provider
//! implementations.

use std::time::Duration;

/// Common constructor patterns used by providers and transports
pub mod constructor {
    use std::time::Duration;

    use mme_domain::error::{Error, Result};

    /// Trim an API key, rejecting an empty one
    pub fn validate_api_key(provider: &str, api_key: Option<&str>) -> Result<String> {
        match api_key.map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key.to_string()),
            _ => Err(Error::configuration(format!("{provider} requires api_key"))),
        }
    }

    /// Trim a URL and drop trailing slashes
    pub fn validate_url(url: Option<String>) -> Option<String> {
        url.map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
    }

    /// Get effective URL with fallback to default
    pub fn get_effective_url(provided_url: Option<&str>, default_url: &str) -> String {
        provided_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| default_url.to_string())
    }

    /// Timeout from seconds, zero meaning the default
    pub fn timeout_from_secs(secs: u64) -> Duration {
        if secs == 0 {
            super::DEFAULT_EMBEDDING_TIMEOUT
        } else {
            Duration::from_secs(secs)
        }
    }

    /// Build the shared HTTP client used by API transports
    pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::configuration_with_source("Failed to create HTTP client", e))
    }
}

/// Resolve the chunk size for one call
///
/// `None` keeps the configured size; an explicit zero is rejected.
pub fn effective_chunk_size(
    configured: usize,
    chunk_size_override: Option<usize>,
) -> mme_domain::Result<usize> {
    match chunk_size_override {
        Some(0) => Err(mme_domain::Error::invalid_argument(
            "chunk_size override must be greater than 0",
        )),
        Some(size) => Ok(size),
        None => Ok(configured),
    }
}

/// Default timeout for embedding API requests
pub const DEFAULT_EMBEDDING_TIMEOUT: Duration =
    Duration::from_secs(mme_domain::constants::DEFAULT_REQUEST_TIMEOUT_SECS);
