//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from API providers.
//! These are shared utilities, not ports.

use mme_domain::error::{Error, Result};
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Format transport error message for a provider
fn transport_error(provider: &str, context: &str, details: &str) -> Error {
    Error::transport(format!("{provider} {context}: {details}"))
}

/// Utilities for processing HTTP responses
///
/// Provides common response handling patterns used by HTTP transports.
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse the JSON body into `T`
    ///
    /// A body that does not decode into `T` is a transport error. Count and
    /// ordering checks only apply to decoded records.
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `provider_name` - Name of the provider for error messages
    ///
    /// # Returns
    /// Parsed body on success, or a transport error naming the failure kind
    pub async fn check_and_parse<T: DeserializeOwned>(
        response: Response,
        provider_name: &str,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            return Err(match code {
                401 | 403 => transport_error(provider_name, "authentication failed", &error_text),
                429 => transport_error(provider_name, "rate limit exceeded", &error_text),
                500..=599 => transport_error(
                    provider_name,
                    &format!("server error ({code})"),
                    &error_text,
                ),
                _ => transport_error(
                    provider_name,
                    &format!("request failed ({code})"),
                    &error_text,
                ),
            });
        }

        response
            .json()
            .await
            .map_err(|e| transport_error(provider_name, "response parse failed", &e.to_string()))
    }
}
